use super::helpers;
use crate::core::{MeshData, Shape, Vertex};
use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ModelUniforms {
    pub(crate) model: [[f32; 4]; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// GPU copy of one section mesh plus its model transform.
pub(crate) struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

pub(crate) struct ToonResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) meshes: Vec<GpuMesh>,
}

pub(crate) fn create_toon_resources(
    device: &wgpu::Device,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    shapes: &[Shape],
) -> ToonResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("toon_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::TOON_WGSL.into()),
    });
    let model_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("toon_model_bgl"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("toon_pl"),
        bind_group_layouts: &[scene_bgl, &model_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        "toon_pipeline",
        &pl,
        &shader,
        &[Vertex::layout()],
        color_format,
        Some(wgpu::Face::Back),
    );
    let meshes = shapes
        .iter()
        .map(|shape| {
            let data = shape.build();
            log::info!(
                "[gpu] mesh {} triangles={}",
                shape.name(),
                data.triangle_count()
            );
            upload_mesh(device, &model_bgl, shape.name(), &data)
        })
        .collect();

    ToonResources {
        pipeline,
        meshes,
    }
}

fn upload_mesh(
    device: &wgpu::Device,
    model_bgl: &wgpu::BindGroupLayout,
    label: &'static str,
    data: &MeshData,
) -> GpuMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&data.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&data.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("model_uniforms"),
        contents: bytemuck::bytes_of(&ModelUniforms {
            model: Mat4::IDENTITY.to_cols_array_2d(),
        }),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("model_bg"),
        layout: model_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: model_buffer.as_entire_binding(),
        }],
    });
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: data.indices.len() as u32,
        model_buffer,
        model_bind_group,
    }
}

impl GpuMesh {
    pub(crate) fn write_model(&self, queue: &wgpu::Queue, model: Mat4) {
        let u = ModelUniforms {
            model: model.to_cols_array_2d(),
        };
        queue.write_buffer(&self.model_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(1, &self.model_bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
