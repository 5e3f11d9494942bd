use super::helpers;
use wgpu;
use wgpu::util::DeviceExt;

const CENTER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// Instanced sprite quads, one instance per particle position.
pub(crate) struct ParticleResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    positions: &[[f32; 3]],
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[scene_bgl],
        push_constant_ranges: &[],
    });
    let layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &CENTER_ATTRS,
    };
    let pipeline = helpers::make_scene_pipeline(
        device,
        "particles_pipeline",
        &pl,
        &shader,
        &[layout],
        color_format,
        None,
    );
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particle_positions"),
        contents: bytemuck::cast_slice(positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    ParticleResources {
        pipeline,
        instance_buffer,
        count: positions.len() as u32,
    }
}

impl ParticleResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
