use crate::core::{SceneContent, SceneState, LIGHT_DIRECTION, LIGHT_INTENSITY, TOON_BANDS};
use web_sys as web;

mod helpers;
mod meshes;
mod particles;
mod targets;
use meshes::{create_toon_resources, ToonResources};
use particles::{create_particle_resources, ParticleResources};
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    toon_color: [f32; 4],
    particle_color: [f32; 4],
    light: [f32; 4],
    bands: [f32; 4],
    viewport: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    toon: ToonResources,
    particles: ParticleResources,
    targets: RenderTargets,

    width: u32,
    height: u32,
    // Linear colors are recomputed only when the materials change.
    color_revision: Option<u64>,
    toon_linear: [f32; 4],
    particle_linear: [f32; 4],
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        content: &SceneContent,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web: older WebGPU impls reject unknown fields.
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: let the page background show through.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let scene_uniform_buffer = helpers::create_uniform_buffer(
            &device,
            "scene_uniforms",
            std::mem::size_of::<SceneUniforms>(),
        );
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        let shapes: Vec<_> = content.sections.iter().map(|s| s.shape).collect();
        let toon = create_toon_resources(&device, &scene_bgl, format, &shapes);
        let particles =
            create_particle_resources(&device, &scene_bgl, format, &content.particles);
        let targets = RenderTargets::new(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_uniform_buffer,
            scene_bind_group,
            toon,
            particles,
            targets,
            width,
            height,
            color_revision: None,
            toon_linear: [0.0; 4],
            particle_linear: [0.0; 4],
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn sync_colors(&mut self, state: &SceneState) {
        let materials = &state.content.materials;
        if self.color_revision != Some(materials.revision()) {
            self.toon_linear = materials.toon.color.to_linear_rgba();
            self.particle_linear = materials.particles.color.to_linear_rgba();
            self.color_revision = Some(materials.revision());
        }
    }

    pub fn render(&mut self, state: &SceneState) -> Result<(), wgpu::SurfaceError> {
        self.sync_colors(state);
        let light = glam::Vec3::from_array(LIGHT_DIRECTION).normalize_or_zero();
        let points = &state.content.materials.particles;
        let attenuate = if points.size_attenuation { 1.0 } else { 0.0 };
        let u = SceneUniforms {
            view_proj: state.view_proj().to_cols_array_2d(),
            view: state.view_matrix().to_cols_array_2d(),
            toon_color: self.toon_linear,
            particle_color: self.particle_linear,
            light: [light.x, light.y, light.z, LIGHT_INTENSITY],
            bands: [TOON_BANDS[0], TOON_BANDS[1], TOON_BANDS[2], TOON_BANDS.len() as f32],
            viewport: [self.width as f32, self.height as f32, points.size, attenuate],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&u));
        for (mesh, section) in self.toon.meshes.iter().zip(&state.content.sections) {
            mesh.write_model(&self.queue, section.model_matrix());
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.set_pipeline(&self.toon.pipeline);
            for mesh in &self.toon.meshes {
                mesh.draw(&mut rpass);
            }
            self.particles.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
