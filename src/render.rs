use crate::camera::Camera;
use crate::core::MeshData;
use glam::Vec3;
use web_sys as web;

mod helpers;
mod mesh;
mod points;
mod targets;

pub use mesh::{GpuMesh, MeshInstance};
use points::PointsBuffer;
use targets::FrameTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    eye: [f32; 4],
    ambient: [f32; 4],
    light_dir: [[f32; 4]; 2],
    light_color: [[f32; 4]; 2],
    point_color: [f32; 4],
    point_params: [f32; 4],
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Direction pointing from the scene toward the light.
    pub direction: Vec3,
    pub color: [f32; 3],
}

impl DirectionalLight {
    pub const OFF: Self = Self {
        direction: Vec3::Y,
        color: [0.0; 3],
    };
}

#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient: [f32; 3],
    pub lights: [DirectionalLight; 2],
}

#[derive(Clone, Copy, Debug)]
pub struct PointStyle {
    pub color: [f32; 3],
    pub opacity: f32,
    /// Billboard edge length in world units.
    pub size: f32,
}

/// Everything needed to draw one frame.
pub struct SceneFrame<'f> {
    pub camera: &'f Camera,
    pub lighting: &'f Lighting,
    pub points: &'f [Vec3],
    pub point_style: PointStyle,
    pub meshes: &'f [GpuMesh],
}

/// How a 3D canvas should be configured.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceOptions {
    pub clear_color: wgpu::Color,
    /// Compose over the page instead of painting an opaque background.
    pub transparent: bool,
    pub point_capacity: u32,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: FrameTargets,

    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,
    points: PointsBuffer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, options: SurfaceOptions) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        // Falls back to WebGL2 when navigator.gpu exists but yields no adapter
        let instance =
            wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default())
                .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no graphics adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2-compatible limits so the GL backend can serve as well
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
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
        let alpha_mode = if options.transparent
            && caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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
        let targets = FrameTargets::new(&device, format, width, height);

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = mesh::create_mesh_pipeline(&device, &pipeline_layout, format);
        let points_pipeline = points::create_points_pipeline(&device, &pipeline_layout, format);
        let points = PointsBuffer::new(&device, options.point_capacity);

        log::info!(
            "[gpu] {:?} adapter, {}x{} {:?} alpha={:?}",
            adapter.get_info().backend,
            width,
            height,
            format,
            alpha_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene_buffer,
            scene_bind_group,
            mesh_pipeline,
            points_pipeline,
            points,
            width,
            height,
            clear_color: options.clear_color,
        })
    }

    /// Upload geometry for instanced drawing.
    pub fn create_mesh(&self, label: &str, mesh: &MeshData, instance_capacity: u32) -> GpuMesh {
        GpuMesh::new(&self.device, label, mesh, instance_capacity)
    }

    pub fn write_instances(&self, mesh: &mut GpuMesh, instances: &[MeshInstance]) {
        mesh.write_instances(&self.queue, instances);
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

    pub fn render(&mut self, frame: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        let surface_tex = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Skip this frame; the next one draws to the fresh swapchain
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = scene_uniforms(frame);
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.points.write(&self.queue, frame.points);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.color_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        // only the resolved swapchain image is kept
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);

            // Particles first so they always sit behind the meshes
            rpass.set_pipeline(&self.points_pipeline);
            self.points.draw(&mut rpass);

            rpass.set_pipeline(&self.mesh_pipeline);
            for mesh in frame.meshes {
                mesh.draw(&mut rpass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

fn scene_uniforms(frame: &SceneFrame) -> SceneUniforms {
    let view = frame.camera.view_matrix();
    let proj = frame.camera.projection_matrix();
    let eye = frame.camera.eye;
    let light = |i: usize| {
        let l = &frame.lighting.lights[i];
        let d = l.direction.normalize_or_zero();
        ([d.x, d.y, d.z, 0.0], [l.color[0], l.color[1], l.color[2], 1.0])
    };
    let (d0, c0) = light(0);
    let (d1, c1) = light(1);
    let a = frame.lighting.ambient;
    let p = &frame.point_style;
    SceneUniforms {
        view_proj: (proj * view).to_cols_array_2d(),
        view: view.to_cols_array_2d(),
        proj: proj.to_cols_array_2d(),
        eye: [eye.x, eye.y, eye.z, 1.0],
        ambient: [a[0], a[1], a[2], 1.0],
        light_dir: [d0, d1],
        light_color: [c0, c1],
        point_color: [p.color[0], p.color[1], p.color[2], p.opacity],
        point_params: [p.size, 0.0, 0.0, 0.0],
    }
}

const _: () = assert!(std::mem::size_of::<SceneUniforms>() % 16 == 0);
