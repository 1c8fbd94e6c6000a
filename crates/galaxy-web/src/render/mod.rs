pub(crate) mod background;
pub(crate) mod helpers;
pub(crate) mod points;
pub(crate) mod spheres;

use crate::constants::CLEAR_RGB;
use background::{BackgroundPass, MeshBuffers};
use galaxy_core::Scene;
use glam::Vec3;
use points::{PointCloud, PointMaterial, PointsPass};
use spheres::{SphereInstances, SpheresPass};
use web_sys as web;
use wgpu;

/// GPU copies of the scene's static geometry, uploaded on the first frame.
struct SceneBuffers {
    stars: PointCloud,
    dust: PointCloud,
    sphere: MeshBuffers,
    plane: MeshBuffers,
    instances: SphereInstances,
}

impl SceneBuffers {
    fn upload(device: &wgpu::Device, points: &PointsPass, scene: &Scene) -> Self {
        let cfg = scene.config();
        let stars = points.upload(
            device,
            "stars",
            &scene.stars,
            PointMaterial {
                tint: cfg.stars.color,
                opacity: 1.0,
                point_size: cfg.stars.point_size,
                vertex_colors: false,
                transparent: false,
            },
        );
        let dust = points.upload(
            device,
            "dust",
            &scene.dust,
            PointMaterial {
                tint: Vec3::ONE,
                opacity: cfg.dust.opacity,
                point_size: cfg.dust.point_size,
                vertex_colors: true,
                transparent: true,
            },
        );
        log::info!(
            "[gpu] uploaded stars={} dust={} labels={}",
            scene.stars.len(),
            scene.dust.len(),
            scene.labels.len()
        );
        Self {
            stars,
            dust,
            sphere: MeshBuffers::upload(device, "sphere_mesh", &scene.sphere),
            plane: MeshBuffers::upload(device, "background_plane", &scene.background.mesh),
            instances: SphereInstances::new(device, scene.labels.len()),
        }
    }

    fn destroy(&self) {
        self.stars.destroy();
        self.dust.destroy();
        self.sphere.destroy();
        self.plane.destroy();
        self.instances.destroy();
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the surface; pipelines render to this format
    view_format: wgpu::TextureFormat,
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    background: BackgroundPass,
    points: PointsPass,
    spheres: SpheresPass,
    buffers: Option<SceneBuffers>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, width: u32, height: u32) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);

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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // WebGPU canvases are usually non-sRGB; sRGB encode happens in the view
        let view_format = format.add_srgb_suffix();
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let view_formats = if view_format != format {
            vec![view_format]
        } else {
            vec![]
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats,
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?}",
            width,
            height,
            format,
            view_format
        );

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let background = BackgroundPass::new(&device, view_format);
        let points = PointsPass::new(&device, view_format);
        let spheres = SpheresPass::new(&device, view_format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            depth_tex,
            depth_view,
            background,
            points,
            spheres,
            buffers: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_tex.destroy();
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        if self.buffers.is_none() {
            self.buffers = Some(SceneBuffers::upload(&self.device, &self.points, scene));
        }
        let Some(buffers) = self.buffers.as_ref() else {
            return Ok(());
        };

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });

        // all uniforms first; both passes read this frame's state
        let cam_view = scene.camera.view_matrix();
        let cam_proj = scene.camera.projection_matrix();
        self.background.update(&self.queue, scene);
        buffers
            .stars
            .update(&self.queue, cam_view, cam_proj, glam::Mat4::IDENTITY, self.height);
        buffers
            .dust
            .update(&self.queue, cam_view, cam_proj, scene.dust_model_matrix(), self.height);
        self.spheres.update(&self.queue, scene, &buffers.instances);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("background_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.background.draw(&mut rpass, &buffers.plane);
        }
        {
            // keep the backdrop; only depth starts fresh
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.points.draw(&mut rpass, &buffers.stars);
            self.spheres
                .draw(&mut rpass, &buffers.sphere, &buffers.instances);
            self.points.draw(&mut rpass, &buffers.dust);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Free every GPU resource. The state is unusable afterwards.
    pub fn dispose(&mut self) {
        if let Some(buffers) = self.buffers.take() {
            buffers.destroy();
        }
        self.background.destroy();
        self.points.destroy();
        self.spheres.destroy();
        self.depth_tex.destroy();
        self.device.destroy();
        log::info!("[gpu] resources released");
    }
}
