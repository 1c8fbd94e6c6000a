use crate::animation::{orbit_phase, wrap_angle};
use crate::background::Background;
use crate::camera::{OrthoCamera, PerspectiveCamera};
use crate::config::{ConfigError, SceneConfig};
use crate::geometry::{sphere_mesh, Mesh};
use crate::labels::{advance_labels, build_labels, LabelSphere};
use crate::orbit::OrbitController;
use crate::particles::{build_dust, build_starfield, ParticleBuffers};
use glam::{Mat4, Vec3};
use rand::Rng;
use smallvec::SmallVec;

/// Per-instance data for one label sphere, as the renderer uploads it.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LabelInstance {
    pub offset: [f32; 3],
    pub rotation_y: f32,
}

/// Everything the two render passes draw, plus the state that animates it.
pub struct Scene {
    config: SceneConfig,
    pub camera: PerspectiveCamera,
    pub background_camera: OrthoCamera,
    pub controls: OrbitController,
    pub background: Background,
    pub stars: ParticleBuffers,
    pub dust: ParticleBuffers,
    pub sphere: Mesh,
    pub labels: Vec<LabelSphere>,
    dust_rotation_y: f32,
    frames: u64,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(
        config: SceneConfig,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera = PerspectiveCamera::new(&config.camera, width, height);
        let controls = OrbitController::new(&config.camera, camera.eye);
        let background = Background::new(&config.background);
        let background_camera = OrthoCamera::unit(config.background.depth);
        let dust = build_dust(&config.dust, rng);
        let stars = build_starfield(&config.stars, rng);
        let labels = build_labels(&config.labels, rng);
        let sphere = sphere_mesh(
            config.labels.sphere_radius,
            config.labels.sphere_segments,
            config.labels.sphere_segments,
        );
        log::debug!(
            "[scene] built: stars={} dust={} labels={} viewport={}x{}",
            stars.len(),
            dust.len(),
            labels.len(),
            width,
            height
        );
        Ok(Self {
            config,
            camera,
            background_camera,
            controls,
            background,
            stars,
            dust,
            sphere,
            labels,
            dust_rotation_y: 0.0,
            frames: 0,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn dust_rotation_y(&self) -> f32 {
        self.dust_rotation_y
    }

    /// One animation step. `elapsed_sec` is wall-clock time since mount and
    /// drives the label orbit; everything else advances by fixed increments.
    pub fn step(&mut self, elapsed_sec: f64) {
        self.background.advance();

        let phase = orbit_phase(elapsed_sec, self.config.labels.orbit_speed);
        advance_labels(&mut self.labels, &self.config.labels, phase);

        self.dust_rotation_y = wrap_angle(self.dust_rotation_y + self.config.dust_spin_step);

        self.camera.eye = self.controls.update();
        self.frames += 1;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn dust_model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.dust_rotation_y)
    }

    pub fn background_clip_matrix(&self) -> Mat4 {
        self.background_camera.projection_matrix() * self.background.model_matrix()
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.camera.view_matrix()
    }

    pub fn label_instances(&self) -> SmallVec<[LabelInstance; 16]> {
        self.labels
            .iter()
            .map(|l| LabelInstance {
                offset: l.position.to_array(),
                rotation_y: l.rotation_y,
            })
            .collect()
    }

    pub fn eye(&self) -> Vec3 {
        self.camera.eye
    }
}
