//! Immutable scene configuration.
//!
//! A `SceneConfig` carries every parameter the scene builders and the
//! animation loop read. Views own their own copy; nothing here is global.

use crate::color::{hex_to_linear, palette_from_hex};
use crate::constants::*;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("dust palette is empty")]
    EmptyDustPalette,
    #[error("gradient palette is empty")]
    EmptyGradientPalette,
    #[error("word list is empty")]
    EmptyWords,
    #[error("orbit distance limits are inverted: min {min} > max {max}")]
    InvertedDistanceLimits { min: f32, max: f32 },
    #[error("camera field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),
}

#[derive(Clone, Debug)]
pub struct DustParams {
    pub count: usize,
    pub radius_max: f32,
    pub height_spread: f32,
    pub size_max: f32,
    pub point_size: f32,
    pub opacity: f32,
    pub palette: Vec<Vec3>,
}

#[derive(Clone, Debug)]
pub struct StarfieldParams {
    pub count: usize,
    pub extent: f32,
    pub point_size: f32,
    pub color: Vec3,
}

#[derive(Clone, Debug)]
pub struct LabelParams {
    pub words: Vec<String>,
    pub sphere_radius: f32,
    pub sphere_segments: u32,
    pub base_radius: f32,
    pub radius_step: f32,
    pub z_jitter: f32,
    pub orbit_speed: f32,
    pub spin_step: f32,
    pub color: Vec3,
    pub emissive: Vec3,
    pub shininess: f32,
    pub specular: Vec3,
}

#[derive(Clone, Debug)]
pub struct LightParams {
    pub ambient: Vec3,
    pub point_color: Vec3,
    pub point_intensity: f32,
    pub point_position: Vec3,
}

#[derive(Clone, Debug)]
pub struct BackgroundParams {
    pub palette: Vec<Vec3>,
    pub gradient_step: f32,
    pub spin_step: Vec3,
    pub plane_z: f32,
    pub depth: f32,
}

#[derive(Clone, Debug)]
pub struct CameraParams {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub title: String,
    pub dust: DustParams,
    pub stars: StarfieldParams,
    pub labels: LabelParams,
    pub light: LightParams,
    pub background: BackgroundParams,
    pub camera: CameraParams,
    pub dust_spin_step: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            dust: DustParams {
                count: DUST_COUNT,
                radius_max: DUST_RADIUS_MAX,
                height_spread: DUST_HEIGHT_SPREAD,
                size_max: DUST_SIZE_MAX,
                point_size: DUST_POINT_SIZE,
                opacity: DUST_OPACITY,
                palette: palette_from_hex(&DUST_COLORS),
            },
            stars: StarfieldParams {
                count: STAR_COUNT,
                extent: STARFIELD_EXTENT,
                point_size: STAR_POINT_SIZE,
                color: hex_to_linear(STAR_COLOR),
            },
            labels: LabelParams {
                words: WORDS.iter().map(|w| w.to_string()).collect(),
                sphere_radius: LABEL_SPHERE_RADIUS,
                sphere_segments: LABEL_SPHERE_SEGMENTS,
                base_radius: SPIRAL_BASE_RADIUS,
                radius_step: SPIRAL_RADIUS_STEP,
                z_jitter: LABEL_Z_JITTER,
                orbit_speed: LABEL_ORBIT_SPEED,
                spin_step: LABEL_SPIN_STEP,
                color: hex_to_linear(LABEL_COLOR),
                emissive: hex_to_linear(LABEL_EMISSIVE),
                shininess: LABEL_SHININESS,
                specular: hex_to_linear(LABEL_SPECULAR),
            },
            light: LightParams {
                ambient: hex_to_linear(AMBIENT_LIGHT),
                point_color: hex_to_linear(POINT_LIGHT_COLOR),
                point_intensity: POINT_LIGHT_INTENSITY,
                point_position: Vec3::from_array(POINT_LIGHT_POSITION),
            },
            background: BackgroundParams {
                palette: palette_from_hex(&GRADIENT_COLORS),
                gradient_step: GRADIENT_STEP,
                spin_step: Vec3::from_array(BACKGROUND_SPIN_STEP),
                plane_z: BACKGROUND_Z,
                depth: BACKGROUND_DEPTH,
            },
            camera: CameraParams {
                fov_deg: CAMERA_FOV_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                eye: Vec3::new(0.0, 0.0, CAMERA_Z),
                damping: ORBIT_DAMPING,
                min_distance: ORBIT_MIN_DISTANCE,
                max_distance: ORBIT_MAX_DISTANCE,
                rotate_speed: ORBIT_ROTATE_SPEED,
                zoom_speed: ORBIT_ZOOM_SPEED,
            },
            dust_spin_step: DUST_SPIN_STEP,
        }
    }
}

impl SceneConfig {
    /// Reject configurations the builders cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dust.count > 0 && self.dust.palette.is_empty() {
            return Err(ConfigError::EmptyDustPalette);
        }
        if self.background.palette.is_empty() {
            return Err(ConfigError::EmptyGradientPalette);
        }
        if self.labels.words.is_empty() {
            return Err(ConfigError::EmptyWords);
        }
        let (min, max) = (self.camera.min_distance, self.camera.max_distance);
        if min > max {
            return Err(ConfigError::InvertedDistanceLimits { min, max });
        }
        let fov = self.camera.fov_deg;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(ConfigError::InvalidFov(fov));
        }
        Ok(())
    }
}
