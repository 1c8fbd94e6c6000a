use crate::config::{DustParams, StarfieldParams};
use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

/// Flat per-particle attribute arrays, laid out for direct upload as
/// instance vertex buffers.
///
/// - `positions`: 3 floats per particle
/// - `colors`: 3 floats per particle (linear RGB)
/// - `sizes`: 1 float per particle, multiplied by the material's point size
#[derive(Clone, Debug, Default)]
pub struct ParticleBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub sizes: Vec<f32>,
}

impl ParticleBuffers {
    fn with_count(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            colors: Vec::with_capacity(count * 3),
            sizes: Vec::with_capacity(count),
        }
    }

    fn push(&mut self, position: Vec3, color: Vec3, size: f32) {
        self.positions.extend_from_slice(&position.to_array());
        self.colors.extend_from_slice(&color.to_array());
        self.sizes.push(size);
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    pub fn color(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.colors[i * 3..i * 3 + 3])
    }
}

/// Quad extent the point shader uses: the material size scaled by the
/// particle's own size, never thinner than one pixel.
#[inline]
pub fn point_extent(point_size: f32, size: f32, pixel_size: f32) -> f32 {
    (point_size * size).max(pixel_size)
}

/// Scatter dust over a flattened annulus around the y axis.
///
/// Radius and angle are sampled in polar form, so density rises toward the
/// center. Each particle takes a palette color at random.
pub fn build_dust<R: Rng + ?Sized>(params: &DustParams, rng: &mut R) -> ParticleBuffers {
    let mut out = ParticleBuffers::with_count(params.count);
    for _ in 0..params.count {
        let radius = rng.gen::<f32>() * params.radius_max;
        let angle = rng.gen::<f32>() * TAU;
        let height = (rng.gen::<f32>() - 0.5) * params.height_spread;
        let color = params.palette.choose(rng).copied().unwrap_or(Vec3::ONE);
        let size = rng.gen::<f32>() * params.size_max;
        out.push(
            Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
            color,
            size,
        );
    }
    log::debug!("[particles] dust built: {}", out.len());
    out
}

/// Scatter stars uniformly inside a cube of side `extent` centered on the origin.
pub fn build_starfield<R: Rng + ?Sized>(params: &StarfieldParams, rng: &mut R) -> ParticleBuffers {
    let mut out = ParticleBuffers::with_count(params.count);
    for _ in 0..params.count {
        let p = Vec3::new(
            (rng.gen::<f32>() - 0.5) * params.extent,
            (rng.gen::<f32>() - 0.5) * params.extent,
            (rng.gen::<f32>() - 0.5) * params.extent,
        );
        out.push(p, params.color, 1.0);
    }
    log::debug!("[particles] starfield built: {}", out.len());
    out
}
