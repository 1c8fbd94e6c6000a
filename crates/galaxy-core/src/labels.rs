use crate::animation::wrap_angle;
use crate::config::LabelParams;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// One small sphere standing in for a word.
#[derive(Clone, Debug)]
pub struct LabelSphere {
    pub word: String,
    pub index: usize,
    pub position: Vec3,
    /// Spin about the sphere's own y axis, radians in [0, 2π).
    pub rotation_y: f32,
}

#[inline]
pub fn spiral_angle(index: usize, count: usize) -> f32 {
    index as f32 / count.max(1) as f32 * TAU
}

#[inline]
pub fn spiral_radius(params: &LabelParams, index: usize) -> f32 {
    params.base_radius + params.radius_step * index as f32
}

/// Planar spiral position for `index` with an extra angular `phase`.
#[inline]
pub fn spiral_xy(params: &LabelParams, index: usize, count: usize, phase: f32) -> (f32, f32) {
    let angle = spiral_angle(index, count) + phase;
    let radius = spiral_radius(params, index);
    (angle.cos() * radius, angle.sin() * radius)
}

/// Place one sphere per word on the spiral; only the z jitter is random.
pub fn build_labels<R: Rng + ?Sized>(params: &LabelParams, rng: &mut R) -> Vec<LabelSphere> {
    let count = params.words.len();
    params
        .words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let (x, y) = spiral_xy(params, index, count, 0.0);
            let z = (rng.gen::<f32>() - 0.5) * params.z_jitter;
            LabelSphere {
                word: word.clone(),
                index,
                position: Vec3::new(x, y, z),
                rotation_y: 0.0,
            }
        })
        .collect()
}

/// Move every sphere along the spiral by `phase` and spin it one step.
///
/// z keeps its build-time jitter.
pub fn advance_labels(labels: &mut [LabelSphere], params: &LabelParams, phase: f32) {
    let count = labels.len();
    for label in labels.iter_mut() {
        let (x, y) = spiral_xy(params, label.index, count, phase);
        label.position.x = x;
        label.position.y = y;
        label.rotation_y = wrap_angle(label.rotation_y + params.spin_step);
    }
}
