//! Per-frame animation state.
//!
//! Every accumulator here is wrapped so a view left open for days keeps its
//! floats in a small range.

use crate::color::lerp_color;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    a.rem_euclid(TAU)
}

/// Wall-clock orbit phase, wrapped before narrowing to `f32`.
#[inline]
pub fn orbit_phase(elapsed_sec: f64, speed: f32) -> f32 {
    (elapsed_sec * speed as f64).rem_euclid(std::f64::consts::TAU) as f32
}

/// Euler rotation accumulated in fixed per-frame increments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    pub angles: Vec3,
}

impl Spin {
    pub fn advance(&mut self, step: Vec3) {
        self.angles = Vec3::new(
            wrap_angle(self.angles.x + step.x),
            wrap_angle(self.angles.y + step.y),
            wrap_angle(self.angles.z + step.z),
        );
    }

    /// XYZ-order rotation matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(
            glam::EulerRot::XYZ,
            self.angles.x,
            self.angles.y,
            self.angles.z,
        )
    }
}

/// Cross-fade through a looped palette.
///
/// The top color fades `palette[i] -> palette[i + 1]` while the bottom fades
/// `palette[i + 2] -> palette[i + 3]`, so the two ends never show the same
/// entry at once on palettes longer than two.
#[derive(Clone, Debug)]
pub struct GradientCycle {
    palette: Vec<Vec3>,
    step: f32,
    index: usize,
    progress: f32,
}

impl GradientCycle {
    /// `palette` must be non-empty; `SceneConfig::validate` enforces this.
    pub fn new(palette: Vec<Vec3>, step: f32) -> Self {
        Self {
            palette,
            step,
            index: 0,
            progress: 0.0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next_index(&self) -> usize {
        self.wrap(self.index + 1)
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn len(&self) -> usize {
        self.palette.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    #[inline]
    fn wrap(&self, i: usize) -> usize {
        i % self.palette.len().max(1)
    }

    pub fn advance(&mut self) {
        self.progress += self.step;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.index = self.next_index();
            log::debug!("[gradient] palette index -> {}", self.index);
        }
    }

    /// Current `(top, bottom)` colors.
    pub fn colors(&self) -> (Vec3, Vec3) {
        if self.palette.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }
        let c = |i: usize| self.palette[self.wrap(i)];
        let i = self.index;
        let top = lerp_color(c(i), c(i + 1), self.progress);
        let bottom = lerp_color(c(i + 2), c(i + 3), self.progress);
        (top, bottom)
    }
}
