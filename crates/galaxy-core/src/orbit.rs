//! Damped orbit controls around a fixed pivot.
//!
//! Input handlers only queue deltas; `update` once per frame folds a fraction
//! of them into the spherical state and decays the rest, which gives the
//! camera its glide after the pointer is released.

use crate::config::CameraParams;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const PHI_EPS: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    /// Polar angle from +y.
    pub phi: f32,
    /// Azimuth around +y, measured from +z toward +x.
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(
            s * self.theta.sin(),
            self.phi.cos() * self.radius,
            s * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    pub target: Vec3,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    spherical: Spherical,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl OrbitController {
    pub fn new(params: &CameraParams, eye: Vec3) -> Self {
        let target = Vec3::ZERO;
        Self {
            target,
            damping: params.damping,
            min_distance: params.min_distance,
            max_distance: params.max_distance,
            rotate_speed: params.rotate_speed,
            zoom_speed: params.zoom_speed,
            spherical: Spherical::from_offset(eye - target),
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }

    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    pub fn distance(&self) -> f32 {
        self.spherical.radius
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.spherical.to_offset()
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Queue a rotation for a pointer drag of `(dx, dy)` pixels over an
    /// element `element_height` pixels tall.
    pub fn drag(&mut self, dx: f32, dy: f32, element_height: f32) {
        let h = element_height.max(1.0);
        self.rotate_left(TAU * dx / h * self.rotate_speed);
        self.rotate_up(TAU * dy / h * self.rotate_speed);
    }

    fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.zoom_speed)
    }

    /// Wheel input; negative `delta_y` moves the eye toward the pivot.
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.scale *= self.zoom_scale();
        } else if delta_y > 0.0 {
            self.scale /= self.zoom_scale();
        }
    }

    /// Fold queued input into the camera state and return the new eye.
    pub fn update(&mut self) -> Vec3 {
        let k = if self.damping > 0.0 { self.damping } else { 1.0 };
        self.spherical.theta =
            (self.spherical.theta + self.delta_theta * k + PI).rem_euclid(TAU) - PI;
        self.spherical.phi = (self.spherical.phi + self.delta_phi * k).clamp(PHI_EPS, PI - PHI_EPS);
        self.spherical.radius =
            (self.spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        if self.damping > 0.0 {
            self.delta_theta *= 1.0 - self.damping;
            self.delta_phi *= 1.0 - self.damping;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;
        self.eye()
    }
}
