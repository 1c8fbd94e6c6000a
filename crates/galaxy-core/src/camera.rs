//! Camera descriptions.
//!
//! Both cameras are right-handed and produce matrices for WebGPU's [0, 1]
//! clip depth range.

use crate::config::CameraParams;
use glam::{Mat4, Vec3};

/// Perspective camera for the main pass.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(params: &CameraParams, width: u32, height: u32) -> Self {
        Self {
            eye: params.eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect_ratio(width, height),
            fovy_radians: params.fov_deg.to_radians(),
            znear: params.near,
            zfar: params.far,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World-space height of one screen pixel at view depth `depth`.
    pub fn pixel_size_at(&self, depth: f32, viewport_height: u32) -> f32 {
        2.0 * depth.max(0.0) * (self.fovy_radians * 0.5).tan() / viewport_height.max(1) as f32
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Orthographic camera looking down -z, used only by the background pass.
#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoCamera {
    /// Unit frustum in x/y with a symmetric depth range of `depth`.
    pub fn unit(depth: f32) -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: -depth,
            far: depth,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
