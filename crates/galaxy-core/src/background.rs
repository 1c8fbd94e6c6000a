use crate::animation::{GradientCycle, Spin};
use crate::color::lerp_color;
use crate::config::BackgroundParams;
use crate::geometry::{plane_mesh, Mesh};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// The two colors the background fragment stage blends between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientUniforms {
    pub color_top: Vec3,
    pub color_bottom: Vec3,
}

/// Height term the fragment stage derives from the plane-local position.
#[inline]
pub fn gradient_height(local: Vec2) -> f32 {
    let len = local.length();
    if len > 0.0 {
        local.y / len
    } else {
        0.0
    }
}

/// CPU mirror of the background fragment shader.
///
/// `h` in [-1, 1]: -1 yields `color_bottom`, 1 yields `color_top`.
#[inline]
pub fn gradient_color(uniforms: &GradientUniforms, h: f32) -> Vec4 {
    let t = h * 0.5 + 0.5;
    lerp_color(uniforms.color_bottom, uniforms.color_top, t).extend(1.0)
}

/// Full-screen gradient plane drawn by the background pass.
pub struct Background {
    pub mesh: Mesh,
    pub uniforms: GradientUniforms,
    pub spin: Spin,
    cycle: GradientCycle,
    spin_step: Vec3,
    plane_z: f32,
}

impl Background {
    pub fn new(params: &BackgroundParams) -> Self {
        let cycle = GradientCycle::new(params.palette.clone(), params.gradient_step);
        let (color_top, color_bottom) = cycle.colors();
        Self {
            mesh: plane_mesh(2.0, 2.0),
            uniforms: GradientUniforms {
                color_top,
                color_bottom,
            },
            spin: Spin::default(),
            cycle,
            spin_step: params.spin_step,
            plane_z: params.plane_z,
        }
    }

    pub fn cycle(&self) -> &GradientCycle {
        &self.cycle
    }

    /// Rotate, advance the cross-fade, then publish the new uniforms.
    pub fn advance(&mut self) {
        self.spin.advance(self.spin_step);
        self.cycle.advance();
        let (color_top, color_bottom) = self.cycle.colors();
        self.uniforms = GradientUniforms {
            color_top,
            color_bottom,
        };
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, self.plane_z)) * self.spin.matrix()
    }
}
