//! Color helpers.
//!
//! Palette literals are written as sRGB hex values the way a designer picks
//! them. Everything the renderer consumes is linear, so hex values are decoded
//! once at configuration time and the surface's sRGB format re-encodes them.

use glam::Vec3;

/// Decode one sRGB channel in [0, 1] to linear light.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Decode a `0xRRGGBB` literal into a linear RGB triple.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

pub fn palette_from_hex(hexes: &[u32]) -> Vec<Vec3> {
    hexes.iter().copied().map(hex_to_linear).collect()
}

/// Linear interpolation between two colors; `t` is not clamped.
///
/// Weighted form, so `t = 0` and `t = 1` return the endpoints exactly.
#[inline]
pub fn lerp_color(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    from * (1.0 - t) + to * t
}
