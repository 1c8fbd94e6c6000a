use galaxy_core::color::{hex_to_linear, lerp_color};
use galaxy_core::{gradient_color, gradient_height, Background, GradientUniforms, SceneConfig};
use glam::{Vec2, Vec3};

#[test]
fn fragment_extremes_match_uniforms() {
    let pairs = [
        (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        (Vec3::new(0.2, 0.4, 0.6), Vec3::new(0.9, 0.1, 0.3)),
        (Vec3::ZERO, Vec3::ONE),
    ];
    for (top, bottom) in pairs {
        let u = GradientUniforms {
            color_top: top,
            color_bottom: bottom,
        };
        assert_eq!(gradient_color(&u, 1.0), top.extend(1.0));
        assert_eq!(gradient_color(&u, -1.0), bottom.extend(1.0));
        let mid = gradient_color(&u, 0.0);
        assert!((mid.truncate() - (top + bottom) * 0.5).length() < 1e-6);
        assert_eq!(mid.w, 1.0);
    }
}

#[test]
fn height_is_normalized_vertical_component() {
    assert_eq!(gradient_height(Vec2::new(0.0, 1.0)), 1.0);
    assert_eq!(gradient_height(Vec2::new(0.0, -1.0)), -1.0);
    assert!((gradient_height(Vec2::new(1.0, 1.0)) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    assert_eq!(gradient_height(Vec2::ZERO), 0.0);
}

#[test]
fn background_starts_on_first_palette_pairs() {
    let cfg = SceneConfig::default();
    let bg = Background::new(&cfg.background);
    let p = &cfg.background.palette;
    assert_eq!(bg.uniforms.color_top, p[0]);
    assert_eq!(bg.uniforms.color_bottom, p[2]);
    assert_eq!(bg.mesh.vertices.len(), 4);
    assert_eq!(bg.mesh.indices.len(), 6);
}

#[test]
fn advance_publishes_interpolated_uniforms() {
    let cfg = SceneConfig::default();
    let mut bg = Background::new(&cfg.background);
    bg.advance();
    let p = &cfg.background.palette;
    let t = cfg.background.gradient_step;
    assert!((bg.uniforms.color_top - lerp_color(p[0], p[1], t)).length() < 1e-6);
    assert!((bg.uniforms.color_bottom - lerp_color(p[2], p[3], t)).length() < 1e-6);
}

#[test]
fn hex_decoding_handles_extremes() {
    assert!((hex_to_linear(0xFFFFFF) - Vec3::ONE).length() < 1e-5);
    assert_eq!(hex_to_linear(0x000000), Vec3::ZERO);
    let red = hex_to_linear(0xFF0000);
    assert!((red - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    // mid gray decodes darker in linear space
    let gray = hex_to_linear(0x808080);
    assert!(gray.x > 0.2 && gray.x < 0.23);
}

#[test]
fn lerp_hits_endpoints_exactly_for_uneven_channels() {
    let from = Vec3::new(0.9, 0.1, 0.3);
    let to = Vec3::new(0.2, 0.4, 0.6);
    assert_eq!(lerp_color(from, to, 0.0), from);
    assert_eq!(lerp_color(from, to, 1.0), to);
    // same pair through the fragment mirror
    let u = GradientUniforms {
        color_top: to,
        color_bottom: from,
    };
    assert_eq!(gradient_color(&u, 1.0).truncate(), to);
    assert_eq!(gradient_color(&u, -1.0).truncate(), from);
}
