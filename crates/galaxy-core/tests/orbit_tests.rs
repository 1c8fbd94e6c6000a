use galaxy_core::{OrbitController, SceneConfig, Spherical};
use glam::Vec3;
use std::f32::consts::PI;

fn controller() -> OrbitController {
    let cfg = SceneConfig::default();
    OrbitController::new(&cfg.camera, cfg.camera.eye)
}

#[test]
fn starts_at_configured_eye() {
    let c = controller();
    assert!((c.eye() - Vec3::new(0.0, 0.0, 15.0)).length() < 1e-4);
    assert!((c.distance() - 15.0).abs() < 1e-5);
}

#[test]
fn spherical_round_trips_offset() {
    let v = Vec3::new(3.0, -2.0, 7.5);
    let back = Spherical::from_offset(v).to_offset();
    assert!((back - v).length() < 1e-4);
}

#[test]
fn zoom_is_clamped_to_distance_limits() {
    let mut c = controller();
    for _ in 0..500 {
        c.wheel(1.0);
        c.update();
        assert!(c.distance() <= 50.0 + 1e-4);
    }
    assert!((c.distance() - 50.0).abs() < 1e-4);
    for _ in 0..500 {
        c.wheel(-1.0);
        c.update();
        assert!(c.distance() >= 5.0 - 1e-4);
    }
    assert!((c.distance() - 5.0).abs() < 1e-4);
}

#[test]
fn single_wheel_step_scales_distance() {
    let mut c = controller();
    c.wheel(-120.0);
    c.update();
    assert!((c.distance() - 15.0 * 0.95).abs() < 1e-4);
    c.wheel(0.0);
    c.update();
    assert!((c.distance() - 15.0 * 0.95).abs() < 1e-4);
}

#[test]
fn damping_glides_toward_full_rotation() {
    let mut c = controller();
    let start = c.spherical().theta;
    // a quarter-height drag requests a quarter turn to the left
    c.drag(100.0, 0.0, 400.0);
    c.update();
    let first = c.spherical().theta - start;
    assert!((first + PI / 2.0 * 0.05).abs() < 1e-4, "first step {first}");
    for _ in 0..400 {
        c.update();
    }
    let total = c.spherical().theta - start;
    assert!((total + PI / 2.0).abs() < 1e-3, "total {total}");
    // radius is untouched by rotation
    assert!((c.distance() - 15.0).abs() < 1e-4);
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut c = controller();
    c.drag(0.0, 10_000.0, 100.0);
    for _ in 0..500 {
        c.update();
        let phi = c.spherical().phi;
        assert!(phi > 0.0 && phi < PI);
    }
}
