#[allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::{is_rotate_button, viewport_px, wheel_direction, PointerState};

#[test]
fn drag_reports_deltas_for_the_captured_pointer_only() {
    let mut p = PointerState::default();
    assert_eq!(p.move_to(1, 10.0, 10.0), None);

    p.begin(1, 100.0, 50.0);
    assert_eq!(p.move_to(1, 110.0, 45.0), Some((10.0, -5.0)));
    assert_eq!(p.move_to(1, 110.0, 45.0), Some((0.0, 0.0)));
    // a second finger does not steer the orbit
    assert_eq!(p.move_to(2, 0.0, 0.0), None);

    assert!(!p.end(2));
    assert!(p.end(1));
    assert!(!p.active);
    assert_eq!(p.move_to(1, 200.0, 200.0), None);
}

#[test]
fn only_primary_button_rotates() {
    assert!(is_rotate_button(0, 0));
    assert!(!is_rotate_button(2, 0));
}

#[test]
fn wheel_direction_follows_delta_sign() {
    assert_eq!(wheel_direction(-120.0), -1.0);
    assert_eq!(wheel_direction(3.5), 1.0);
    assert_eq!(wheel_direction(0.0), 0.0);
}

#[test]
fn viewport_scales_by_pixel_ratio_and_never_collapses() {
    assert_eq!(viewport_px(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(viewport_px(0.0, 0.0, 1.0), (1, 1));
    assert_eq!(viewport_px(100.0, 50.0, f64::NAN), (100, 50));
    assert_eq!(viewport_px(100.0, 50.0, 0.0), (100, 50));
}
