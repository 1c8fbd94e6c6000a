#[allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn clear_color_components_are_normalized() {
    for c in CLEAR_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
fn pixel_ratio_cap_is_at_least_one() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
}

#[test]
fn styles_keep_overlay_out_of_pointer_path() {
    assert!(TITLE_STYLE.contains("pointer-events:none"));
    assert!(TITLE_STYLE.contains("position:absolute"));
    // the canvas owns touch gestures for orbiting
    assert!(CANVAS_STYLE.contains("touch-action:none"));
}
