use galaxy_core::{orbit_phase, wrap_angle, GradientCycle, Spin};
use glam::Vec3;
use std::f32::consts::TAU;

fn palette(n: usize) -> Vec<Vec3> {
    (0..n).map(|i| Vec3::splat(i as f32)).collect()
}

#[test]
fn progress_resets_exactly_when_reaching_one() {
    let mut g = GradientCycle::new(palette(5), 0.25);
    for expected in [0.25, 0.5, 0.75] {
        g.advance();
        assert_eq!(g.progress(), expected);
        assert_eq!(g.index(), 0);
    }
    g.advance();
    assert_eq!(g.progress(), 0.0);
    assert_eq!(g.index(), 1);
}

#[test]
fn progress_overshoot_still_resets_to_zero() {
    let mut g = GradientCycle::new(palette(3), 0.3);
    for _ in 0..3 {
        g.advance();
    }
    assert!((g.progress() - 0.9).abs() < 1e-6);
    g.advance(); // 1.2 >= 1
    assert_eq!(g.progress(), 0.0);
    assert_eq!(g.index(), 1);
}

#[test]
fn index_wraps_modulo_palette_length() {
    let mut g = GradientCycle::new(palette(5), 0.5);
    let mut prev = g.index();
    for _ in 0..30 {
        g.advance();
        if g.progress() == 0.0 {
            assert_eq!(g.index(), (prev + 1) % 5);
            prev = g.index();
        }
        assert!(g.index() < 5);
    }
    assert_eq!(g.index(), 15 % 5);
}

#[test]
fn top_and_bottom_are_offset_by_two() {
    let mut g = GradientCycle::new(palette(5), 0.25);
    let (top, bottom) = g.colors();
    assert_eq!(top, Vec3::splat(0.0));
    assert_eq!(bottom, Vec3::splat(2.0));

    g.advance(); // progress 0.25
    let (top, bottom) = g.colors();
    assert!((top.x - 0.25).abs() < 1e-6); // 0 -> 1
    assert!((bottom.x - 2.25).abs() < 1e-6); // 2 -> 3

    // index 3: top fades 3 -> 4, bottom fades 0 -> 1 (wrapped)
    for _ in 0..11 {
        g.advance();
    }
    assert_eq!(g.index(), 3);
    let (top, bottom) = g.colors();
    assert_eq!(top, Vec3::splat(3.0));
    assert_eq!(bottom, Vec3::splat(0.0));
}

#[test]
fn spin_accumulates_and_wraps() {
    let mut s = Spin::default();
    let step = Vec3::new(0.1, 0.2, 0.3);
    for _ in 0..10 {
        s.advance(step);
    }
    assert!((s.angles.x - 1.0).abs() < 1e-5);
    assert!((s.angles.y - 2.0).abs() < 1e-5);
    assert!((s.angles.z - 3.0).abs() < 1e-5);
    for _ in 0..1000 {
        s.advance(step);
    }
    for a in s.angles.to_array() {
        assert!((0.0..TAU).contains(&a));
    }
}

#[test]
fn phase_and_angles_stay_bounded() {
    assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-6);
    assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-6);
    // a month of wall-clock time
    let p = orbit_phase(30.0 * 24.0 * 3600.0, 0.2);
    assert!((0.0..TAU).contains(&p));
    assert!((orbit_phase(5.0, 0.2) - 1.0).abs() < 1e-6);
}
