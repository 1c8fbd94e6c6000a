use galaxy_core::{build_dust, build_starfield, point_extent, PerspectiveCamera, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn buffer_lengths_follow_particle_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let base = SceneConfig::default();
    for n in [0usize, 1, 7, 2000] {
        let mut dust = base.dust.clone();
        dust.count = n;
        let b = build_dust(&dust, &mut rng);
        assert_eq!(b.positions.len(), n * 3);
        assert_eq!(b.colors.len(), n * 3);
        assert_eq!(b.sizes.len(), n);
        assert_eq!(b.len(), n);

        let mut stars = base.stars.clone();
        stars.count = n;
        let s = build_starfield(&stars, &mut rng);
        assert_eq!(s.positions.len(), n * 3);
        assert_eq!(s.colors.len(), n * 3);
        assert_eq!(s.sizes.len(), n);
    }
}

#[test]
fn dust_stays_inside_flattened_annulus() {
    let mut rng = StdRng::seed_from_u64(2);
    let cfg = SceneConfig::default();
    let b = build_dust(&cfg.dust, &mut rng);
    assert_eq!(b.len(), 2000);
    for i in 0..b.len() {
        let p = b.position(i);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        // small slack for cos/sin rounding
        assert!(r < 50.0 + 1e-3, "radius {r} out of range");
        assert!(p.y >= -5.0 && p.y <= 5.0, "height {} out of range", p.y);
        assert!(b.sizes[i] >= 0.0 && b.sizes[i] < 2.0);
    }
}

#[test]
fn dust_colors_come_from_palette() {
    let mut rng = StdRng::seed_from_u64(3);
    let cfg = SceneConfig::default();
    let b = build_dust(&cfg.dust, &mut rng);
    for i in 0..b.len() {
        let c = b.color(i);
        assert!(
            cfg.dust.palette.iter().any(|p| *p == c),
            "color {c:?} not in dust palette"
        );
    }
}

#[test]
fn dust_uses_more_than_one_palette_entry() {
    let mut rng = StdRng::seed_from_u64(4);
    let cfg = SceneConfig::default();
    let b = build_dust(&cfg.dust, &mut rng);
    let first = b.color(0);
    assert!((1..b.len()).any(|i| b.color(i) != first));
}

#[test]
fn starfield_fills_centered_cube() {
    let mut rng = StdRng::seed_from_u64(5);
    let cfg = SceneConfig::default();
    let s = build_starfield(&cfg.stars, &mut rng);
    assert_eq!(s.len(), 10_000);
    for v in &s.positions {
        assert!(*v >= -50.0 && *v < 50.0, "coordinate {v} out of range");
    }
    for i in 0..s.len() {
        assert_eq!(s.color(i), cfg.stars.color);
        assert_eq!(s.sizes[i], 1.0);
    }
}

#[test]
fn same_seed_builds_same_particles() {
    let cfg = SceneConfig::default();
    let a = build_dust(&cfg.dust, &mut StdRng::seed_from_u64(9));
    let b = build_dust(&cfg.dust, &mut StdRng::seed_from_u64(9));
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.colors, b.colors);
    assert_eq!(a.sizes, b.sizes);
}

#[test]
fn distant_stars_never_shrink_below_one_pixel() {
    let cfg = SceneConfig::default();
    let cam = PerspectiveCamera::new(&cfg.camera, 1280, 720);
    let base = cfg.stars.point_size;

    let far_pixel = cam.pixel_size_at(50.0, 720);
    assert!(base < far_pixel, "a 0.05 star at 50 units is sub-pixel");
    assert_eq!(point_extent(base, 1.0, far_pixel), far_pixel);

    let near_pixel = cam.pixel_size_at(1.0, 720);
    assert_eq!(point_extent(base, 1.0, near_pixel), base);
    // zero-sized dust still covers a pixel
    assert_eq!(point_extent(cfg.dust.point_size, 0.0, near_pixel), near_pixel);
}

#[test]
fn pixel_size_matches_projection_scale() {
    let cfg = SceneConfig::default();
    let cam = PerspectiveCamera::new(&cfg.camera, 800, 600);
    let proj_y = cam.projection_matrix().y_axis.y;
    let expected = 2.0 * 20.0 / (proj_y * 600.0);
    assert!((cam.pixel_size_at(20.0, 600) - expected).abs() < 1e-6);
}
