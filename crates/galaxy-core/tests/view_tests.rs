// Lifecycle scenarios driven through a recording host.

use galaxy_core::{GalaxyView, Scene, SceneConfig, ViewHost, ViewState};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct MockHost {
    target_present: bool,
    fail_input: bool,
    viewport: (u32, u32),
    surface_attached: bool,
    title: Option<String>,
    resize_listening: bool,
    input_listening: bool,
    frame_pending: bool,
    draws: usize,
    surface_size: Option<(u32, u32)>,
    released: bool,
    calls: Vec<&'static str>,
}

impl MockHost {
    fn with_target() -> Self {
        Self {
            target_present: true,
            viewport: (1280, 720),
            ..Default::default()
        }
    }
}

impl ViewHost for MockHost {
    fn has_mount_target(&self) -> bool {
        self.target_present
    }
    fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
    fn attach_surface(&mut self, title: &str) -> anyhow::Result<()> {
        self.calls.push("attach_surface");
        self.surface_attached = true;
        self.title = Some(title.to_string());
        Ok(())
    }
    fn listen_resize(&mut self) -> anyhow::Result<()> {
        self.calls.push("listen_resize");
        self.resize_listening = true;
        Ok(())
    }
    fn listen_input(&mut self) -> anyhow::Result<()> {
        self.calls.push("listen_input");
        if self.fail_input {
            anyhow::bail!("pointer wiring failed");
        }
        self.input_listening = true;
        Ok(())
    }
    fn request_frame(&mut self) {
        self.frame_pending = true;
    }
    fn draw(&mut self, _scene: &Scene) {
        self.draws += 1;
    }
    fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface_size = Some((width, height));
    }
    fn cancel_frame(&mut self) {
        self.calls.push("cancel_frame");
        self.frame_pending = false;
    }
    fn unlisten_input(&mut self) {
        self.calls.push("unlisten_input");
        self.input_listening = false;
    }
    fn unlisten_resize(&mut self) {
        self.calls.push("unlisten_resize");
        self.resize_listening = false;
    }
    fn detach_surface(&mut self) {
        self.calls.push("detach_surface");
        self.surface_attached = false;
    }
    fn release_resources(&mut self) {
        self.calls.push("release_resources");
        self.released = true;
    }
}

/// Run scheduled frames the way the browser would, `n` times.
fn pump(view: &mut GalaxyView<MockHost>, n: usize) {
    for i in 0..n {
        assert!(view.host().frame_pending, "no frame scheduled at step {i}");
        view.host_mut().frame_pending = false;
        view.frame(i as f64 / 60.0);
    }
}

#[test]
fn missing_target_is_a_silent_no_op() {
    let mut view = GalaxyView::new(MockHost::default(), SceneConfig::default());
    let mounted = view.mount(&mut StdRng::seed_from_u64(1)).unwrap();
    assert!(!mounted);
    assert_eq!(view.state(), ViewState::Idle);
    assert!(view.scene().is_none());
    assert!(view.host().calls.is_empty());
    assert!(!view.host().frame_pending);

    // target shows up later; mounting again succeeds
    view.host_mut().target_present = true;
    view.host_mut().viewport = (800, 600);
    assert!(view.mount(&mut StdRng::seed_from_u64(1)).unwrap());
    assert!(view.is_mounted());
}

#[test]
fn mount_attaches_surface_and_schedules_first_frame() {
    let mut view = GalaxyView::new(MockHost::with_target(), SceneConfig::default());
    assert!(view.mount(&mut StdRng::seed_from_u64(2)).unwrap());
    let host = view.host();
    assert!(host.surface_attached);
    assert!(host.resize_listening);
    assert!(host.input_listening);
    assert!(host.frame_pending);
    assert_eq!(host.title.as_deref(), Some("Galactic Words"));
    let scene = view.scene().unwrap();
    assert!((scene.camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
    assert_eq!(scene.labels.len(), 15);
}

#[test]
fn two_hundred_steps_accumulate_background_rotation() {
    let cfg = SceneConfig::default();
    let step = cfg.background.spin_step;
    let mut view = GalaxyView::new(MockHost::with_target(), cfg);
    view.mount(&mut StdRng::seed_from_u64(3)).unwrap();
    pump(&mut view, 200);

    let scene = view.scene().unwrap();
    assert_eq!(scene.frames(), 200);
    assert_eq!(view.host().draws, 200);
    let angles = scene.background.spin.angles;
    let expected = step * 200.0;
    assert!((angles.x - expected.x).abs() < 1e-5, "x {}", angles.x);
    assert!((angles.y - expected.y).abs() < 1e-5, "y {}", angles.y);
    assert!((angles.z - expected.z).abs() < 1e-5, "z {}", angles.z);
    assert!((scene.dust_rotation_y() - 200.0 * 0.0005).abs() < 1e-5);
}

#[test]
fn gradient_cycles_through_palette_while_running() {
    let mut cfg = SceneConfig::default();
    cfg.background.gradient_step = 0.25;
    let mut view = GalaxyView::new(MockHost::with_target(), cfg);
    view.mount(&mut StdRng::seed_from_u64(4)).unwrap();
    pump(&mut view, 8);
    let bg = &view.scene().unwrap().background;
    assert_eq!(bg.cycle().index(), 2);
    assert_eq!(bg.cycle().progress(), 0.0);
    let p = &view.scene().unwrap().config().background.palette;
    assert_eq!(bg.uniforms.color_top, p[2]);
    assert_eq!(bg.uniforms.color_bottom, p[4]);
}

#[test]
fn resize_updates_camera_and_surface_together() {
    let mut view = GalaxyView::new(MockHost::with_target(), SceneConfig::default());
    view.mount(&mut StdRng::seed_from_u64(5)).unwrap();
    view.host_mut().viewport = (600, 900);
    view.resize();
    assert_eq!(view.host().surface_size, Some((600, 900)));
    let aspect = view.scene().unwrap().camera.aspect;
    assert!((aspect - 600.0 / 900.0).abs() < 1e-6);
}

#[test]
fn unmount_detaches_surface_and_stops_frames() {
    let mut view = GalaxyView::new(MockHost::with_target(), SceneConfig::default());
    view.mount(&mut StdRng::seed_from_u64(6)).unwrap();
    pump(&mut view, 3);
    view.unmount();

    let host = view.host();
    assert!(!host.surface_attached);
    assert!(!host.frame_pending);
    assert!(!host.resize_listening);
    assert!(!host.input_listening);
    assert!(host.released);
    assert_eq!(view.state(), ViewState::Unmounted);
    assert!(view.scene().is_none());

    // a callback already in flight must neither draw nor re-schedule
    let draws = host.draws;
    view.frame(1.0);
    assert_eq!(view.host().draws, draws);
    assert!(!view.host().frame_pending);

    // second unmount is a no-op
    let calls = view.host().calls.len();
    view.unmount();
    assert_eq!(view.host().calls.len(), calls);
}

#[test]
fn failed_mount_rolls_back_partial_setup() {
    let mut host = MockHost::with_target();
    host.fail_input = true;
    let mut view = GalaxyView::new(host, SceneConfig::default());
    let err = view.mount(&mut StdRng::seed_from_u64(7)).unwrap_err();
    assert!(err.to_string().contains("pointer wiring failed"));
    let host = view.host();
    assert!(!host.surface_attached);
    assert!(!host.resize_listening);
    assert!(!host.frame_pending);
    assert!(host.released);
    assert_eq!(view.state(), ViewState::Idle);
}

#[test]
fn invalid_config_fails_before_touching_host() {
    let mut cfg = SceneConfig::default();
    cfg.labels.words.clear();
    let mut view = GalaxyView::new(MockHost::with_target(), cfg);
    assert!(view.mount(&mut StdRng::seed_from_u64(8)).is_err());
    assert!(view.host().calls.is_empty());
}

#[test]
fn mount_after_rollback_rewires_from_scratch() {
    let mut host = MockHost::with_target();
    host.fail_input = true;
    let mut view = GalaxyView::new(host, SceneConfig::default());
    assert!(view.mount(&mut StdRng::seed_from_u64(9)).is_err());
    assert_eq!(view.state(), ViewState::Idle);

    view.host_mut().fail_input = false;
    view.host_mut().calls.clear();
    assert!(view.mount(&mut StdRng::seed_from_u64(9)).unwrap());
    assert!(view.is_mounted());
    assert_eq!(
        view.host().calls,
        vec!["attach_surface", "listen_resize", "listen_input"]
    );
    pump(&mut view, 2);
    assert_eq!(view.host().draws, 2);
}
