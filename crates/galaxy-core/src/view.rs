//! Mount/frame/unmount lifecycle of one galaxy view.
//!
//! The platform side (DOM, GPU, frame scheduling) sits behind `ViewHost`;
//! `GalaxyView` owns the ordering rules so they can be exercised on the host.

use crate::config::SceneConfig;
use crate::scene::Scene;
use rand::Rng;

/// Platform services a view needs.
pub trait ViewHost {
    /// Whether the container the view mounts into exists yet.
    fn has_mount_target(&self) -> bool;
    /// Current viewport size in physical pixels.
    fn viewport(&self) -> (u32, u32);
    /// Create the render surface and attach it to the mount target.
    fn attach_surface(&mut self, title: &str) -> anyhow::Result<()>;
    fn listen_resize(&mut self) -> anyhow::Result<()>;
    fn listen_input(&mut self) -> anyhow::Result<()>;
    /// Schedule exactly one call to `GalaxyView::frame`.
    fn request_frame(&mut self);
    fn draw(&mut self, scene: &Scene);
    fn resize_surface(&mut self, width: u32, height: u32);

    fn cancel_frame(&mut self);
    fn unlisten_input(&mut self);
    fn unlisten_resize(&mut self);
    fn detach_surface(&mut self);
    /// Release geometries, materials and the renderer.
    fn release_resources(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Mounted,
    Unmounted,
}

pub struct GalaxyView<H: ViewHost> {
    host: H,
    config: SceneConfig,
    scene: Option<Scene>,
    state: ViewState,
}

impl<H: ViewHost> GalaxyView<H> {
    pub fn new(host: H, config: SceneConfig) -> Self {
        Self {
            host,
            config,
            scene: None,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state == ViewState::Mounted
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// Build the scene and start the frame loop.
    ///
    /// Precondition: the host's mount target exists. When it does not, this
    /// is a no-op that returns `Ok(false)` and leaves the view `Idle`; the
    /// caller may mount again later. There is no automatic retry.
    pub fn mount<R: Rng + ?Sized>(&mut self, rng: &mut R) -> anyhow::Result<bool> {
        if self.state != ViewState::Idle {
            return Ok(self.is_mounted());
        }
        if !self.host.has_mount_target() {
            log::debug!("[mount] target missing; skipping");
            return Ok(false);
        }
        let (width, height) = self.host.viewport();
        let scene = Scene::new(self.config.clone(), width, height, rng)?;

        if let Err(e) = self.attach_all() {
            self.teardown();
            self.state = ViewState::Idle;
            return Err(e);
        }
        self.scene = Some(scene);
        self.state = ViewState::Mounted;
        self.host.request_frame();
        log::info!("[mount] view mounted at {}x{}", width, height);
        Ok(true)
    }

    fn attach_all(&mut self) -> anyhow::Result<()> {
        self.host.attach_surface(&self.config.title)?;
        self.host.listen_resize()?;
        self.host.listen_input()?;
        Ok(())
    }

    /// One display refresh tick.
    pub fn frame(&mut self, elapsed_sec: f64) {
        if self.state != ViewState::Mounted {
            return;
        }
        self.host.request_frame();
        if let Some(scene) = self.scene.as_mut() {
            scene.step(elapsed_sec);
            self.host.draw(scene);
        }
    }

    /// Viewport changed; update the camera and the surface together.
    pub fn resize(&mut self) {
        if self.state != ViewState::Mounted {
            return;
        }
        let (width, height) = self.host.viewport();
        if let Some(scene) = self.scene.as_mut() {
            scene.resize(width, height);
        }
        self.host.resize_surface(width, height);
    }

    /// Stop the loop and release everything. Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.state != ViewState::Mounted {
            return;
        }
        self.teardown();
        self.scene = None;
        self.state = ViewState::Unmounted;
        log::info!("[mount] view unmounted");
    }

    fn teardown(&mut self) {
        self.host.cancel_frame();
        self.host.unlisten_input();
        self.host.unlisten_resize();
        self.host.detach_surface();
        self.host.release_resources();
    }
}
