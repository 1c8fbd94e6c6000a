use crate::dom::{self, js_err};
use crate::events::Callbacks;
use crate::frame::FrameLoop;
use crate::overlay;
use crate::render::GpuState;
use crate::SharedView;
use galaxy_core::{Scene, ViewHost};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Browser-side `ViewHost`: a canvas inside the container element, a title
/// overlay, DOM listeners and a WebGPU renderer.
pub struct WebHost {
    window: web::Window,
    document: web::Document,
    container_id: String,
    canvas: Option<web::HtmlCanvasElement>,
    title: Option<web::Element>,
    callbacks: Option<Callbacks>,
    frames: Option<FrameLoop>,
    // the view these callbacks drive; kept so a rolled-back mount can rewire
    view: Weak<SharedView>,
    started: Instant,
    // filled in asynchronously once the adapter and device resolve
    gpu: Rc<RefCell<Option<GpuState>>>,
    // bumped on every attach and detach; a GPU init from an older attach
    // disposes itself
    epoch: Rc<Cell<u32>>,
}

impl WebHost {
    pub fn new(container_id: &str) -> anyhow::Result<Self> {
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
        Ok(Self {
            window,
            document,
            container_id: container_id.to_string(),
            canvas: None,
            title: None,
            callbacks: None,
            frames: None,
            view: Weak::new(),
            started: Instant::now(),
            gpu: Rc::new(RefCell::new(None)),
            epoch: Rc::new(Cell::new(0)),
        })
    }

    /// Build the JS callbacks. Needs the shared view, so it runs after the
    /// view is wrapped and before `mount`.
    pub fn install_callbacks(&mut self, view: Weak<SharedView>, started: Instant) -> anyhow::Result<()> {
        self.view = view;
        self.started = started;
        self.wire()
    }

    /// Create the canvas, listeners and frame loop unless they already
    /// exist. `release_resources` drops them, so a mount after a rollback
    /// comes back through here.
    fn wire(&mut self) -> anyhow::Result<()> {
        if self.canvas.is_some() && self.callbacks.is_some() && self.frames.is_some() {
            return Ok(());
        }
        let canvas = dom::create_canvas(&self.document)?;
        self.callbacks = Some(Callbacks::new(self.view.clone(), &canvas));
        self.frames = Some(FrameLoop::new(
            self.window.clone(),
            self.view.clone(),
            self.started,
        ));
        self.canvas = Some(canvas);
        Ok(())
    }

    fn find_container(&self) -> Option<web::HtmlElement> {
        self.document
            .get_element_by_id(&self.container_id)?
            .dyn_into::<web::HtmlElement>()
            .ok()
    }

    fn callbacks(&self) -> anyhow::Result<&Callbacks> {
        self.callbacks
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("callbacks not installed"))
    }

    fn canvas(&self) -> anyhow::Result<&web::HtmlCanvasElement> {
        self.canvas
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("canvas not created"))
    }

    fn start_gpu(&self, canvas: web::HtmlCanvasElement, width: u32, height: u32) {
        let slot = self.gpu.clone();
        let epoch = self.epoch.clone();
        let started_at = epoch.get();
        spawn_local(async move {
            match GpuState::new(&canvas, width, height).await {
                Ok(mut gpu) => {
                    if epoch.get() != started_at {
                        log::info!("[gpu] view gone before init finished; releasing");
                        gpu.dispose();
                        return;
                    }
                    *slot.borrow_mut() = Some(gpu);
                    log::info!("[gpu] renderer ready");
                }
                Err(e) => log::error!("[gpu] WebGPU init error: {:?}", e),
            }
        });
    }
}

impl ViewHost for WebHost {
    fn has_mount_target(&self) -> bool {
        self.find_container().is_some()
    }

    fn viewport(&self) -> (u32, u32) {
        dom::window_viewport_px(&self.window)
    }

    fn attach_surface(&mut self, title: &str) -> anyhow::Result<()> {
        let container = self
            .find_container()
            .ok_or_else(|| anyhow::anyhow!("missing #{}", self.container_id))?;
        self.wire()?;
        let canvas = self.canvas()?.clone();
        let (w, h) = dom::fit_canvas_to_window(&canvas, &self.window);
        container.append_child(&canvas).map_err(js_err)?;
        self.epoch.set(self.epoch.get().wrapping_add(1));
        self.title = Some(overlay::attach_title(&self.document, &container, title)?);
        self.start_gpu(canvas, w, h);
        log::info!("[mount] canvas attached to #{} at {}x{}", self.container_id, w, h);
        Ok(())
    }

    fn listen_resize(&mut self) -> anyhow::Result<()> {
        self.callbacks()?.listen_window(&self.window).map_err(js_err)
    }

    fn listen_input(&mut self) -> anyhow::Result<()> {
        let canvas = self.canvas()?;
        self.callbacks()?.listen_canvas(canvas).map_err(js_err)
    }

    fn request_frame(&mut self) {
        if let Some(frames) = self.frames.as_ref() {
            frames.request();
        }
    }

    fn draw(&mut self, scene: &Scene) {
        let Some(canvas) = self.canvas.as_ref() else {
            return;
        };
        let Ok(mut slot) = self.gpu.try_borrow_mut() else {
            return;
        };
        // nothing to draw into until the async init lands
        let Some(gpu) = slot.as_mut() else {
            return;
        };
        gpu.resize_if_needed(canvas.width(), canvas.height());
        match gpu.render(scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost or outdated; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::warn!("[frame] render error: {:?}", e),
        }
        if scene.frames() % 600 == 0 {
            let (w, h) = gpu.size();
            log::debug!("[frame] frames={} size={}x{}", scene.frames(), w, h);
        }
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        if let Some(canvas) = self.canvas.as_ref() {
            dom::fit_canvas_to_window(canvas, &self.window);
        }
        if let Ok(mut slot) = self.gpu.try_borrow_mut() {
            if let Some(gpu) = slot.as_mut() {
                gpu.resize_if_needed(width, height);
            }
        }
        log::debug!("[resize] {}x{}", width, height);
    }

    fn cancel_frame(&mut self) {
        if let Some(frames) = self.frames.as_ref() {
            frames.cancel();
        }
    }

    fn unlisten_input(&mut self) {
        if let (Some(cb), Some(canvas)) = (self.callbacks.as_ref(), self.canvas.as_ref()) {
            cb.unlisten_canvas(canvas);
        }
    }

    fn unlisten_resize(&mut self) {
        if let Some(cb) = self.callbacks.as_ref() {
            cb.unlisten_window(&self.window);
        }
    }

    fn detach_surface(&mut self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
        if let Some(title) = self.title.take() {
            title.remove();
        }
        if let Some(canvas) = self.canvas.as_ref() {
            canvas.remove();
        }
    }

    fn release_resources(&mut self) {
        if let Some(mut gpu) = self.gpu.borrow_mut().take() {
            gpu.dispose();
        }
        // listeners are gone and the frame is cancelled; the closures can go
        self.callbacks = None;
        self.frames = None;
        self.canvas = None;
    }
}
