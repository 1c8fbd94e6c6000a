#![cfg(target_arch = "wasm32")]
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod overlay;
mod render;
mod tick;

use galaxy_core::constants::MOUNT_TARGET_ID;
use galaxy_core::{GalaxyView, SceneConfig};
use host::WebHost;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub(crate) type SharedView = RefCell<GalaxyView<WebHost>>;

thread_local! {
    // the view mounted by `start`, so the page can tear it down via `unmount`
    static AUTO_VIEW: RefCell<Option<Rc<SharedView>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    match mount_view(MOUNT_TARGET_ID, SceneConfig::default()) {
        Ok(Some(view)) => AUTO_VIEW.with(|slot| *slot.borrow_mut() = Some(view)),
        Ok(None) => log::info!("[mount] #{} not found; nothing mounted", MOUNT_TARGET_ID),
        Err(e) => log::error!("[mount] error: {:?}", e),
    }
    Ok(())
}

/// Tear down the view mounted at startup, if any.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(view) = AUTO_VIEW.with(|slot| slot.borrow_mut().take()) {
        view.borrow_mut().unmount();
    }
}

fn mount_view(container_id: &str, config: SceneConfig) -> anyhow::Result<Option<Rc<SharedView>>> {
    let host = WebHost::new(container_id)?;
    let view = Rc::new(RefCell::new(GalaxyView::new(host, config)));
    let started = Instant::now();
    view.borrow_mut()
        .host_mut()
        .install_callbacks(Rc::downgrade(&view), started)?;
    let mut rng = StdRng::from_entropy();
    let mounted = view.borrow_mut().mount(&mut rng)?;
    Ok(mounted.then_some(view))
}

fn to_js(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{:#}", e)).into()
}

/// A galaxy view mounted into a page element, for pages that manage the
/// lifecycle themselves.
#[wasm_bindgen]
pub struct GalaxyHandle {
    view: Rc<SharedView>,
}

#[wasm_bindgen]
impl GalaxyHandle {
    /// Mount into the element with id `container_id`. Resolves to
    /// `undefined` when no such element exists.
    pub fn mount(container_id: &str) -> Result<Option<GalaxyHandle>, JsValue> {
        let view = mount_view(container_id, SceneConfig::default()).map_err(to_js)?;
        Ok(view.map(|view| GalaxyHandle { view }))
    }

    pub fn unmount(&self) {
        self.view.borrow_mut().unmount();
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.view.borrow().is_mounted()
    }
}

impl Drop for GalaxyHandle {
    fn drop(&mut self) {
        // freed from JS while mounted: listeners still point at the closures
        if let Ok(mut view) = self.view.try_borrow_mut() {
            view.unmount();
        }
    }
}
