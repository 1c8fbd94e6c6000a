use crate::constants::ROTATE_BUTTON;
use crate::input::{self, PointerState};
use crate::{SharedView, WebHost};
use galaxy_core::GalaxyView;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas events the orbit controls listen to.
const POINTER_EVENTS: [&str; 4] = ["pointerdown", "pointermove", "pointerup", "pointercancel"];

/// Run `f` against the view if it is still alive and not already borrowed.
fn with_view(view: &Weak<SharedView>, f: impl FnOnce(&mut GalaxyView<WebHost>)) {
    let Some(view) = view.upgrade() else {
        return;
    };
    if let Ok(mut v) = view.try_borrow_mut() {
        f(&mut v);
    };
}

/// Every JS callback one mounted view registers. Dropping this drops the
/// closures, so listeners must be removed first.
pub struct Callbacks {
    pub resize: Closure<dyn FnMut()>,
    pub pointer_down: Closure<dyn FnMut(web::PointerEvent)>,
    pub pointer_move: Closure<dyn FnMut(web::PointerEvent)>,
    pub pointer_up: Closure<dyn FnMut(web::PointerEvent)>,
    pub wheel: Closure<dyn FnMut(web::WheelEvent)>,
    pub context_menu: Closure<dyn FnMut(web::Event)>,
}

impl Callbacks {
    pub fn new(view: Weak<SharedView>, canvas: &web::HtmlCanvasElement) -> Self {
        let pointer = Rc::new(RefCell::new(PointerState::default()));

        let resize = {
            let view = view.clone();
            Closure::wrap(Box::new(move || {
                with_view(&view, |v| v.resize());
            }) as Box<dyn FnMut()>)
        };

        let pointer_down = {
            let pointer = pointer.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                if !input::is_rotate_button(ev.button(), ROTATE_BUTTON) {
                    return;
                }
                let (x, y) = input::pointer_client_xy(&ev);
                pointer.borrow_mut().begin(ev.pointer_id(), x, y);
                _ = canvas.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            }) as Box<dyn FnMut(_)>)
        };

        let pointer_move = {
            let pointer = pointer.clone();
            let canvas = canvas.clone();
            let view = view.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let (x, y) = input::pointer_client_xy(&ev);
                let Some((dx, dy)) = pointer.borrow_mut().move_to(ev.pointer_id(), x, y) else {
                    return;
                };
                let height = canvas.client_height().max(1) as f32;
                with_view(&view, |v| {
                    if let Some(scene) = v.scene_mut() {
                        scene.controls.drag(dx, dy, height);
                    }
                });
            }) as Box<dyn FnMut(_)>)
        };

        let pointer_up = {
            let pointer = pointer.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                if pointer.borrow_mut().end(ev.pointer_id()) {
                    _ = canvas.release_pointer_capture(ev.pointer_id());
                }
            }) as Box<dyn FnMut(_)>)
        };

        let wheel = {
            let view = view.clone();
            Closure::wrap(Box::new(move |ev: web::WheelEvent| {
                ev.prevent_default();
                let dir = input::wheel_direction(ev.delta_y());
                if dir == 0.0 {
                    return;
                }
                with_view(&view, |v| {
                    if let Some(scene) = v.scene_mut() {
                        scene.controls.wheel(dir);
                    }
                });
            }) as Box<dyn FnMut(_)>)
        };

        let context_menu = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);

        Self {
            resize,
            pointer_down,
            pointer_move,
            pointer_up,
            wheel,
            context_menu,
        }
    }

    fn pointer_handler(&self, name: &str) -> &js_sys::Function {
        match name {
            "pointerdown" => self.pointer_down.as_ref().unchecked_ref(),
            "pointermove" => self.pointer_move.as_ref().unchecked_ref(),
            _ => self.pointer_up.as_ref().unchecked_ref(),
        }
    }

    pub fn listen_canvas(&self, canvas: &web::HtmlCanvasElement) -> Result<(), wasm_bindgen::JsValue> {
        for name in POINTER_EVENTS {
            canvas.add_event_listener_with_callback(name, self.pointer_handler(name))?;
        }
        canvas.add_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref())?;
        canvas.add_event_listener_with_callback(
            "contextmenu",
            self.context_menu.as_ref().unchecked_ref(),
        )?;
        Ok(())
    }

    pub fn unlisten_canvas(&self, canvas: &web::HtmlCanvasElement) {
        for name in POINTER_EVENTS {
            _ = canvas.remove_event_listener_with_callback(name, self.pointer_handler(name));
        }
        _ = canvas.remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        _ = canvas.remove_event_listener_with_callback(
            "contextmenu",
            self.context_menu.as_ref().unchecked_ref(),
        );
    }

    pub fn listen_window(&self, window: &web::Window) -> Result<(), wasm_bindgen::JsValue> {
        window.add_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref())
    }

    pub fn unlisten_window(&self, window: &web::Window) {
        _ = window.remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}
