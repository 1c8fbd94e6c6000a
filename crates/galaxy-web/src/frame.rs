use crate::tick::{run_tick, TickOutcome};
use crate::SharedView;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule(window: &web::Window, tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Ok(slot) = tick.try_borrow() else {
        return;
    };
    let Some(cb) = slot.as_ref() else {
        return;
    };
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}

/// requestAnimationFrame loop for one view.
///
/// Holds at most one pending request; `cancel` guarantees the tick closure
/// will not be invoked again until the next `request`. The closure keeps
/// only weak handles to the view and to itself.
pub struct FrameLoop {
    window: web::Window,
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(window: web::Window, view: Weak<SharedView>, started: Instant) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let closure = {
            let window = window.clone();
            let slot = Rc::downgrade(&tick);
            let pending = pending.clone();
            Closure::wrap(Box::new(move || {
                pending.set(None);
                let view = view.upgrade();
                let elapsed = started.elapsed().as_secs_f64();
                if run_tick(view.as_deref(), |v| v.frame(elapsed)) == TickOutcome::Busy {
                    log::warn!("[frame] view busy; retrying next frame");
                    if let Some(slot) = slot.upgrade() {
                        schedule(&window, &slot, &pending);
                    }
                }
            }) as Box<dyn FnMut()>)
        };
        *tick.borrow_mut() = Some(closure);
        Self {
            window,
            tick,
            pending,
        }
    }

    pub fn request(&self) {
        schedule(&self.window, &self.tick, &self.pending);
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}
