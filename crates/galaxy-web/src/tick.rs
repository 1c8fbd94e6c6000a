use std::cell::RefCell;

/// What one display tick managed to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The frame ran; the view scheduled its own next tick.
    Ran,
    /// Another handler held the view; the caller must schedule a retry.
    Busy,
    /// The view is gone; nothing more to schedule.
    Gone,
}

pub fn run_tick<V>(view: Option<&RefCell<V>>, frame: impl FnOnce(&mut V)) -> TickOutcome {
    let Some(view) = view else {
        return TickOutcome::Gone;
    };
    match view.try_borrow_mut() {
        Ok(mut v) => {
            frame(&mut v);
            TickOutcome::Ran
        }
        Err(_) => TickOutcome::Busy,
    }
}
