use web_sys as web;

/// Drag state for the orbit controls.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub active: bool,
    pub pointer_id: i32,
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.x = x;
        self.y = y;
    }

    /// Pixel delta since the previous position, or `None` when no drag is
    /// in progress for this pointer.
    pub fn move_to(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = (x - self.x, y - self.y);
        self.x = x;
        self.y = y;
        Some(delta)
    }

    /// Returns true if this ended the active drag.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

#[inline]
pub fn is_rotate_button(button: i16, rotate_button: i16) -> bool {
    button == rotate_button
}

/// Zoom direction from a wheel delta: -1 toward the pivot, 1 away, 0 none.
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y < 0.0 {
        -1.0
    } else if delta_y > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Physical pixel size for a CSS size at a device pixel ratio, never zero.
#[inline]
pub fn viewport_px(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_w * dpr).round().max(1.0) as u32;
    let h = (css_h * dpr).round().max(1.0) as u32;
    (w, h)
}

#[inline]
pub fn pointer_client_xy(ev: &web::PointerEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}
