// Host-side constants for the web front-end

// Clear color behind the background plane (visible where the rotated plane
// no longer covers the viewport)
pub const CLEAR_RGB: [f64; 3] = [0.0, 0.0, 0.0];

// Cap on devicePixelRatio so high-density displays don't quadruple fill cost
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Only the primary (left) mouse button orbits
pub const ROTATE_BUTTON: i16 = 0;

// Title overlay
pub const TITLE_ELEMENT_ID: &str = "galaxy-title";
pub const TITLE_STYLE: &str = "position:absolute;top:1rem;left:50%;transform:translateX(-50%);\
color:#fff;font:600 1.5rem system-ui,sans-serif;letter-spacing:0.05em;\
pointer-events:none;z-index:10;";

// Canvas element
pub const CANVAS_STYLE: &str = "display:block;touch-action:none;";
