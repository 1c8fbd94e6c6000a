use crate::constants::{CANVAS_STYLE, MAX_DEVICE_PIXEL_RATIO};
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Window inner size in CSS pixels.
pub fn window_css_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w, h)
}

/// Window inner size in physical pixels, the size the surface renders at.
pub fn window_viewport_px(window: &web::Window) -> (u32, u32) {
    let (w, h) = window_css_size(window);
    let dpr = window.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
    input::viewport_px(w, h, dpr)
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
    canvas.set_attribute("style", CANVAS_STYLE).map_err(js_err)?;
    Ok(canvas)
}

/// Size the canvas to fill the window: CSS size in CSS pixels, backing store
/// in physical pixels.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement, window: &web::Window) -> (u32, u32) {
    let (css_w, css_h) = window_css_size(window);
    let (w_px, h_px) = window_viewport_px(window);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
