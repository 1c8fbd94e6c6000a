use crate::constants::{TITLE_ELEMENT_ID, TITLE_STYLE};
use crate::dom::js_err;
use web_sys as web;

/// Overlay the page title above the canvas.
pub fn attach_title(
    document: &web::Document,
    container: &web::HtmlElement,
    text: &str,
) -> anyhow::Result<web::Element> {
    let el = document.create_element("div").map_err(js_err)?;
    el.set_id(TITLE_ELEMENT_ID);
    el.set_attribute("style", TITLE_STYLE).map_err(js_err)?;
    el.set_text_content(Some(text));
    // the title is positioned against the container
    if container.style().get_property_value("position").unwrap_or_default().is_empty() {
        _ = container.style().set_property("position", "relative");
    }
    container.append_child(&el).map_err(js_err)?;
    Ok(el)
}
