use crate::constants::*;
use crate::status::CANVAS_ARIA_LABEL;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) -> anyhow::Result<()> {
    let style = el.style();
    for (name, value) in styles {
        style
            .set_property(name, value)
            .map_err(|e| anyhow::anyhow!("style {}: {:?}", name, e))?;
    }
    Ok(())
}

fn create_html_element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

/// Styled box holding the textual lookup result; starts hidden and fades in.
pub fn create_result_element(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let el = create_html_element(document, "div")?;
    set_styles(
        &el,
        &[
            ("font-family", "'Press Start 2P', cursive"),
            ("font-size", "12px"),
            ("margin-top", "20px"),
            ("text-align", "center"),
            ("padding", "20px"),
            ("background-color", "white"),
            ("border-radius", "8px"),
            ("box-shadow", "0 2px 10px rgba(0,0,0,0.1)"),
            ("max-width", "500px"),
            ("word-wrap", "break-word"),
            ("position", "relative"),
            ("opacity", "0"),
            ("transition", RESULT_FADE_CSS),
        ],
    )?;
    Ok(el)
}

/// Replace whatever `#resultContainer` shows with `result`.
pub fn mount_result(document: &web::Document, result: &web::HtmlElement) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(RESULT_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", RESULT_CONTAINER_ID))?;
    container.set_inner_html("");
    container
        .append_child(result)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

pub fn pixel_art_container(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(PIXEL_ART_CONTAINER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", PIXEL_ART_CONTAINER_SELECTOR))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn remove_previous_canvas(container: &web::HtmlElement) {
    if let Ok(Some(prev)) = container.query_selector(&format!(".{}", CANVAS_CLASS)) {
        prev.remove();
    }
}

/// Transparent overlay canvas for the particle effect, appended to `container`.
pub fn create_particle_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    set_styles(container, &[("position", "relative")])?;
    let el = create_html_element(document, "canvas")?;
    let offset = format!("{}px", CANVAS_OFFSET_PX);
    set_styles(
        &el,
        &[
            ("position", "absolute"),
            ("left", offset.as_str()),
            ("top", offset.as_str()),
            ("pointer-events", "none"),
            ("image-rendering", "pixelated"),
        ],
    )?;
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(CANVAS_SIZE_PX);
    canvas.set_height(CANVAS_SIZE_PX);
    _ = canvas.class_list().add_1(CANVAS_CLASS);
    _ = canvas.set_attribute("role", "img");
    _ = canvas.set_attribute("aria-label", CANVAS_ARIA_LABEL);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Polite status region beside the canvas, reused across searches.
pub fn live_region(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::Element> {
    if let Ok(Some(existing)) = container.query_selector("[role=\"status\"]") {
        return Ok(existing);
    }
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = el.set_attribute("role", "status");
    _ = el.set_attribute("aria-live", "polite");
    el.set_class_name(LIVE_REGION_CLASS);
    container
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}

pub fn create_sparkle_element(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let el = create_html_element(document, "div")?;
    el.set_class_name(SPARKLE_CLASS);
    Ok(el)
}
