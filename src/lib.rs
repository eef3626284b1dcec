#![cfg(target_arch = "wasm32")]
use pixel_particles::{EffectEvent, EffectListener, ParticleEffect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod frame;
mod lookup;
mod reveal;
mod sparkle;
mod status;

use canvas::CanvasSurface;
use frame::FrameLoop;
use lookup::LookupOutcome;

thread_local! {
    // At most one reveal owns a particle canvas at a time
    static ACTIVE: RefCell<Option<FrameLoop>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ror-pixel-search starting");
    Ok(())
}

/// Show a lookup response body (JSON) and animate its particle text.
///
/// The returned promise resolves with the animated text once the particles
/// have settled.
#[wasm_bindgen]
pub fn display_search_result(response_json: &str) -> Result<js_sys::Promise, JsValue> {
    show_result(response_json).map_err(|e| {
        log::error!("display error: {:#}", e);
        JsValue::from_str(&format!("{:#}", e))
    })
}

/// Show a failed lookup. Any running animation is stopped.
#[wasm_bindgen]
pub fn display_search_error(message: &str) -> Result<(), JsValue> {
    show_error(message).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Dispose the running animation, if any, and remove its canvas.
#[wasm_bindgen]
pub fn cancel_animation() {
    stop_active();
}

fn stop_active() {
    if let Some(running) = ACTIVE.with(|a| a.borrow_mut().take()) {
        let canvas = running.effect().borrow().surface().canvas().clone();
        running.stop();
        canvas.remove();
        log::debug!("stopped previous animation");
    }
}

fn show_error(message: &str) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    stop_active();
    let result = dom::create_result_element(&document)?;
    result.set_inner_html(&lookup::error_html(message));
    dom::set_styles(&result, &[("opacity", "1")])?;
    dom::mount_result(&document, &result)
}

fn show_result(response_json: &str) -> anyhow::Result<js_sys::Promise> {
    let outcome = LookupOutcome::from_json(response_json)?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let result = dom::create_result_element(&document)?;
    result.set_inner_html(&outcome.result_html());

    // The old effect must release its canvas before a new one is attached
    stop_active();
    let container = dom::pixel_art_container(&document)?;
    dom::remove_previous_canvas(&container);
    let canvas = dom::create_particle_canvas(&document, &container)?;
    let live_region = dom::live_region(&document, &container)?;
    dom::mount_result(&document, &result)?;

    let mut resolve_slot: Option<js_sys::Function> = None;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| resolve_slot = Some(resolve));

    let sparkles = outcome.is_match();
    let listener: EffectListener = Box::new(move |ev: EffectEvent, text: &str| {
        live_region.set_text_content(Some(&status::announcement(ev, text)));
        if ev == EffectEvent::Settled {
            log::info!("particles settled on {:?}", text);
            reveal::after_settle(result.clone(), sparkles);
            if let Some(resolve) = &resolve_slot {
                _ = resolve.call1(&JsValue::NULL, &JsValue::from_str(text));
            }
        }
    });

    let surface = CanvasSurface::new(canvas)?;
    let effect = ParticleEffect::new(surface, outcome.particle_text(), rand::random())
        .with_listener(listener);
    let running = FrameLoop::start(Rc::new(RefCell::new(effect)));
    ACTIVE.with(|a| *a.borrow_mut() = Some(running));
    Ok(promise)
}
