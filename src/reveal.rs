use crate::constants::*;
use crate::dom;
use crate::sparkle::Sparkle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::warn!("setTimeout failed: {:?}", e);
    }
}

/// Flash the pixel-art canvas, then fade in the result and, for a found
/// organization, follow with sparkle bursts.
pub fn after_settle(result: web::HtmlElement, sparkles: bool) {
    let document = dom::window_document();
    let art = document
        .as_ref()
        .and_then(|d| d.get_element_by_id(PIXEL_ART_CANVAS_ID));
    if let Some(el) = &art {
        _ = el.class_list().add_1(FLASH_CLASS);
    }

    set_timeout(FLASH_MS, move || {
        if let Some(el) = &art {
            _ = el.class_list().remove_1(FLASH_CLASS);
        }
        if let Err(e) = dom::set_styles(&result, &[("opacity", "1")]) {
            log::warn!("result reveal: {:#}", e);
        }
        if sparkles {
            set_timeout(SPARKLE_START_DELAY_MS, move || burst(&result));
        }
    });
}

fn burst(container: &web::HtmlElement) {
    let rect = container.get_bounding_client_rect();
    let (width, height) = (rect.width(), rect.height());
    for wave in 0..SPARKLE_WAVES {
        let container = container.clone();
        set_timeout(wave as i32 * SPARKLE_WAVE_GAP_MS, move || {
            let Some(document) = dom::window_document() else {
                return;
            };
            let mut rng = rand::thread_rng();
            for _ in 0..SPARKLES_PER_WAVE {
                let sparkle = Sparkle::sample(&mut rng, width, height);
                if let Err(e) = spawn(&document, &container, &sparkle) {
                    log::debug!("sparkle skipped: {:#}", e);
                }
            }
        });
    }
}

fn spawn(
    document: &web::Document,
    container: &web::HtmlElement,
    sparkle: &Sparkle,
) -> anyhow::Result<()> {
    let el = dom::create_sparkle_element(document)?;
    let style = sparkle.style();
    let pairs: Vec<(&str, &str)> = style.iter().map(|(k, v)| (*k, v.as_str())).collect();
    dom::set_styles(&el, &pairs)?;
    container
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    set_timeout(sparkle.lifetime_ms(), move || el.remove());
    Ok(())
}
