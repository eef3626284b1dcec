use crate::canvas::CanvasSurface;
use pixel_particles::{ParticleEffect, Tick};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedEffect = Rc<RefCell<ParticleEffect<CanvasSurface>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driver for one effect.
///
/// Each callback ticks the effect once and only requests another frame while
/// the tick says to continue, so a settled or disposed effect stops on its
/// own. [`FrameLoop::stop`] disposes the effect and cancels any frame still
/// pending, which must happen before the canvas is handed to a new effect.
pub struct FrameLoop {
    effect: SharedEffect,
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(effect: SharedEffect) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let effect_tick = effect.clone();
        let pending_tick = pending.clone();
        // Weak so the closure does not keep itself alive after stop()
        let callback_tick: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            let next = effect_tick.borrow_mut().tick();
            if next == Tick::Continue {
                if let Some(cb) = callback_tick.upgrade() {
                    pending_tick.set(request_frame(&cb));
                }
            }
        }) as Box<dyn FnMut()>));

        pending.set(request_frame(&callback));
        Self {
            effect,
            callback,
            pending,
        }
    }

    pub fn effect(&self) -> &SharedEffect {
        &self.effect
    }

    pub fn stop(self) {
        self.effect.borrow_mut().dispose();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}

fn request_frame(callback: &RefCell<Option<Closure<dyn FnMut()>>>) -> Option<i32> {
    let window = web::window()?;
    let cb = callback.borrow();
    let closure = cb.as_ref()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
