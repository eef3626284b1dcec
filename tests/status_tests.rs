// Host-side tests for live-region announcements.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod status {
    include!("../src/status.rs");
}

use pixel_particles::recording::RecordingSurface;
use pixel_particles::{EffectEvent, EffectListener, ParticleEffect, Tick};
use status::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn announcements_name_the_id() {
    assert_eq!(
        announcement(EffectEvent::Started, "02mhbdp94"),
        "Animating particles to form the ROR ID: 02mhbdp94"
    );
    assert_eq!(
        announcement(EffectEvent::Settled, "02mhbdp94"),
        "Animation complete. Displaying ROR ID: 02mhbdp94"
    );
}

#[test]
fn live_region_tracks_the_animating_flag() {
    let region = Rc::new(RefCell::new(String::new()));
    let sink = region.clone();
    let listener: EffectListener = Box::new(move |ev: EffectEvent, text: &str| {
        *sink.borrow_mut() = announcement(ev, text);
    });
    let mut fx = ParticleEffect::new(RecordingSurface::new(384.0, 384.0), "?", 99)
        .with_listener(listener);
    assert!(region.borrow().starts_with("Animating"));

    while fx.tick() == Tick::Continue {
        assert!(fx.is_animating());
        assert!(region.borrow().starts_with("Animating"));
    }
    assert!(!fx.is_animating());
    assert_eq!(*region.borrow(), "Animation complete. Displaying ROR ID: ?");
}
