// Host-side tests for sparkle burst geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sparkle {
    include!("../src/sparkle.rs");
}

use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sparkle::Sparkle;

#[test]
fn sparkles_land_in_and_around_the_box() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let s = Sparkle::sample(&mut rng, 200.0, 80.0);
        assert!(s.left >= -SPARKLE_MARGIN_PX && s.left <= 200.0 + SPARKLE_MARGIN_PX);
        assert!(s.top >= -SPARKLE_MARGIN_PX && s.top <= 80.0 + SPARKLE_MARGIN_PX);
        assert_eq!(s.left, s.left.round());
        assert!(s.size >= 2.0 && s.size < 6.0);
        assert!(s.duration_ms >= 400.0 && s.duration_ms < 1200.0);
        assert!(s.lifetime_ms() >= 400 && s.lifetime_ms() <= 1200);
    }
}

#[test]
fn style_uses_stepped_animation() {
    let s = Sparkle {
        left: -3.0,
        top: 12.0,
        size: 4.5,
        duration_ms: 612.4,
    };
    let style = s.style();
    assert_eq!(style[0], ("width", "4.5px".to_owned()));
    assert_eq!(style[2], ("left", "-3px".to_owned()));
    assert_eq!(style[4].1, "sparkle 612ms steps(8) forwards");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_timing_fits_inside_the_reveal() {
    assert!(SPARKLE_WAVES >= 1);
    assert!(SPARKLE_WAVE_GAP_MS > 0);
    assert!(FLASH_MS > SPARKLE_START_DELAY_MS);
    assert!(SPARKLE_DURATION_MIN_MS > 0.0);
}
