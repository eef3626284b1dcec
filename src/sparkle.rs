use crate::constants::*;
use rand::Rng;

/// One decorative sparkle, positioned relative to the result box.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub duration_ms: f64,
}

impl Sparkle {
    /// Random sparkle within a `width` x `height` box grown by the margin on
    /// every side.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let reach_x = width + 2.0 * SPARKLE_MARGIN_PX;
        let reach_y = height + 2.0 * SPARKLE_MARGIN_PX;
        Self {
            left: (rng.gen::<f64>() * reach_x - SPARKLE_MARGIN_PX).round(),
            top: (rng.gen::<f64>() * reach_y - SPARKLE_MARGIN_PX).round(),
            size: SPARKLE_SIZE_MIN_PX + rng.gen::<f64>() * SPARKLE_SIZE_SPAN_PX,
            duration_ms: SPARKLE_DURATION_MIN_MS + rng.gen::<f64>() * SPARKLE_DURATION_SPAN_MS,
        }
    }

    /// Inline style properties for the sparkle element.
    pub fn style(&self) -> [(&'static str, String); 5] {
        [
            ("width", format!("{}px", self.size)),
            ("height", format!("{}px", self.size)),
            ("left", format!("{}px", self.left)),
            ("top", format!("{}px", self.top)),
            (
                "animation",
                format!(
                    "sparkle {}ms steps({}) forwards",
                    self.duration_ms.round(),
                    SPARKLE_STEPS
                ),
            ),
        ]
    }

    /// Milliseconds until the element can be removed.
    pub fn lifetime_ms(&self) -> i32 {
        self.duration_ms.ceil() as i32
    }
}
