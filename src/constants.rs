/// Page wiring and reveal timing constants for the web frontend.
///
/// Element ids and class names must match the host page's markup and CSS.
// Particle canvas
pub const CANVAS_SIZE_PX: u32 = 384;
pub const CANVAS_OFFSET_PX: u32 = 20; // inset from the container's top-left
pub const CANVAS_CLASS: &str = "animation-canvas";

// Host page hooks
pub const PIXEL_ART_CONTAINER_SELECTOR: &str = ".pixel-art-container";
pub const PIXEL_ART_CANVAS_ID: &str = "pixelArtCanvas";
pub const RESULT_CONTAINER_ID: &str = "resultContainer";
pub const LIVE_REGION_CLASS: &str = "sr-only";
pub const FLASH_CLASS: &str = "flash-effect";
pub const SPARKLE_CLASS: &str = "sparkle";

// Reveal sequencing (milliseconds)
pub const FLASH_MS: i32 = 400;
pub const SPARKLE_START_DELAY_MS: i32 = 100;
pub const RESULT_FADE_CSS: &str = "opacity 0.5s ease-in";

// Sparkle bursts
pub const SPARKLE_WAVES: u32 = 3;
pub const SPARKLE_WAVE_GAP_MS: i32 = 150;
pub const SPARKLES_PER_WAVE: u32 = 30;
pub const SPARKLE_MARGIN_PX: f64 = 30.0; // sparkles may land this far outside the box
pub const SPARKLE_SIZE_MIN_PX: f64 = 2.0;
pub const SPARKLE_SIZE_SPAN_PX: f64 = 4.0;
pub const SPARKLE_DURATION_MIN_MS: f64 = 400.0;
pub const SPARKLE_DURATION_SPAN_MS: f64 = 800.0;
pub const SPARKLE_STEPS: u32 = 8;
