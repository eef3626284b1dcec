//! Tuning constants for the pixel particle reveal.
//!
//! These are the default values behind [`crate::EffectParams`]; they keep the
//! motion model's magic numbers in one place.

use crate::color::Rgb;

// Layout
pub const PARTICLE_COUNT: usize = 200;
pub const FONT_SIZE_PX: f32 = 18.0;
pub const FONT_FAMILY: &str = "'Press Start 2P'";
pub const TEXT_VERTICAL_BIAS_PX: f32 = 25.0; // text block sits this far above centre

// Homing and spiral
pub const HOMING_ACCEL: f32 = 1.2;
pub const SPIRAL_WEIGHT: f32 = 0.1; // share of the spiral offset added to velocity
pub const SPIRAL_DECAY: f32 = 0.95; // radius multiplier per active frame
pub const ARRIVAL_RADIUS_PX: f32 = 1.0;

// Stochastic drag, per axis: factor in [DRAG_MIN, DRAG_MIN + DRAG_SPAN)
pub const DRAG_MIN: f32 = 0.95;
pub const DRAG_SPAN: f32 = 0.1;

// Fade
pub const OPACITY_STEP: f32 = 0.03;
pub const LIFE_STEP: f32 = 0.006;

// Spawn ranges
pub const SIZE_MIN_PX: f32 = 2.0;
pub const SIZE_SPAN_PX: f32 = 4.0;
pub const SPEED_MIN: f32 = 3.0;
pub const SPEED_SPAN: f32 = 6.0;
pub const DELAY_MAX_FRAMES: u32 = 30;
pub const SPIRAL_RADIUS_MAX_PX: f32 = 50.0;
pub const SPIRAL_SPEED_MIN: f32 = 0.05;
pub const SPIRAL_SPEED_SPAN: f32 = 0.1;

// Drawing
pub const GLOW_BLUR_PX: f32 = 5.0;
pub const LABEL_SHADOW_OFFSET_PX: f32 = 2.0;
pub const LABEL_SHADOW_ALPHA: f32 = 0.8;

/// Light-to-dark blue tones particles pick their color from.
pub const PALETTE: [Rgb; 5] = [
    Rgb::new(60, 130, 214),
    Rgb::new(100, 160, 244),
    Rgb::new(140, 190, 255),
    Rgb::new(180, 220, 255),
    Rgb::new(220, 240, 255),
];

// Mixes the engine seed into per-particle RNG seeds
pub const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
