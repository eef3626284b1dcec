//! Seams to the host's 2D drawing context.
//!
//! The engine never talks to a canvas directly. A host implements
//! [`TextLayout`] and [`Surface`] over whatever raster it has (a browser
//! `CanvasRenderingContext2d`, an offscreen buffer, or a recorder in tests).

use crate::color::{Rgb, Rgba};
use glam::Vec2;

/// Rendered extent of a string at a given font size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Soft glow drawn around a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgb,
    pub blur: f32,
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

pub trait TextLayout {
    /// Must return identical metrics for identical inputs.
    fn measure_text(&self, text: &str, font_size: f32) -> TextMetrics;
}

pub trait Surface: TextLayout {
    /// Pixel dimensions, read-only for the engine.
    fn size(&self) -> Vec2;

    fn clear(&mut self);

    /// Fill `rect`. Any glow applies to this call only; implementations must
    /// reset shared shadow state before returning.
    fn fill_rect(&mut self, rect: Rect, fill: Rgba, glow: Option<Glow>);

    /// Draw `text` with its baseline-left corner at `at`, using the same font
    /// that [`TextLayout::measure_text`] measures.
    fn fill_text(&mut self, text: &str, at: Vec2, font_size: f32, fill: Rgba);
}
