//! Headless surface that records draw calls instead of rasterising them.

use crate::color::Rgba;
use crate::surface::{Glow, Rect, Surface, TextLayout, TextMetrics};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Rect {
        rect: Rect,
        fill: Rgba,
        glow: Option<Glow>,
    },
    Text {
        text: String,
        at: Vec2,
        fill: Rgba,
    },
}

/// Monospace layout: every char is `advance * font_size` wide and the line
/// is `font_size` tall.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Vec2,
    advance: f32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            advance: 1.0,
            ops: Vec::new(),
        }
    }

    pub fn with_advance(mut self, advance: f32) -> Self {
        self.advance = advance;
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Ops issued since the most recent clear, i.e. what is visible now.
    pub fn visible(&self) -> &[DrawOp] {
        match self.ops.iter().rposition(|op| *op == DrawOp::Clear) {
            Some(i) => &self.ops[i + 1..],
            None => &self.ops,
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TextLayout for RecordingSurface {
    fn measure_text(&self, text: &str, font_size: f32) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.advance * font_size,
            height: font_size,
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, fill: Rgba, glow: Option<Glow>) {
        self.ops.push(DrawOp::Rect { rect, fill, glow });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, _font_size: f32, fill: Rgba) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            at,
            fill,
        });
    }
}
