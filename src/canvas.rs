use glam::Vec2;
use pixel_particles::constants::FONT_FAMILY;
use pixel_particles::{Glow, Rect, Rgba, Surface, TextLayout, TextMetrics};
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    #[inline]
    fn set_font(&self, font_size: f32) {
        self.ctx.set_font(&format!("{}px {}", font_size, FONT_FAMILY));
    }
}

impl TextLayout for CanvasSurface {
    fn measure_text(&self, text: &str, font_size: f32) -> TextMetrics {
        self.set_font(font_size);
        let width = match self.ctx.measure_text(text) {
            Ok(m) => m.width() as f32,
            Err(e) => {
                log::warn!("measureText failed for {:?}: {:?}", text, e);
                0.0
            }
        };
        TextMetrics {
            width,
            height: font_size,
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_rect(&mut self, rect: Rect, fill: Rgba, glow: Option<Glow>) {
        if let Some(g) = glow {
            self.ctx.set_shadow_color(&g.color.to_string());
            self.ctx.set_shadow_blur(g.blur as f64);
        }
        self.ctx.set_fill_style_str(&fill.to_string());
        self.ctx.fill_rect(
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
        // shadow state is context-wide
        self.ctx.set_shadow_blur(0.0);
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font_size: f32, fill: Rgba) {
        self.set_font(font_size);
        self.ctx.set_fill_style_str(&fill.to_string());
        if let Err(e) = self.ctx.fill_text(text, at.x as f64, at.y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
