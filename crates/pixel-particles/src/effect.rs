//! One running reveal: a fixed set of particles converging onto a label.
//!
//! The host drives the effect by calling [`ParticleEffect::tick`] once per
//! display refresh and rescheduling only while it returns [`Tick::Continue`].

use crate::color::Rgb;
use crate::constants::{LABEL_SHADOW_ALPHA, LABEL_SHADOW_OFFSET_PX, SEED_MIX};
use crate::params::{EffectError, EffectParams};
use crate::particle::{Motion, Particle, ParticleConfig};
use crate::surface::{Surface, TextMetrics};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectEvent {
    /// Sent to a listener as soon as it is attached to a live effect.
    Started,
    /// Sent once, on the frame the last particle's life runs out.
    Settled,
}

/// Receives lifecycle events together with the effect's text.
pub type EffectListener = Box<dyn FnMut(EffectEvent, &str)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectStatus {
    Animating,
    Settled,
    Disposed,
}

/// Whether the host should schedule another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Done,
}

/// Top-left corner of the text block the particles converge on.
pub fn text_anchor(surface: Vec2, metrics: TextMetrics, vertical_bias: f32) -> Vec2 {
    Vec2::new(
        (surface.x - metrics.width) / 2.0,
        (surface.y - metrics.height) / 2.0 - vertical_bias,
    )
}

/// Baseline position for the settled label.
pub fn label_position(surface: Vec2, text_width: f32, font_size: f32, vertical_bias: f32) -> Vec2 {
    Vec2::new(
        (surface.x - text_width) / 2.0,
        (surface.y + font_size / 2.0) / 2.0 - vertical_bias,
    )
}

/// Start point for particle `index` of `count`: evenly spaced on a circle of
/// radius `max(width, height)` around the surface centre, so every particle
/// begins outside the visible area.
pub fn spawn_point(surface: Vec2, index: usize, count: usize) -> Vec2 {
    let angle = index as f32 / count as f32 * TAU;
    surface / 2.0 + Vec2::from_angle(angle) * surface.max_element()
}

pub struct ParticleEffect<S: Surface> {
    text: String,
    params: EffectParams,
    particles: Vec<Particle>,
    surface: S,
    animating: bool,
    disposed: bool,
    frames: u32,
    listener: Option<EffectListener>,
}

impl<S: Surface> ParticleEffect<S> {
    pub fn new(surface: S, text: impl Into<String>, seed: u64) -> Self {
        Self::build(surface, text.into(), EffectParams::default(), seed)
    }

    pub fn with_params(
        surface: S,
        text: impl Into<String>,
        params: EffectParams,
        seed: u64,
    ) -> Result<Self, EffectError> {
        params.validate()?;
        Ok(Self::build(surface, text.into(), params, seed))
    }

    fn build(surface: S, text: String, params: EffectParams, seed: u64) -> Self {
        let size = surface.size();
        let metrics = surface.measure_text(&text, params.font_size);
        // Line height is the font size, not the measured ink height
        let metrics = TextMetrics {
            width: metrics.width,
            height: params.font_size,
        };
        let anchor = text_anchor(size, metrics, params.vertical_bias);
        let motion = Motion::from(&params);
        let count = params.particle_count;

        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|i| {
                let progress = i as f32 / count as f32;
                let target = Vec2::new(
                    anchor.x + progress * metrics.width,
                    anchor.y + rng.gen::<f32>() * metrics.height,
                );
                let config = ParticleConfig::sample(&mut rng, &params.palette);
                let own_seed = seed ^ (i as u64 + 1).wrapping_mul(SEED_MIX);
                Particle::new(
                    spawn_point(size, i, count),
                    target,
                    config,
                    motion,
                    StdRng::seed_from_u64(own_seed),
                )
            })
            .collect::<Vec<_>>();

        log::debug!(
            "[effect] text={:?} particles={} surface={}x{} text_width={:.1}",
            text,
            particles.len(),
            size.x,
            size.y,
            metrics.width
        );

        Self {
            text,
            params,
            particles,
            surface,
            animating: true,
            disposed: false,
            frames: 0,
            listener: None,
        }
    }

    /// Attach a listener. It immediately receives [`EffectEvent::Started`]
    /// if the effect is still animating.
    pub fn with_listener(mut self, listener: EffectListener) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, mut listener: EffectListener) {
        if self.status() == EffectStatus::Animating {
            listener(EffectEvent::Started, &self.text);
        }
        self.listener = Some(listener);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Frames advanced so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn is_animating(&self) -> bool {
        self.animating && !self.disposed
    }

    pub fn status(&self) -> EffectStatus {
        if self.disposed {
            EffectStatus::Disposed
        } else if self.animating {
            EffectStatus::Animating
        } else {
            EffectStatus::Settled
        }
    }

    pub fn advance(&mut self) {
        if !self.is_animating() {
            return;
        }
        self.frames += 1;

        let mut any_alive = false;
        for p in &mut self.particles {
            p.advance();
            any_alive |= p.is_alive();
        }

        if !any_alive {
            self.animating = false;
            log::debug!("[effect] {:?} settled after {} frames", self.text, self.frames);
            if let Some(listener) = self.listener.as_mut() {
                listener(EffectEvent::Settled, &self.text);
            }
        }
    }

    pub fn render(&mut self) {
        if self.disposed {
            return;
        }
        self.surface.clear();
        for p in &self.particles {
            p.render(&mut self.surface);
        }
        if !self.animating {
            self.draw_label();
        }
    }

    fn draw_label(&mut self) {
        let font_size = self.params.font_size;
        let width = self.surface.measure_text(&self.text, font_size).width;
        let at = label_position(self.surface.size(), width, font_size, self.params.vertical_bias);
        let shadow = Rgb::BLACK.with_alpha(LABEL_SHADOW_ALPHA);
        self.surface
            .fill_text(&self.text, at + Vec2::splat(LABEL_SHADOW_OFFSET_PX), font_size, shadow);
        self.surface
            .fill_text(&self.text, at, font_size, Rgb::WHITE.with_alpha(1.0));
    }

    /// One frame: advance, then render. Does nothing once settled or disposed.
    pub fn tick(&mut self) -> Tick {
        if !self.is_animating() {
            return Tick::Done;
        }
        self.advance();
        self.render();
        if self.is_animating() {
            Tick::Continue
        } else {
            Tick::Done
        }
    }

    /// Stop the effect for good. Later ticks return [`Tick::Done`] without
    /// touching the surface, and the listener is dropped.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        log::trace!("[effect] dispose {:?} at frame {}", self.text, self.frames);
        self.disposed = true;
        self.listener = None;
        self.particles.clear();
    }

    /// Dispose and hand the surface back to the caller.
    pub fn into_surface(mut self) -> S {
        self.dispose();
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;

    #[test]
    fn anchor_centres_block_with_bias() {
        let a = text_anchor(
            Vec2::new(384.0, 384.0),
            TextMetrics {
                width: 100.0,
                height: 18.0,
            },
            25.0,
        );
        assert_eq!(a, Vec2::new(142.0, 158.0));
    }

    #[test]
    fn label_baseline_matches_layout() {
        let at = label_position(Vec2::new(384.0, 384.0), 100.0, 18.0, 25.0);
        assert_eq!(at, Vec2::new(142.0, 171.5));
    }

    #[test]
    fn spawn_points_lie_outside_the_surface() {
        let size = Vec2::new(384.0, 200.0);
        for i in 0..200 {
            let p = spawn_point(size, i, 200);
            let d = (p - size / 2.0).length();
            assert!((d - 384.0).abs() < 1e-2);
        }
        let first = spawn_point(size, 0, 200);
        assert!((first - Vec2::new(192.0 + 384.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn tick_is_done_after_dispose() {
        let mut fx = ParticleEffect::new(RecordingSurface::new(64.0, 64.0), "x", 1);
        assert_eq!(fx.tick(), Tick::Continue);
        fx.dispose();
        let before = fx.surface().ops().len();
        assert_eq!(fx.tick(), Tick::Done);
        fx.render();
        assert_eq!(fx.surface().ops().len(), before);
        assert_eq!(fx.status(), EffectStatus::Disposed);
    }

    #[test]
    fn custom_params_are_validated() {
        let params = EffectParams {
            particle_count: 0,
            ..EffectParams::default()
        };
        let err = ParticleEffect::with_params(RecordingSurface::new(10.0, 10.0), "x", params, 0)
            .err();
        assert_eq!(err, Some(EffectError::NoParticles));
    }
}
