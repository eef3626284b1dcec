//! A single homing pixel.
//!
//! Each particle spirals toward a fixed target: a constant-magnitude pull
//! along the direction to the target plus a circular offset whose radius
//! decays every frame, integrated with a jittered drag. Life drains at a fixed
//! rate from the first active frame, independent of whether it has arrived.

use crate::color::Rgb;
use crate::constants::*;
use crate::params::EffectParams;
use crate::surface::{Glow, Rect, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Randomized spawn parameters for one particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    pub delay: u32,
    pub spiral_angle: f32,
    pub spiral_radius: f32,
    /// Signed; the sign picks the spiral direction.
    pub spiral_speed: f32,
    /// Direction of the initial velocity, radians.
    pub heading: f32,
    pub color: Rgb,
}

impl ParticleConfig {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgb]) -> Self {
        let color = palette.choose(rng).copied().unwrap_or(Rgb::WHITE);
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            size: SIZE_MIN_PX + rng.gen::<f32>() * SIZE_SPAN_PX,
            speed: SPEED_MIN + rng.gen::<f32>() * SPEED_SPAN,
            opacity: rng.gen::<f32>(),
            delay: rng.gen_range(0..DELAY_MAX_FRAMES),
            spiral_angle: rng.gen::<f32>() * TAU,
            spiral_radius: rng.gen::<f32>() * SPIRAL_RADIUS_MAX_PX,
            spiral_speed: (SPIRAL_SPEED_MIN + rng.gen::<f32>() * SPIRAL_SPEED_SPAN) * direction,
            heading: rng.gen::<f32>() * TAU,
            color,
        }
    }
}

/// Per-frame update constants shared by every particle of an effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub homing_accel: f32,
    pub spiral_weight: f32,
    pub spiral_decay: f32,
    pub arrival_radius: f32,
    pub drag_min: f32,
    pub drag_span: f32,
    pub opacity_step: f32,
    pub life_step: f32,
    pub glow_blur: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::from(&EffectParams::default())
    }
}

impl From<&EffectParams> for Motion {
    fn from(p: &EffectParams) -> Self {
        Self {
            homing_accel: p.homing_accel,
            spiral_weight: p.spiral_weight,
            spiral_decay: p.spiral_decay,
            arrival_radius: p.arrival_radius,
            drag_min: p.drag_min,
            drag_span: p.drag_span,
            opacity_step: p.opacity_step,
            life_step: p.life_step,
            glow_blur: p.glow_blur,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub target: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub speed: f32,
    pub color: Rgb,
    pub opacity: f32,
    pub life: f32,
    pub delay: u32,
    pub spiral_angle: f32,
    pub spiral_radius: f32,
    pub spiral_speed: f32,
    motion: Motion,
    // Drag jitter source, owned so particles never share mutable state
    rng: StdRng,
}

impl Particle {
    pub fn new(origin: Vec2, target: Vec2, config: ParticleConfig, motion: Motion, rng: StdRng) -> Self {
        let velocity = Vec2::from_angle(config.heading) * config.speed;
        Self {
            position: origin,
            target,
            velocity,
            size: config.size,
            speed: config.speed,
            color: config.color,
            opacity: config.opacity,
            life: 1.0,
            delay: config.delay,
            spiral_angle: config.spiral_angle,
            spiral_radius: config.spiral_radius,
            spiral_speed: config.spiral_speed,
            motion,
            rng,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.delay == 0
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn advance(&mut self) {
        if self.delay > 0 {
            self.delay -= 1;
            return;
        }

        let m = self.motion;
        let to_target = self.target - self.position;
        let distance = to_target.length();

        // The arrival guard also keeps the normalisation away from zero
        if distance > m.arrival_radius {
            self.spiral_angle += self.spiral_speed;
            let spiral = Vec2::from_angle(self.spiral_angle) * self.spiral_radius;
            self.spiral_radius *= m.spiral_decay;

            self.velocity += to_target / distance * m.homing_accel + spiral * m.spiral_weight;
            self.position += self.velocity;

            self.velocity.x *= m.drag_min + self.rng.gen::<f32>() * m.drag_span;
            self.velocity.y *= m.drag_min + self.rng.gen::<f32>() * m.drag_span;
        }

        self.opacity = (self.opacity + m.opacity_step).min(1.0);
        self.life = (self.life - m.life_step).max(0.0);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.is_active() {
            return;
        }
        let rect = Rect {
            origin: self.position.round(),
            size: Vec2::splat(self.size),
        };
        let glow = Glow {
            color: self.color,
            blur: self.motion.glow_blur,
        };
        surface.fill_rect(rect, self.color.with_alpha(self.opacity * self.life), Some(glow));
    }
}
