use crate::color::Rgb;
use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EffectError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("font size must be a positive finite number, got {0}")]
    FontSize(f32),
    #[error("spiral decay must lie in (0, 1), got {0}")]
    SpiralDecay(f32),
    #[error("life step must be positive and finite, got {0}")]
    LifeStep(f32),
    #[error("drag range [{min}, {max}) is invalid")]
    DragRange { min: f32, max: f32 },
}

/// Motion, layout and drawing parameters for one effect instance.
///
/// `Default` reproduces the stock reveal; tests and embedders may tweak
/// individual fields and call [`EffectParams::validate`].
#[derive(Clone, Debug)]
pub struct EffectParams {
    pub particle_count: usize,
    pub font_size: f32,
    pub vertical_bias: f32,
    pub homing_accel: f32,
    pub spiral_weight: f32,
    pub spiral_decay: f32,
    pub arrival_radius: f32,
    pub drag_min: f32,
    pub drag_span: f32,
    pub opacity_step: f32,
    pub life_step: f32,
    pub glow_blur: f32,
    pub palette: Vec<Rgb>,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            font_size: FONT_SIZE_PX,
            vertical_bias: TEXT_VERTICAL_BIAS_PX,
            homing_accel: HOMING_ACCEL,
            spiral_weight: SPIRAL_WEIGHT,
            spiral_decay: SPIRAL_DECAY,
            arrival_radius: ARRIVAL_RADIUS_PX,
            drag_min: DRAG_MIN,
            drag_span: DRAG_SPAN,
            opacity_step: OPACITY_STEP,
            life_step: LIFE_STEP,
            glow_blur: GLOW_BLUR_PX,
            palette: PALETTE.to_vec(),
        }
    }
}

impl EffectParams {
    pub fn validate(&self) -> Result<(), EffectError> {
        if self.particle_count == 0 {
            return Err(EffectError::NoParticles);
        }
        if self.palette.is_empty() {
            return Err(EffectError::EmptyPalette);
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(EffectError::FontSize(self.font_size));
        }
        if !(self.spiral_decay > 0.0 && self.spiral_decay < 1.0) {
            return Err(EffectError::SpiralDecay(self.spiral_decay));
        }
        if !(self.life_step.is_finite() && self.life_step > 0.0) {
            return Err(EffectError::LifeStep(self.life_step));
        }
        if !(self.drag_min.is_finite() && self.drag_span.is_finite() && self.drag_span > 0.0) {
            return Err(EffectError::DragRange {
                min: self.drag_min,
                max: self.drag_min + self.drag_span,
            });
        }
        Ok(())
    }

    /// Active frames a particle needs before its life crosses zero.
    pub fn frames_to_settle(&self) -> u32 {
        (1.0 / self.life_step).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(EffectParams::default().validate(), Ok(()));
    }

    #[test]
    fn default_settle_window_is_167_frames() {
        assert_eq!(EffectParams::default().frames_to_settle(), 167);
    }

    #[test]
    fn rejects_bad_values() {
        let mut p = EffectParams::default();
        p.particle_count = 0;
        assert_eq!(p.validate(), Err(EffectError::NoParticles));

        let mut p = EffectParams::default();
        p.font_size = f32::NAN;
        assert!(matches!(p.validate(), Err(EffectError::FontSize(_))));

        let mut p = EffectParams::default();
        p.spiral_decay = 1.0;
        assert_eq!(p.validate(), Err(EffectError::SpiralDecay(1.0)));

        let mut p = EffectParams::default();
        p.palette.clear();
        assert_eq!(p.validate(), Err(EffectError::EmptyPalette));

        let mut p = EffectParams::default();
        p.drag_span = -0.1;
        assert!(matches!(p.validate(), Err(EffectError::DragRange { .. })));
    }
}
