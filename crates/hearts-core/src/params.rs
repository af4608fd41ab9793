use crate::color::Rgba;

/// Which silhouette the particles form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Text,
    Pony,
}

impl Mode {
    #[inline]
    pub fn is_pony(self) -> bool {
        matches!(self, Mode::Pony)
    }

    #[inline]
    pub fn from_pony_flag(pony: bool) -> Self {
        if pony {
            Mode::Pony
        } else {
            Mode::Text
        }
    }

    pub fn params(self) -> ModeParams {
        match self {
            Mode::Text => ModeParams {
                pull: 0.017,
                damping: 0.88,
                jitter: 0.34,
                min_particles: 220,
                max_particles: 1050,
                hue_tone: 0.0,
                backdrop: Rgba::new(24, 8, 27, 0.17),
                ripple_color: Rgba::new(255, 120, 196, 1.0),
                ripple_alpha_scale: 0.5,
            },
            Mode::Pony => ModeParams {
                pull: 0.021,
                damping: 0.9,
                jitter: 0.2,
                min_particles: 150,
                max_particles: 420,
                hue_tone: -22.0,
                backdrop: Rgba::new(31, 13, 36, 0.2),
                ripple_color: Rgba::new(255, 175, 215, 1.0),
                ripple_alpha_scale: 0.56,
            },
        }
    }
}

/// Mode-dependent integration and palette coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeParams {
    /// Spring coefficient toward the assigned target.
    pub pull: f32,
    /// Per-frame velocity multiplier.
    pub damping: f32,
    /// Amplitude of the ambient sinusoidal jitter.
    pub jitter: f32,
    pub min_particles: usize,
    pub max_particles: usize,
    /// Hue offset in degrees added to every glyph.
    pub hue_tone: f32,
    /// Translucent fill laid over the previous frame.
    pub backdrop: Rgba,
    pub ripple_color: Rgba,
    pub ripple_alpha_scale: f32,
}

impl ModeParams {
    /// Pool size for a given number of sampled targets.
    #[inline]
    pub fn particle_count(&self, target_count: usize) -> usize {
        target_count.clamp(self.min_particles, self.max_particles)
    }
}
