use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// Expanding ring that pushes particles near its wavefront outward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub center: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub power: f32,
    /// Frames left to live.
    pub life: u32,
}

impl Ripple {
    pub fn new(center: Vec2, magnitude: f32) -> Self {
        Self {
            center,
            radius: RIPPLE_START_RADIUS,
            speed: RIPPLE_SPEED_BASE + magnitude * RIPPLE_SPEED_PER_MAGNITUDE,
            power: RIPPLE_POWER_BASE + magnitude * RIPPLE_POWER_PER_MAGNITUDE,
            life: RIPPLE_LIFE,
        }
    }

    /// Advance one frame. Returns `false` once the ripple has expired.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.radius += self.speed;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }

    /// Remaining life as a fraction of a fresh ripple.
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        self.life as f32 / RIPPLE_LIFE as f32
    }

    /// Outward velocity impulse for a particle at `pos`, if it sits inside
    /// the wavefront band.
    #[inline]
    pub fn impulse(&self, pos: Vec2, band: f32) -> Option<Vec2> {
        let offset = pos - self.center;
        let mut dist = offset.length();
        if dist == 0.0 {
            dist = 1.0;
        }
        let edge = (dist - self.radius).abs();
        if edge >= band {
            return None;
        }
        let wave = (1.0 - edge / band) * self.power;
        Some(offset / dist * wave)
    }
}

/// Live ripples; a handful at a time in practice.
#[derive(Clone, Debug, Default)]
pub struct Ripples {
    items: SmallVec<[Ripple; 8]>,
}

impl Ripples {
    #[inline]
    pub fn spawn(&mut self, center: Vec2, magnitude: f32) {
        self.items.push(Ripple::new(center, magnitude));
    }

    /// Advance every ripple one frame and drop the expired ones.
    pub fn step(&mut self) {
        self.items.retain(|r| r.advance());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Ripple> {
        self.items.iter()
    }
}
