use crate::constants::{POINTER_DECAY, POINTER_FORCE_FLOOR};
use glam::Vec2;

/// Last pointer position in device pixels and its remaining push strength.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    pub force: f32,
}

impl Pointer {
    /// Move the pointer; the force only ever rises here.
    #[inline]
    pub fn apply(&mut self, pos: Vec2, strength: f32) {
        self.pos = pos;
        self.force = self.force.max(strength);
    }

    /// One frame of geometric decay with a hard zero floor.
    #[inline]
    pub fn decay(&mut self) {
        self.force *= POINTER_DECAY;
        if self.force < POINTER_FORCE_FLOOR {
            self.force = 0.0;
        }
    }

    /// Keep an active pointer inside a resized canvas.
    #[inline]
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        if self.force > 0.0 {
            self.pos = self.pos.clamp(Vec2::ZERO, Vec2::new(width, height));
        }
    }
}
