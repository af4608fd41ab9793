//! Drawing-surface abstraction the simulation renders through.

use crate::color::{Hsl, Rgba};
use glam::Vec2;

/// Path command in glyph-local units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Cubic bezier: two control points then the end point.
    BezierTo(Vec2, Vec2, Vec2),
    Close,
}

/// Uniform scale followed by a translation into canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    pub scale: f32,
}

impl Transform {
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.translate + p * self.scale
    }
}

/// Fill colour plus a soft glow behind the shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPaint {
    pub fill: Hsl,
    pub shadow: Rgba,
    pub shadow_blur: f32,
}

/// Visible 2D canvas. Drawing calls never fail; a backend that cannot
/// honour one simply skips it.
pub trait Surface {
    /// Backing-store size in device pixels.
    fn size(&self) -> (u32, u32);
    fn clear(&mut self);
    /// Blend `color` over the whole surface.
    fn fill(&mut self, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba);
    fn fill_path(&mut self, path: &[PathCmd], transform: Transform, paint: &GlyphPaint);
    /// Draw a text symbol (typically an emoji) centred on the transform
    /// origin, one glyph unit per CSS pixel before scaling.
    fn fill_symbol(&mut self, symbol: &str, font_px: f32, transform: Transform, paint: &GlyphPaint);
}
