use crate::color::{Hsl, Rgba};
use crate::surface::{GlyphPaint, PathCmd, Surface, Transform};
use glam::{vec2, Vec2};

/// Size, in glyph units, that a particle `size` is measured against.
pub const GLYPH_BASE_SIZE: f32 = 18.0;

const HEART_HUE: f32 = 335.0;
const HEART_LIGHTNESS: f32 = 65.0;
const SHADOW_BLUR_BASE: f32 = 8.0;
const SHADOW_ALPHA_BASE: f32 = 0.7;
const SHADOW_ALPHA_DIVISOR: f32 = 25.0;
const SHADOW_RGB: (u8, u8, u8) = (255, 98, 173);

/// Heart outline, tip pointing down, origin near the top notch.
pub const HEART_PATH: [PathCmd; 8] = [
    PathCmd::MoveTo(vec2(0.0, 6.0)),
    PathCmd::BezierTo(vec2(0.0, 2.0), vec2(-7.0, -4.0), vec2(-12.0, -1.0)),
    PathCmd::BezierTo(vec2(-16.0, 1.5), vec2(-15.5, 8.0), vec2(-12.0, 11.5)),
    PathCmd::LineTo(vec2(0.0, 22.0)),
    PathCmd::LineTo(vec2(12.0, 11.5)),
    PathCmd::BezierTo(vec2(15.5, 8.0), vec2(16.0, 1.5), vec2(12.0, -1.0)),
    PathCmd::BezierTo(vec2(7.0, -4.0), vec2(0.0, 2.0), vec2(0.0, 6.0)),
    PathCmd::Close,
];

/// Shape each particle is drawn as.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Glyph {
    #[default]
    Heart,
    /// A text symbol such as `"🦄"`.
    Emoji(String),
}

impl Glyph {
    /// Parse a page-supplied glyph name: `"heart"` or any non-empty symbol.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if raw.eq_ignore_ascii_case("heart") {
            return Some(Glyph::Heart);
        }
        Some(Glyph::Emoji(raw.to_string()))
    }

    /// Draw the glyph at `pos` scaled so that `GLYPH_BASE_SIZE` maps to `size`.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, pos: Vec2, size: f32, paint: &GlyphPaint) {
        let transform = Transform {
            translate: pos,
            scale: size / GLYPH_BASE_SIZE,
        };
        match self {
            Glyph::Heart => surface.fill_path(&HEART_PATH, transform, paint),
            Glyph::Emoji(symbol) => surface.fill_symbol(symbol, GLYPH_BASE_SIZE, transform, paint),
        }
    }
}

/// Colour and glow for a glyph at the given glow intensity and hue tone.
pub fn glyph_paint(glow: f32, tone: f32) -> GlyphPaint {
    let (r, g, b) = SHADOW_RGB;
    GlyphPaint {
        fill: Hsl::new(HEART_HUE + glow + tone, 100.0, HEART_LIGHTNESS + glow / 2.0),
        shadow: Rgba::new(r, g, b, SHADOW_ALPHA_BASE + glow / SHADOW_ALPHA_DIVISOR),
        shadow_blur: SHADOW_BLUR_BASE + glow,
    }
}
