// Host-side stand-ins for the browser drawing backends.

#![allow(dead_code)]

use glam::Vec2;
use hearts_core::{AlphaMask, FontSpec, GlyphPaint, PathCmd, Raster, Rect, Rgba, Surface, Transform};

/// Horizontal advance per character, as a fraction of the font size.
pub const BLOCK_ADVANCE: f32 = 0.6;
/// Glyph height above the baseline, as a fraction of the font size.
pub const BLOCK_ASCENT: f32 = 0.72;

/// Raster that draws text as one solid block and images by nearest-neighbour
/// scaling of an [`AlphaMask`].
pub struct BlockRaster {
    mask: AlphaMask,
    pub resizes: usize,
}

impl BlockRaster {
    pub fn new() -> Self {
        Self {
            mask: AlphaMask::new(0, 0),
            resizes: 0,
        }
    }
}

impl Raster for BlockRaster {
    type Image = AlphaMask;

    fn resize(&mut self, width: u32, height: u32) {
        self.mask = AlphaMask::new(width, height);
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.mask.clear();
    }

    fn fill_text(&mut self, text: &str, font: &FontSpec, center_x: f32, baseline_y: f32) {
        let width = font.size_px * BLOCK_ADVANCE * text.chars().count() as f32;
        let height = font.size_px * BLOCK_ASCENT;
        self.mask.fill_rect(
            center_x - width / 2.0,
            baseline_y - height,
            center_x + width / 2.0,
            baseline_y,
            255,
        );
    }

    fn draw_image(&mut self, image: &AlphaMask, dest: Rect) {
        if dest.w <= 0.0 || dest.h <= 0.0 || image.width() == 0 || image.height() == 0 {
            return;
        }
        let x0 = dest.x.max(0.0).floor() as u32;
        let y0 = dest.y.max(0.0).floor() as u32;
        let x1 = (dest.x + dest.w).ceil().max(0.0) as u32;
        let y1 = (dest.y + dest.h).ceil().max(0.0) as u32;
        for y in y0..y1.min(self.mask.height()) {
            for x in x0..x1.min(self.mask.width()) {
                let u = (x as f32 + 0.5 - dest.x) / dest.w;
                let v = (y as f32 + 0.5 - dest.y) / dest.h;
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }
                let sx = (u * image.width() as f32) as u32;
                let sy = (v * image.height() as f32) as u32;
                let a = image.get(sx, sy);
                if a > 0 {
                    self.mask.set(x, y, a);
                }
            }
        }
    }

    fn read_alpha(&self) -> hearts_core::Result<AlphaMask> {
        Ok(self.mask.clone())
    }
}

/// Opaque square image with a transparent border of `border` pixels.
pub fn square_image(side: u32, border: u32) -> AlphaMask {
    let mut image = AlphaMask::new(side, side);
    let (lo, hi) = (border as f32, (side - border) as f32);
    image.fill_rect(lo, lo, hi, hi, 255);
    image
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Fill(Rgba),
    Circle { center: Vec2, radius: f32, color: Rgba },
    Path { transform: Transform, paint: GlyphPaint },
    Symbol { symbol: String, transform: Transform },
}

/// Surface that records every call.
#[derive(Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, _line_width: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_path(&mut self, path: &[PathCmd], transform: Transform, paint: &GlyphPaint) {
        assert!(!path.is_empty());
        self.ops.push(DrawOp::Path {
            transform,
            paint: *paint,
        });
    }

    fn fill_symbol(&mut self, symbol: &str, _font_px: f32, transform: Transform, _paint: &GlyphPaint) {
        self.ops.push(DrawOp::Symbol {
            symbol: symbol.to_string(),
            transform,
        });
    }
}
