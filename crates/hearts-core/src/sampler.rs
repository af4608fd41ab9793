//! Target point sampling.
//!
//! A shape is drawn into a private offscreen [`Raster`], its alpha channel is
//! read back, and the mask is scanned on a square grid. Text keeps every
//! opaque grid point; images keep the silhouette outline plus a sparse random
//! share of the interior.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::error::{Error, Result};
use crate::mask::AlphaMask;
use crate::params::Mode;
use glam::Vec2;
use rand::Rng;

/// Axis-aligned rectangle in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Font used to rasterize the greeting.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub weight: u16,
    pub size_px: f32,
    pub family: String,
}

impl FontSpec {
    /// CSS `font` shorthand, e.g. `700 128px 'Trebuchet MS', sans-serif`.
    pub fn css(&self) -> String {
        format!("{} {}px {}", self.weight, self.size_px, self.family)
    }
}

/// Offscreen drawing target the sampler renders into and reads back.
///
/// Implementations own their pixel storage; the sampler never shares it.
pub trait Raster {
    type Image;

    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    /// Fill `text` horizontally centred on `center_x` with its alphabetic
    /// baseline at `baseline_y`.
    fn fill_text(&mut self, text: &str, font: &FontSpec, center_x: f32, baseline_y: f32);
    fn draw_image(&mut self, image: &Self::Image, dest: Rect);
    fn read_alpha(&self) -> Result<AlphaMask>;
}

/// Grid stride for text sampling.
#[inline]
pub fn text_gap(width: u32) -> u32 {
    (width / TEXT_GAP_DIVISOR).max(TEXT_GAP_MIN)
}

/// Grid stride for image sampling.
#[inline]
pub fn image_gap(width: u32) -> u32 {
    (width / IMAGE_GAP_DIVISOR).max(IMAGE_GAP_MIN)
}

/// Placement of the greeting text inside a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub font: FontSpec,
    pub center_x: f32,
    pub baseline_y: f32,
    pub gap: u32,
}

impl TextLayout {
    pub fn for_canvas(width: u32, height: u32, family: &str) -> Self {
        let (w, h) = (width as f32, height as f32);
        let size_px = (w * TEXT_FONT_WIDTH_RATIO)
            .min(h * TEXT_FONT_HEIGHT_RATIO)
            .max(TEXT_FONT_MIN);
        Self {
            font: FontSpec {
                weight: TEXT_FONT_WEIGHT,
                size_px,
                family: family.to_string(),
            },
            center_x: w / 2.0,
            baseline_y: h * TEXT_BASELINE_RATIO,
            gap: text_gap(width),
        }
    }
}

/// Placement of the pony image inside a canvas: a centred square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayout {
    pub dest: Rect,
    pub gap: u32,
}

impl ImageLayout {
    pub fn for_canvas(width: u32, height: u32) -> Self {
        let (w, h) = (width as f32, height as f32);
        let side = (w * IMAGE_WIDTH_RATIO).min(h * IMAGE_HEIGHT_RATIO);
        Self {
            dest: Rect {
                x: (w - side) / 2.0,
                y: (h - side) / 2.0,
                w: side,
                h: side,
            },
            gap: image_gap(width),
        }
    }
}

/// Keep every grid point whose alpha is strictly above `threshold`.
///
/// Points are ordered row by row, top to bottom, left to right.
pub fn scan_fill(mask: &AlphaMask, gap: u32, threshold: u8) -> Vec<Vec2> {
    let gap = gap.max(1) as usize;
    let mut points = Vec::new();
    for y in (0..mask.height()).step_by(gap) {
        for x in (0..mask.width()).step_by(gap) {
            if mask.get(x, y) > threshold {
                points.push(Vec2::new(x as f32, y as f32));
            }
        }
    }
    points
}

/// Keep opaque grid points on the silhouette edge, plus interior points
/// with probability `interior_keep`.
///
/// A point is opaque at `alpha >= threshold`; it is an edge point when any of
/// its four grid neighbours is not. The outermost grid ring is skipped so
/// every neighbour lies inside the mask.
pub fn scan_outline<G: Rng>(
    mask: &AlphaMask,
    gap: u32,
    threshold: u8,
    interior_keep: f64,
    rng: &mut G,
) -> Vec<Vec2> {
    let gap = gap.max(1);
    let step = gap as usize;
    let mut points = Vec::new();
    let y_end = mask.height().saturating_sub(gap);
    let x_end = mask.width().saturating_sub(gap);
    for y in (gap..y_end).step_by(step) {
        for x in (gap..x_end).step_by(step) {
            if mask.get(x, y) < threshold {
                continue;
            }
            let is_edge = mask.get(x - gap, y) < threshold
                || mask.get(x + gap, y) < threshold
                || mask.get(x, y - gap) < threshold
                || mask.get(x, y + gap) < threshold;
            if is_edge || rng.gen_bool(interior_keep) {
                points.push(Vec2::new(x as f32, y as f32));
            }
        }
    }
    points
}

/// Non-empty, ordered sequence of target points.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetSet(Vec<Vec2>);

impl TargetSet {
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::NoTargets);
        }
        Ok(Self(points))
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Target for the particle at `index`; indices wrap around.
    #[inline]
    pub fn cyclic(&self, index: usize) -> Vec2 {
        self.0[index % self.0.len()]
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.0
    }
}

/// Shape drawn into the scratch raster.
pub enum TargetSource<'a, I> {
    Text,
    /// `None` when the image failed to decode; sampling falls back to text.
    Image(Option<&'a I>),
}

/// Produces target sets by drawing into a private scratch raster.
pub struct TargetSampler<R: Raster> {
    raster: R,
    width: u32,
    height: u32,
}

impl<R: Raster> TargetSampler<R> {
    pub fn new(raster: R) -> Self {
        Self {
            raster,
            width: 0,
            height: 0,
        }
    }

    pub fn raster(&self) -> &R {
        &self.raster
    }

    fn prepare(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::DegenerateCanvas { width, height });
        }
        if (width, height) != (self.width, self.height) {
            self.raster.resize(width, height);
            self.width = width;
            self.height = height;
        }
        self.raster.clear();
        Ok(())
    }

    pub fn sample_text(
        &mut self,
        width: u32,
        height: u32,
        text: &str,
        family: &str,
    ) -> Result<TargetSet> {
        self.prepare(width, height)?;
        let layout = TextLayout::for_canvas(width, height, family);
        self.raster
            .fill_text(text, &layout.font, layout.center_x, layout.baseline_y);
        let mask = self.raster.read_alpha()?;
        TargetSet::new(scan_fill(&mask, layout.gap, TEXT_ALPHA_THRESHOLD))
    }

    pub fn sample_image<G: Rng>(
        &mut self,
        width: u32,
        height: u32,
        image: &R::Image,
        rng: &mut G,
    ) -> Result<TargetSet> {
        self.prepare(width, height)?;
        let layout = ImageLayout::for_canvas(width, height);
        self.raster.draw_image(image, layout.dest);
        let mask = self.raster.read_alpha()?;
        TargetSet::new(scan_outline(
            &mask,
            layout.gap,
            IMAGE_ALPHA_THRESHOLD,
            IMAGE_INTERIOR_KEEP,
            rng,
        ))
    }

    /// Sample `source`, falling back to the greeting text when the image is
    /// missing or yields no points.
    pub fn sample<G: Rng>(
        &mut self,
        width: u32,
        height: u32,
        source: TargetSource<'_, R::Image>,
        config: &SceneConfig,
        rng: &mut G,
    ) -> Result<TargetSet> {
        if let TargetSource::Image(Some(image)) = source {
            match self.sample_image(width, height, image, rng) {
                Ok(targets) => return Ok(targets),
                Err(Error::NoTargets) => {
                    log::debug!("image produced no targets, sampling text instead");
                }
                Err(e) => return Err(e),
            }
        }
        self.sample_text(width, height, &config.greeting, &config.font_family)
    }

    /// Convenience wrapper selecting the source from the mode.
    pub fn sample_mode<G: Rng>(
        &mut self,
        width: u32,
        height: u32,
        mode: Mode,
        image: Option<&R::Image>,
        config: &SceneConfig,
        rng: &mut G,
    ) -> Result<TargetSet> {
        let source = match mode {
            Mode::Text => TargetSource::Text,
            Mode::Pony => TargetSource::Image(image),
        };
        self.sample(width, height, source, config, rng)
    }
}
