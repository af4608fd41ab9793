//! `web-sys` 2D-canvas backends for the core drawing traits.

use crate::constants::RASTER_FILL;
use hearts_core::{
    AlphaMask, Error, FontSpec, GlyphPaint, PathCmd, Raster, Rect, Rgba, Surface, Transform,
};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn trace_path(ctx: &web::CanvasRenderingContext2d, path: &[PathCmd]) {
    ctx.begin_path();
    for cmd in path {
        match *cmd {
            PathCmd::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            PathCmd::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            PathCmd::BezierTo(c1, c2, p) => ctx.bezier_curve_to(
                c1.x as f64,
                c1.y as f64,
                c2.x as f64,
                c2.y as f64,
                p.x as f64,
                p.y as f64,
            ),
            PathCmd::Close => ctx.close_path(),
        }
    }
}

fn apply_transform(ctx: &web::CanvasRenderingContext2d, transform: Transform) {
    let _ = ctx.translate(transform.translate.x as f64, transform.translate.y as f64);
    let scale = transform.scale as f64;
    let _ = ctx.scale(scale, scale);
}

fn apply_paint(ctx: &web::CanvasRenderingContext2d, paint: &GlyphPaint) {
    ctx.set_shadow_blur(paint.shadow_blur as f64);
    ctx.set_shadow_color(&paint.shadow.to_string());
    ctx.set_fill_style_str(&paint.fill.to_string());
}

/// The visible canvas.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill(&mut self, color: Rgba) {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.stroke();
        }
    }

    fn fill_path(&mut self, path: &[PathCmd], transform: Transform, paint: &GlyphPaint) {
        self.ctx.save();
        apply_transform(&self.ctx, transform);
        apply_paint(&self.ctx, paint);
        trace_path(&self.ctx, path);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn fill_symbol(&mut self, symbol: &str, font_px: f32, transform: Transform, paint: &GlyphPaint) {
        self.ctx.save();
        apply_transform(&self.ctx, transform);
        apply_paint(&self.ctx, paint);
        self.ctx.set_font(&format!("{}px sans-serif", font_px));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(symbol, 0.0, (font_px / 2.0) as f64);
        self.ctx.restore();
    }
}

/// Detached scratch canvas the sampler draws silhouettes into.
pub struct OffscreenRaster {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl OffscreenRaster {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("createElement failed: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }
}

impl Raster for OffscreenRaster {
    type Image = web::HtmlImageElement;

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_text(&mut self, text: &str, font: &FontSpec, center_x: f32, baseline_y: f32) {
        self.ctx.set_fill_style_str(RASTER_FILL);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.set_font(&font.css());
        if let Err(e) = self.ctx.fill_text(text, center_x as f64, baseline_y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }

    fn draw_image(&mut self, image: &Self::Image, dest: Rect) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            dest.x as f64,
            dest.y as f64,
            dest.w as f64,
            dest.h as f64,
        ) {
            log::warn!("drawImage failed: {:?}", e);
        }
    }

    fn read_alpha(&self) -> hearts_core::Result<AlphaMask> {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let data = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .map_err(|e| Error::Raster(format!("{:?}", e)))?;
        AlphaMask::from_rgba(w, h, &data.data().0)
    }
}
