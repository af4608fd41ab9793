//! Canvas sizing for the greeting card.

use crate::constants::*;

/// Window metrics the layout is derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub inner_width: f32,
    pub inner_height: f32,
    pub landscape: bool,
    /// Raw `devicePixelRatio`; zero or non-finite is treated as 1.
    pub device_pixel_ratio: f32,
}

/// CSS box and backing-store size for the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    pub css_width: u32,
    pub css_height: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Effective ratio after the fallback and cap.
    pub device_pixel_ratio: f32,
}

/// `devicePixelRatio` with the fallback to 1 and the 2x cap applied.
#[inline]
pub fn effective_dpr(raw: f32) -> f32 {
    let dpr = if raw.is_finite() && raw > 0.0 { raw } else { 1.0 };
    dpr.min(MAX_DEVICE_PIXEL_RATIO)
}

impl CanvasLayout {
    pub fn compute(viewport: Viewport) -> Self {
        let available_width = (viewport.inner_width * LAYOUT_WIDTH_RATIO).min(LAYOUT_MAX_WIDTH);
        let mobile_height = if viewport.landscape {
            viewport.inner_height * LAYOUT_LANDSCAPE_HEIGHT_RATIO
        } else {
            viewport.inner_height * LAYOUT_PORTRAIT_HEIGHT_RATIO
        };
        let target_height = (viewport.inner_height * LAYOUT_MAX_HEIGHT_RATIO).min(
            LAYOUT_MIN_HEIGHT
                .max(mobile_height)
                .max(available_width * LAYOUT_ASPECT),
        );

        let css_width = available_width.max(0.0).floor();
        let css_height = target_height.max(0.0).floor();
        let dpr = effective_dpr(viewport.device_pixel_ratio);
        Self {
            css_width: css_width as u32,
            css_height: css_height as u32,
            pixel_width: (css_width * dpr).floor() as u32,
            pixel_height: (css_height * dpr).floor() as u32,
            device_pixel_ratio: dpr,
        }
    }
}
