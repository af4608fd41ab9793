use crate::error::{Error, Result};

/// Alpha channel of a raster readback, one byte per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    /// Fully transparent mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width as usize * height as usize],
        }
    }

    /// Extract the alpha channel from interleaved RGBA bytes, as returned by
    /// `getImageData`.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        if rgba.len() != width as usize * height as usize * 4 {
            return Err(Error::MaskSize {
                len: rgba.len(),
                width,
                height,
            });
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Ok(Self {
            width,
            height,
            alpha,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at `(x, y)`; out-of-bounds reads are transparent.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            self.alpha[y as usize * self.width as usize + x as usize] = value;
        }
    }

    pub fn clear(&mut self) {
        self.alpha.fill(0);
    }

    /// Set every pixel in the half-open rectangle, clipped to the mask.
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, value: u8) {
        let xa = x0.max(0.0).floor() as u32;
        let ya = y0.max(0.0).floor() as u32;
        let xb = (x1.max(0.0).ceil() as u32).min(self.width);
        let yb = (y1.max(0.0).ceil() as u32).min(self.height);
        for y in ya..yb {
            let row = y as usize * self.width as usize;
            for x in xa..xb {
                self.alpha[row + x as usize] = value;
            }
        }
    }
}
