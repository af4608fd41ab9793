use thiserror::Error;

/// Failures surfaced by target sampling and raster readback.
///
/// None of these are fatal for the page: callers log them and keep the
/// previous targets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("canvas has degenerate size {width}x{height}")]
    DegenerateCanvas { width: u32, height: u32 },
    #[error("no target points were sampled")]
    NoTargets,
    #[error("alpha buffer of {len} bytes does not cover {width}x{height}")]
    MaskSize { len: usize, width: u32, height: u32 },
    #[error("raster readback failed: {0}")]
    Raster(String),
}

pub type Result<T> = std::result::Result<T, Error>;
