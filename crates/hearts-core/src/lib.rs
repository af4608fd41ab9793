//! Platform-free core of the hearts greeting.
//!
//! Everything here runs on the host as well as in the browser: target
//! sampling over an injected [`Raster`], the particle [`Simulation`], ripple
//! and pointer state, glyph styling over an injected [`Surface`], and the
//! canvas sizing math. The web front-end only supplies the platform pieces.

pub mod ambient;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod mask;
pub mod params;
pub mod pointer;
pub mod rebuild;
pub mod ripple;
pub mod sampler;
pub mod sim;
pub mod surface;

pub use ambient::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use glyph::*;
pub use layout::*;
pub use mask::*;
pub use params::*;
pub use pointer::*;
pub use rebuild::*;
pub use ripple::*;
pub use sampler::*;
pub use sim::*;
pub use surface::*;
