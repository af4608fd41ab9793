use crate::constants::AMBIENT_INTERVAL_MS;
use crate::glyph::Glyph;
use crate::params::Mode;
use std::time::Duration;

/// Scene-level settings a page can override.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Text rasterized in text mode and as the pony-image fallback.
    pub greeting: String,
    /// CSS font family list used for the greeting.
    pub font_family: String,
    pub text_glyph: Glyph,
    pub pony_glyph: Glyph,
    pub ambient_interval: Duration,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            greeting: "Chelsea".to_string(),
            font_family: "'Trebuchet MS', sans-serif".to_string(),
            text_glyph: Glyph::Heart,
            pony_glyph: Glyph::Heart,
            ambient_interval: Duration::from_millis(AMBIENT_INTERVAL_MS),
            seed: None,
        }
    }
}

impl SceneConfig {
    #[inline]
    pub fn glyph_for(&self, mode: Mode) -> &Glyph {
        match mode {
            Mode::Text => &self.text_glyph,
            Mode::Pony => &self.pony_glyph,
        }
    }
}
