// DOM hooks and timing for the web front-end.

// Element ids
pub const CANVAS_ID: &str = "heartCanvas";
pub const PONY_TOGGLE_ID: &str = "ponyModeToggle";
pub const FULLSCREEN_BUTTON_ID: &str = "fullscreenButton";
pub const PULSE_BUTTON_ID: &str = "pulseButton";

// Canvas data attributes read into `SceneConfig`
pub const ATTR_GREETING: &str = "data-greeting";
pub const ATTR_FONT: &str = "data-font";
pub const ATTR_GLYPH: &str = "data-glyph";
pub const ATTR_PONY_GLYPH: &str = "data-pony-glyph";
pub const ATTR_SEED: &str = "data-seed";

// Timers (milliseconds)
pub const RESIZE_DEBOUNCE_MS: i32 = 100; // quiet window before a resize is handled
pub const FULLSCREEN_SETTLE_MS: i32 = 120; // wait for the browser to finish the transition
pub const ORIENTATION_SETTLE_MS: i32 = 120;

// Offscreen drawing
pub const RASTER_FILL: &str = "#fff";

// Twemoji unicorn silhouette (CC-BY 4.0, https://github.com/twitter/twemoji, 1f984.svg)
pub const PONY_OUTLINE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 36 36"><path fill="#fff" d="M36 19.854C33.518 9.923 25.006 1.909 16.031 6.832c0 0-4.522-1.496-5.174-1.948-.635-.44-1.635-.904-.912.436.423.782.875 1.672 2.403 3.317C8 12.958 9.279 18.262 7.743 21.75c-1.304 2.962-2.577 4.733-1.31 6.976 1.317 2.33 4.729 3.462 7.018 1.06 1.244-1.307.471-1.937 3.132-4.202 2.723-.543 4.394-1.791 4.394-4.375 0 0 .795-.382 1.826 6.009.456 2.818-.157 5.632-.039 8.783H36V19.854z"/></svg>"##;
