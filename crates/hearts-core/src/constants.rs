// Simulation and sampling tuning constants shared by every front-end.
// Distances are in CSS pixels unless noted; multiply by the device pixel ratio.

// Device pixel ratio
pub const MAX_DEVICE_PIXEL_RATIO: f32 = 2.0; // backing store never exceeds 2x CSS size

// Frame clock
pub const PHASE_STEP: f32 = 0.015; // global phase advance per frame
pub const JITTER_FREQUENCY: f32 = 2.4; // multiplies the global phase
pub const JITTER_Y_SCALE: f32 = 0.6; // vertical jitter relative to horizontal

// Pointer
pub const POINTER_RADIUS: f32 = 180.0; // repulsion reach
pub const POINTER_PUSH: f32 = 1.4; // force multiplier at zero distance
pub const POINTER_ACTIVE_FORCE: f32 = 0.001; // below this the pointer is ignored
pub const POINTER_DECAY: f32 = 0.93; // per-frame geometric decay
pub const POINTER_FORCE_FLOOR: f32 = 0.003; // snapped to zero below this

// Interaction strengths
pub const MOVE_STRENGTH: f32 = 0.85;
pub const CLICK_STRENGTH: f32 = 2.2;
pub const TOUCH_MOVE_STRENGTH: f32 = 1.05;
pub const TOUCH_START_STRENGTH: f32 = 2.4;
pub const TAP_RIPPLE_MAGNITUDE: f32 = 2.0;
pub const MODE_SWITCH_RIPPLE_MAGNITUDE: f32 = 2.4;
pub const PULSE_RIPPLE_MAGNITUDE: f32 = 2.2;
pub const AMBIENT_RIPPLE_MAGNITUDE: f32 = 1.2;
pub const AMBIENT_RIPPLE_MARGIN: f32 = 0.1; // fraction of each edge kept clear

// Ripples
pub const RIPPLE_LIFE: u32 = 95; // frames
pub const RIPPLE_START_RADIUS: f32 = 1.0;
pub const RIPPLE_SPEED_BASE: f32 = 5.0;
pub const RIPPLE_SPEED_PER_MAGNITUDE: f32 = 1.8;
pub const RIPPLE_POWER_BASE: f32 = 0.9;
pub const RIPPLE_POWER_PER_MAGNITUDE: f32 = 0.5;
pub const RIPPLE_BAND: f32 = 20.0; // half-width of the wavefront
pub const RIPPLE_LINE_WIDTH: f32 = 1.6;

// Glow
pub const GLOW_BASE: f32 = 2.0;
pub const GLOW_CAP: f32 = 18.0;
pub const GLOW_SPEED_WEIGHT: f32 = 0.8;
pub const GLOW_HUE_WEIGHT: f32 = 0.04;

// Particle spawn ranges
pub const PARTICLE_SIZE_MIN: f32 = 6.0;
pub const PARTICLE_SIZE_SPAN: f32 = 6.0;
pub const PARTICLE_HUE_SPAN: f32 = 30.0;

// Text sampling
pub const TEXT_ALPHA_THRESHOLD: u8 = 100; // kept when strictly above
pub const TEXT_GAP_MIN: u32 = 8;
pub const TEXT_GAP_DIVISOR: u32 = 110;
pub const TEXT_FONT_MIN: f32 = 72.0;
pub const TEXT_FONT_WIDTH_RATIO: f32 = 0.16;
pub const TEXT_FONT_HEIGHT_RATIO: f32 = 0.4;
pub const TEXT_FONT_WEIGHT: u16 = 700;
pub const TEXT_BASELINE_RATIO: f32 = 0.58;

// Image sampling
pub const IMAGE_ALPHA_THRESHOLD: u8 = 70; // opaque at or above
pub const IMAGE_GAP_MIN: u32 = 10;
pub const IMAGE_GAP_DIVISOR: u32 = 82;
pub const IMAGE_WIDTH_RATIO: f32 = 0.46;
pub const IMAGE_HEIGHT_RATIO: f32 = 0.64;
pub const IMAGE_INTERIOR_KEEP: f64 = 0.08; // retention probability off the edge

// Canvas layout
pub const LAYOUT_WIDTH_RATIO: f32 = 0.96;
pub const LAYOUT_MAX_WIDTH: f32 = 1250.0;
pub const LAYOUT_LANDSCAPE_HEIGHT_RATIO: f32 = 0.7;
pub const LAYOUT_PORTRAIT_HEIGHT_RATIO: f32 = 0.46;
pub const LAYOUT_MAX_HEIGHT_RATIO: f32 = 0.72;
pub const LAYOUT_MIN_HEIGHT: f32 = 300.0;
pub const LAYOUT_ASPECT: f32 = 0.58; // preferred height / width

// Ambient pulse
pub const AMBIENT_INTERVAL_MS: u64 = 1300;
