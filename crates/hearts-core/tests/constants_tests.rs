// Sanity checks for the tuning constants and how they relate.

use hearts_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn decays_and_ratios_are_fractions() {
    assert!(POINTER_DECAY > 0.0 && POINTER_DECAY < 1.0);
    assert!(AMBIENT_RIPPLE_MARGIN >= 0.0 && AMBIENT_RIPPLE_MARGIN < 0.5);
    assert!(IMAGE_INTERIOR_KEEP >= 0.0 && IMAGE_INTERIOR_KEEP <= 1.0);
    assert!(LAYOUT_WIDTH_RATIO > 0.0 && LAYOUT_WIDTH_RATIO <= 1.0);
    assert!(LAYOUT_MAX_HEIGHT_RATIO > 0.0 && LAYOUT_MAX_HEIGHT_RATIO <= 1.0);
    assert!(TEXT_BASELINE_RATIO > 0.0 && TEXT_BASELINE_RATIO < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_thresholds_are_ordered() {
    assert!(POINTER_ACTIVE_FORCE < POINTER_FORCE_FLOOR);
    assert!(POINTER_FORCE_FLOOR < MOVE_STRENGTH);
    assert!(MOVE_STRENGTH < TOUCH_MOVE_STRENGTH);
    assert!(TOUCH_MOVE_STRENGTH < CLICK_STRENGTH);
    assert!(CLICK_STRENGTH < TOUCH_START_STRENGTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ripple_magnitudes_are_ordered() {
    assert!(AMBIENT_RIPPLE_MAGNITUDE < TAP_RIPPLE_MAGNITUDE);
    assert!(TAP_RIPPLE_MAGNITUDE < PULSE_RIPPLE_MAGNITUDE);
    assert!(PULSE_RIPPLE_MAGNITUDE < MODE_SWITCH_RIPPLE_MAGNITUDE);
    assert!(RIPPLE_LIFE > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_stays_below_cap() {
    assert!(GLOW_BASE < GLOW_CAP);
    let max_glow = GLOW_CAP * GLOW_SPEED_WEIGHT + PARTICLE_HUE_SPAN * GLOW_HUE_WEIGHT;
    assert!(max_glow < 20.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_gaps_have_positive_floors() {
    assert!(TEXT_GAP_MIN > 0);
    assert!(IMAGE_GAP_MIN > 0);
    assert!(TEXT_FONT_MIN > 0.0);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
}
