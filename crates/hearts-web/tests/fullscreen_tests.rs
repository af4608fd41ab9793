// Host-side tests for the fullscreen toggle decision.
// The crate is wasm-only, so the module is included directly.

#![allow(dead_code)]
mod fullscreen {
    include!("../src/fullscreen.rs");
}

use fullscreen::FullscreenAction;

#[test]
fn toggle_direction_follows_current_state() {
    assert_eq!(FullscreenAction::toggle_from(false), FullscreenAction::Enter);
    assert_eq!(FullscreenAction::toggle_from(true), FullscreenAction::Exit);
}

#[test]
fn toggle_calls_promise_returning_dom_methods() {
    assert_eq!(FullscreenAction::Enter.method(), "requestFullscreen");
    assert_eq!(FullscreenAction::Exit.method(), "exitFullscreen");
}
