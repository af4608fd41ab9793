// Host-side tests for pure input functions.
// The crate is wasm-only, so the input module is included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_point_maps_into_backing_store() {
    // 400x200 CSS box at (10, 20) backed by an 800x400 canvas.
    let p = client_to_canvas(
        Vec2::new(210.0, 120.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(400.0, 200.0),
        Vec2::new(800.0, 400.0),
    );
    assert_eq!(p, Vec2::new(400.0, 200.0));
}

#[test]
fn rect_corners_map_to_canvas_corners() {
    let origin = Vec2::new(5.0, 5.0);
    let size = Vec2::new(300.0, 150.0);
    let canvas = Vec2::new(600.0, 300.0);
    assert_eq!(client_to_canvas(origin, origin, size, canvas), Vec2::ZERO);
    assert_eq!(client_to_canvas(origin + size, origin, size, canvas), canvas);
}

#[test]
fn points_outside_the_rect_are_not_clamped() {
    let p = client_to_canvas(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 200.0),
    );
    assert_eq!(p, Vec2::new(-20.0, -20.0));
}

#[test]
fn collapsed_rect_maps_one_to_one() {
    let p = client_to_canvas(
        Vec2::new(30.0, 40.0),
        Vec2::new(10.0, 10.0),
        Vec2::ZERO,
        Vec2::new(800.0, 400.0),
    );
    assert_eq!(p, Vec2::new(20.0, 30.0));
}
