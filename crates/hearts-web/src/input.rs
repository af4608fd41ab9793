use glam::Vec2;
use web_sys as web;

/// Map a client-space point into the canvas backing store.
///
/// The canvas is drawn at `rect_size` CSS pixels starting at `rect_origin`;
/// its backing store is `canvas_size` device pixels. A collapsed rect maps
/// one to one.
#[inline]
pub fn client_to_canvas(client: Vec2, rect_origin: Vec2, rect_size: Vec2, canvas_size: Vec2) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return local;
    }
    local * (canvas_size / rect_size)
}

#[inline]
pub fn client_canvas_px(client_x: i32, client_y: i32, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_canvas_px(ev.client_x(), ev.client_y(), canvas)
}

/// Position of the first active touch, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(client_canvas_px(touch.client_x(), touch.client_y(), canvas))
}
