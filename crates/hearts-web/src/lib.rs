#![cfg(target_arch = "wasm32")]
use hearts_core::Mode;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod fullscreen;
mod image;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web::console::warn_1(&"hearts-web: logger already installed".into());
    }
    log::info!("hearts-web {} starting", env!("CARGO_PKG_VERSION"));

    match init() {
        Ok(()) => log::info!("hearts-web ready"),
        Err(e) => log::error!("hearts-web init failed: {:#}", e),
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = dom::scene_config_from_canvas(&canvas);
    log::info!(
        "[scene] greeting={:?} glyphs=({:?}, {:?}) seed={:?}",
        config.greeting,
        config.text_glyph,
        config.pony_glyph,
        config.seed
    );

    let surface = canvas::CanvasSurface::new(canvas.clone())?;
    let raster = canvas::OffscreenRaster::new(&document)?;
    let app = Rc::new(RefCell::new(app::App::new(canvas, surface, raster, config)));

    {
        let mut a = app.borrow_mut();
        a.apply_layout();
        // Browsers may restore the checkbox state on reload.
        let pony = dom::checkbox_checked(&document, constants::PONY_TOGGLE_ID);
        a.set_mode(Mode::from_pony_flag(pony));
    }
    app::request_rebuild(&app, true, None);

    events::wire_pointer_handlers(&app);
    events::wire_controls(&document, &app);
    events::wire_window_handlers(&window, &app);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app)));
    frame::start_loop(frame_ctx);
    Ok(())
}
