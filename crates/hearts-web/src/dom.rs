use crate::constants::*;
use hearts_core::{CanvasLayout, Glyph, SceneConfig, Viewport};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current checked state of a checkbox, `false` when it is missing.
pub fn checkbox_checked(document: &web::Document, element_id: &str) -> bool {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .map_err(|e| log::debug!("setTimeout failed: {:?}", e))
        .ok()
}

/// Coalesces bursts of calls: only the last call within `delay_ms` runs.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web::window()) {
            window.clear_timeout_with_handle(handle);
        }
        let pending = self.pending.clone();
        let handle = set_timeout(self.delay_ms, move || {
            pending.set(None);
            f();
        });
        self.pending.set(handle);
    }
}

pub fn read_viewport(window: &web::Window) -> Viewport {
    let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    let landscape = window
        .match_media("(orientation: landscape)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    Viewport {
        inner_width: dimension(window.inner_width()),
        inner_height: dimension(window.inner_height()),
        landscape,
        device_pixel_ratio: window.device_pixel_ratio() as f32,
    }
}

/// Size the canvas CSS box and backing store.
pub fn apply_canvas_layout(canvas: &web::HtmlCanvasElement, layout: &CanvasLayout) {
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", layout.css_width));
    let _ = style.set_property("height", &format!("{}px", layout.css_height));
    canvas.set_width(layout.pixel_width);
    canvas.set_height(layout.pixel_height);
}

/// Defaults overridden by the canvas element's `data-*` attributes.
pub fn scene_config_from_canvas(canvas: &web::HtmlCanvasElement) -> SceneConfig {
    let mut config = SceneConfig::default();
    let attr = |name: &str| {
        canvas
            .get_attribute(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    if let Some(greeting) = attr(ATTR_GREETING) {
        config.greeting = greeting;
    }
    if let Some(font) = attr(ATTR_FONT) {
        config.font_family = font;
    }
    if let Some(glyph) = attr(ATTR_GLYPH).and_then(|g| Glyph::parse(&g)) {
        config.text_glyph = glyph;
    }
    if let Some(glyph) = attr(ATTR_PONY_GLYPH).and_then(|g| Glyph::parse(&g)) {
        config.pony_glyph = glyph;
    }
    if let Some(seed) = attr(ATTR_SEED) {
        match seed.parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(e) => log::warn!("ignoring {}={:?}: {}", ATTR_SEED, seed, e),
        }
    }
    config
}
