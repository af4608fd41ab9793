use crate::app::{self, App};
use crate::constants::*;
use crate::dom;
use crate::fullscreen;
use crate::input;
use hearts_core::{
    Mode, CLICK_STRENGTH, MODE_SWITCH_RIPPLE_MAGNITUDE, MOVE_STRENGTH, PULSE_RIPPLE_MAGNITUDE,
    TAP_RIPPLE_MAGNITUDE, TOUCH_MOVE_STRENGTH, TOUCH_START_STRENGTH,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

fn passive_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

fn listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Click handler on the element with `element_id`; pages may omit any button.
fn on_click(document: &web::Document, element_id: &str, mut handler: impl FnMut() + 'static) {
    match document.get_element_by_id(element_id) {
        Some(el) => listener(&el, "click", move |_ev: web::MouseEvent| handler()),
        None => log::debug!("no #{} on this page", element_id),
    }
}

/// Mouse and touch input on the canvas: pointer force, plus a ripple on
/// click and touch start.
pub fn wire_pointer_handlers(app: &Rc<RefCell<App>>) {
    let canvas = app.borrow().canvas.clone();

    {
        let app = app.clone();
        let canvas_m = canvas.clone();
        listener(&canvas, "mousemove", move |ev: web::MouseEvent| {
            let pos = input::mouse_canvas_px(&ev, &canvas_m);
            app.borrow_mut().sim.apply_pointer(pos, MOVE_STRENGTH);
        });
    }

    {
        let app = app.clone();
        let canvas_c = canvas.clone();
        listener(&canvas, "click", move |ev: web::MouseEvent| {
            let pos = input::mouse_canvas_px(&ev, &canvas_c);
            let mut a = app.borrow_mut();
            a.sim.apply_pointer(pos, CLICK_STRENGTH);
            a.sim.add_ripple(pos, TAP_RIPPLE_MAGNITUDE);
        });
    }

    {
        let app = app.clone();
        let canvas_t = canvas.clone();
        passive_listener(&canvas, "touchmove", move |ev: web::TouchEvent| {
            if let Some(pos) = input::touch_canvas_px(&ev, &canvas_t) {
                app.borrow_mut().sim.apply_pointer(pos, TOUCH_MOVE_STRENGTH);
            }
        });
    }

    {
        let app = app.clone();
        let canvas_t = canvas.clone();
        passive_listener(&canvas, "touchstart", move |ev: web::TouchEvent| {
            if let Some(pos) = input::touch_canvas_px(&ev, &canvas_t) {
                let mut a = app.borrow_mut();
                a.sim.apply_pointer(pos, TOUCH_START_STRENGTH);
                a.sim.add_ripple(pos, TAP_RIPPLE_MAGNITUDE);
            }
        });
    }
}

/// Page controls: pony toggle, pulse button, fullscreen button.
pub fn wire_controls(document: &web::Document, app: &Rc<RefCell<App>>) {
    if let Some(toggle) = document.get_element_by_id(PONY_TOGGLE_ID) {
        let app = app.clone();
        listener(&toggle, "change", move |ev: web::Event| {
            let pony = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
                .map(|input| input.checked())
                .unwrap_or(false);
            app.borrow_mut().set_mode(Mode::from_pony_flag(pony));
            app::request_rebuild(&app, true, Some(MODE_SWITCH_RIPPLE_MAGNITUDE));
        });
    }

    {
        let app = app.clone();
        on_click(document, PULSE_BUTTON_ID, move || {
            app.borrow_mut().sim.add_center_ripple(PULSE_RIPPLE_MAGNITUDE);
        });
    }

    {
        let app = app.clone();
        let doc = document.clone();
        on_click(document, FULLSCREEN_BUTTON_ID, move || {
            fullscreen::toggle(&doc);
            let app = app.clone();
            dom::set_timeout(FULLSCREEN_SETTLE_MS, move || app::relayout(&app));
        });
    }

    {
        let app = app.clone();
        listener(document, "fullscreenchange", move |_ev: web::Event| {
            app::relayout(&app);
        });
    }
}

/// Window resize (debounced) and orientation change (settled).
pub fn wire_window_handlers(window: &web::Window, app: &Rc<RefCell<App>>) {
    {
        let app = app.clone();
        let debounce = dom::Debouncer::new(RESIZE_DEBOUNCE_MS);
        listener(window, "resize", move |_ev: web::Event| {
            let app = app.clone();
            debounce.schedule(move || app::relayout(&app));
        });
    }

    {
        let app = app.clone();
        listener(window, "orientationchange", move |_ev: web::Event| {
            let app = app.clone();
            dom::set_timeout(ORIENTATION_SETTLE_MS, move || app::relayout(&app));
        });
    }
}
