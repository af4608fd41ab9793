use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Which way a toggle goes from the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenAction {
    Enter,
    Exit,
}

impl FullscreenAction {
    #[inline]
    pub fn toggle_from(active: bool) -> Self {
        if active {
            FullscreenAction::Exit
        } else {
            FullscreenAction::Enter
        }
    }

    /// DOM method to call: on `documentElement` to enter, on `document` to
    /// leave.
    #[inline]
    pub fn method(self) -> &'static str {
        match self {
            FullscreenAction::Enter => "requestFullscreen",
            FullscreenAction::Exit => "exitFullscreen",
        }
    }
}

#[inline]
pub fn is_active(document: &web::Document) -> bool {
    document.fullscreen_element().is_some()
}

/// Call a no-argument DOM method and swallow a rejected promise it returns.
fn call_and_ignore(target: &JsValue, method: &'static str) {
    let result = Reflect::get(target, &JsValue::from_str(method))
        .and_then(|f| f.dyn_into::<Function>())
        .and_then(|f| f.call0(target));
    let value = match result {
        Ok(value) => value,
        Err(e) => {
            log::debug!("{} failed: {:?}", method, e);
            return;
        }
    };
    // Older engines return undefined instead of a promise.
    if let Ok(promise) = value.dyn_into::<Promise>() {
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("{} refused: {:?}", method, e);
            }
        });
    }
}

/// Enter or leave fullscreen on the document root. Refusals are logged and
/// the page stays as it was.
pub fn toggle(document: &web::Document) {
    let action = FullscreenAction::toggle_from(is_active(document));
    match action {
        FullscreenAction::Exit => call_and_ignore(document.as_ref(), action.method()),
        FullscreenAction::Enter => match document.document_element() {
            Some(root) => call_and_ignore(root.as_ref(), action.method()),
            None => log::debug!("no document element to make fullscreen"),
        },
    }
}
