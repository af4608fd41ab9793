//! Pony silhouette loading. The SVG is decoded once; the pending promise is
//! cached so concurrent rebuilds share a single decode.

use crate::constants::PONY_OUTLINE_SVG;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn svg_data_url(svg: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(svg).into();
    format!("data:image/svg+xml;charset=utf-8,{}", encoded)
}

/// Promise resolving to the decoded `HtmlImageElement`, or `null` when it
/// cannot be decoded. It never rejects.
fn decode_image(src: String) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject: js_sys::Function| {
        let image = match web::HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                log::debug!("cannot create image element: {:?}", e);
                let _ = resolve.call1(&JsValue::NULL, &JsValue::NULL);
                return;
            }
        };
        let resolve_ok = resolve.clone();
        let loaded = image.clone();
        let on_load = Closure::once_into_js(move || {
            let _ = resolve_ok.call1(&JsValue::NULL, &loaded);
        });
        let on_error = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::NULL);
        });
        image.set_onload(Some(on_load.unchecked_ref()));
        image.set_onerror(Some(on_error.unchecked_ref()));
        image.set_src(&src);
    })
}

/// Lazily started, cached pony image decode.
#[derive(Default)]
pub struct PonyImage {
    pending: Option<js_sys::Promise>,
    resolved: Option<Option<web::HtmlImageElement>>,
}

impl PonyImage {
    /// The decoded image if the decode already finished. The inner `None`
    /// means decoding failed.
    pub fn resolved(&self) -> Option<Option<&web::HtmlImageElement>> {
        self.resolved.as_ref().map(Option::as_ref)
    }

    /// Start the decode on first use and hand out the shared promise.
    pub fn promise(&mut self) -> js_sys::Promise {
        self.pending
            .get_or_insert_with(|| decode_image(svg_data_url(PONY_OUTLINE_SVG)))
            .clone()
    }

    pub fn store(&mut self, image: Option<web::HtmlImageElement>) {
        if image.is_none() {
            log::debug!("pony image failed to decode, text targets will be used");
        }
        self.resolved = Some(image);
    }
}

/// Wait for a decode started by [`PonyImage::promise`].
pub async fn await_image(promise: js_sys::Promise) -> Option<web::HtmlImageElement> {
    match JsFuture::from(promise).await {
        Ok(value) => value.dyn_into::<web::HtmlImageElement>().ok(),
        Err(e) => {
            log::debug!("pony image promise rejected: {:?}", e);
            None
        }
    }
}
