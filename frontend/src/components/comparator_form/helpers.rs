//! Browser-side helpers for the comparator form.
//!
//! - **User Feedback**: temporary "toast" notifications for confirmations.
//! - **Inline Publishing**: opening a new tab and writing a rendered document
//!   into it when the backend runs in inline mode.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlElement};

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Opens a blank tab and writes `html` into it as its document.
///
/// Fails when the window is unavailable or the browser blocked the popup.
pub fn open_document_tab(html: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let tab = window
        .open_with_url("")?
        .ok_or_else(|| JsValue::from_str("the new tab was blocked"))?;
    let document = tab
        .document()
        .ok_or_else(|| JsValue::from_str("the new tab has no document"))?;

    let document: &HtmlDocument = document.unchecked_ref();
    document.write(&Array::of1(&JsValue::from_str(html)))?;
    document.close()?;
    Ok(())
}
