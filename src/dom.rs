// Small web-sys helpers shared by the two browser adapters.
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, window};

pub(crate) fn document() -> Result<Document, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    win.document().ok_or_else(|| JsValue::from_str("no document"))
}

pub(crate) fn html_by_id(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Create `<tag class=..>` with optional text content.
pub(crate) fn make(doc: &Document, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(t) = text {
        el.set_text_content(Some(t));
    }
    Ok(el)
}

/// Attach a listener for the lifetime of the page.
pub(crate) fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds.
pub(crate) fn after_ms<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(f);
    if let Some(win) = window() {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms as i32);
    }
}
