//! Thin web-sys helpers for attaching behavior to server-rendered markup.
//!
//! Every lookup returns `Option` so a page that lacks a component's host
//! element simply skips that component.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DocumentReadyState, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_ref::<HtmlElement>().cloned()
}

pub fn query(selector: &str) -> Option<Element> {
    found(selector, document()?.query_selector(selector))
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    found(selector, root.query_selector(selector))
}

/// A rejected selector is a markup bug, not a missing component.
fn found(selector: &str, lookup: Result<Option<Element>, JsValue>) -> Option<Element> {
    match lookup {
        Ok(el) => el,
        Err(e) => {
            log::debug!("selector {selector:?} rejected: {e:?}");
            None
        }
    }
}

/// All elements matching `selector` under `root` (or the whole document).
pub fn query_all(root: Option<&Element>, selector: &str) -> Vec<Element> {
    let list = match root {
        Some(root) => root.query_selector_all(selector),
        None => match document() {
            Some(doc) => doc.query_selector_all(selector),
            None => return Vec::new(),
        },
    };
    let list = match list {
        Ok(list) => list,
        Err(e) => {
            log::debug!("selector {selector:?} rejected: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()).is_ok() {
        cb.forget();
    }
}

/// Run `f` once the document is parsed.
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() != DocumentReadyState::Loading {
        f();
        return;
    }
    let cb = Closure::once(move |_: Event| f());
    if doc
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::warn!("navigation to {href} failed: {e:?}");
        }
    }
}
