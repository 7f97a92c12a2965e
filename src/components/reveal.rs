//! Scroll reveal for `.reveal` elements via `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::reveal::{RevealPlan, RevealTracker, TARGET_SELECTOR, VISIBLE_CLASS};
use crate::util::dom;

fn observer_supported() -> bool {
    web_sys::window().is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
}

fn reveal(el: &Element) {
    if let Err(e) = el.class_list().add_1(VISIBLE_CLASS) {
        log::debug!("reveal class not added: {e:?}");
    }
}

pub fn mount(threshold: f64) {
    let targets = dom::query_all(None, TARGET_SELECTOR);
    match RevealPlan::choose(observer_supported(), targets.len(), threshold) {
        RevealPlan::Nothing => {}
        RevealPlan::RevealAll => targets.iter().for_each(reveal),
        RevealPlan::Observe { threshold } => {
            if let Err(e) = observe(targets.clone(), threshold) {
                log::warn!("reveal observer failed, showing everything: {e:?}");
                targets.iter().for_each(reveal);
            }
        }
    }
}

fn observe(targets: Vec<Element>, threshold: f64) -> Result<(), JsValue> {
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let targets = Rc::new(targets);

    let cb_targets = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = cb_targets.iter().position(|t| *t == target) else {
                    continue;
                };
                if tracker.borrow_mut().report(index, entry.is_intersecting()) {
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in targets.iter() {
        observer.observe(target);
    }
    Ok(())
}
