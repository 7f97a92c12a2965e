//! Theme toggle wiring.
//!
//! Reads the stored preference into the `#theme-toggle` checkbox and writes
//! it back on change. The active theme is mirrored as a `data-theme`
//! attribute on `<html>` so stylesheets can key off it as well as the
//! checkbox.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort; storage failures are logged at
//! debug level and the toggle keeps working for the current page view.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::state::theme::{self, Theme};
use crate::util::dom;
use crate::util::storage::KeyValueStore;

pub const TOGGLE_ID: &str = "theme-toggle";

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    if let Some(el) = dom::document().and_then(|d| d.document_element()) {
        if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
            log::debug!("data-theme not applied: {e:?}");
        }
    }
}

pub fn mount(store: Rc<dyn KeyValueStore>, key: String) {
    let Some(toggle) = dom::element_by_id(TOGGLE_ID).and_then(|el| el.dyn_ref::<HtmlInputElement>().cloned()) else {
        log::debug!("theme toggle not present");
        return;
    };

    match theme::load(store.as_ref(), &key) {
        Ok(Some(saved)) => {
            toggle.set_checked(saved.is_checked());
            apply(saved);
        }
        Ok(None) => {}
        Err(e) => log::debug!("theme preference unreadable: {e}"),
    }

    let control = toggle.clone();
    dom::listen(&toggle, "change", move |_| {
        let next = Theme::from_checked(control.checked());
        apply(next);
        if let Err(e) = theme::save(store.as_ref(), &key, next) {
            log::debug!("theme preference not saved: {e}");
        }
    });
}
