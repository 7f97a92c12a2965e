//! Floating robot assistant.
//!
//! The panel markup ships with the page. Button clicks update an
//! `AssistantState` signal; effects push the open flag onto the host's class
//! list and keep the log scrolled to its newest message.

use leptos::prelude::*;

use crate::state::assistant::AssistantState;

pub const HOST_SELECTOR: &str = ".assistant";
pub const OPEN_CLASS: &str = "assistant-open";

/// Message list rendered into `#assistant-log`.
#[component]
pub fn AssistantLog(state: RwSignal<AssistantState>) -> impl IntoView {
    move || {
        state
            .get()
            .messages
            .into_iter()
            .map(|msg| {
                let class = format!("assistant-message {}", msg.speaker.css_class());
                view! { <div class=class>{msg.text}</div> }
            })
            .collect::<Vec<_>>()
    }
}

#[cfg(feature = "csr")]
pub fn mount() {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use crate::util::dom;

    let Some(host) = dom::query(HOST_SELECTOR) else {
        log::debug!("assistant not present");
        return;
    };
    let log_el = dom::query_in(&host, "#assistant-log");
    let toggle = dom::query_in(&host, ".assistant-toggle");
    let close = dom::query_in(&host, ".assistant-close");
    let topics = dom::query_all(Some(&host), "[data-assist]");

    // Without a log there is nothing to render into, but the panel still
    // opens and closes; mounting an empty view onto the host keeps one
    // reactive owner for both cases.
    let has_log = log_el.is_some();
    let initially_open = host.class_list().contains(OPEN_CLASS);
    let Ok(mount_point) = log_el.clone().unwrap_or_else(|| host.clone()).dyn_into::<HtmlElement>() else {
        return;
    };

    leptos::mount::mount_to(mount_point, move || {
        let state = RwSignal::new(AssistantState::starting_open(initially_open));

        Effect::new(move || {
            let open = state.with(|s| s.open);
            if let Err(e) = host.class_list().toggle_with_force(OPEN_CLASS, open) {
                log::debug!("assistant class toggle failed: {e:?}");
            }
        });

        if let Some(log_view) = log_el {
            Effect::new(move || {
                state.track();
                // Scroll on the next tick, after the list has re-rendered.
                let log_view = log_view.clone();
                Timeout::new(0, move || log_view.set_scroll_top(log_view.scroll_height())).forget();
            });
        }

        if let Some(toggle) = toggle {
            dom::listen(&toggle, "click", move |_| state.update(AssistantState::toggle));
        }
        if let Some(close) = close {
            dom::listen(&close, "click", move |_| state.update(AssistantState::close));
        }
        for button in topics {
            let topic = button.get_attribute("data-assist").unwrap_or_default();
            dom::listen(&button, "click", move |_| {
                state.update(|s| {
                    s.ask(&topic);
                });
            });
        }

        has_log.then(|| view! { <AssistantLog state/> })
    })
    .forget();
}
