//! # roboticshub
//!
//! WASM interactivity for the RoboticsHub static site: theme toggle, scroll
//! reveal, canned-reply assistant, registration form with draft autosave,
//! and a simulated live news feed.
//!
//! Browser wiring is compiled only with the `csr` feature. Everything under
//! `state`, `config` and `util::storage` is plain Rust and tested natively.

pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    util::dom::on_ready(mount_all);
}

/// Wire every component present on the current page.
#[cfg(feature = "csr")]
fn mount_all() {
    use std::rc::Rc;

    use crate::config::SiteConfig;
    use crate::state::news::{DelayedNewsSource, sample_items};
    use crate::util::storage::{KeyValueStore, LocalStore, MemoryStore};

    let (config, rejected) = SiteConfig::from_document();
    if console_log::init_with_level(config.log_level).is_err() {
        log::debug!("console logger already installed");
    }
    for e in rejected {
        log::warn!("{e}; using default");
    }

    let store: Rc<dyn KeyValueStore> = match LocalStore::open() {
        Ok(local) => Rc::new(local),
        Err(e) => {
            log::debug!("{e}; preferences last for this page view only");
            Rc::new(MemoryStore::new())
        }
    };

    components::theme_toggle::mount(Rc::clone(&store), config.theme_key.clone());
    components::reveal::mount(config.reveal_threshold);
    components::assistant::mount();
    components::registration::mount(Rc::clone(&store), &config);
    components::live_news::mount(Rc::new(DelayedNewsSource {
        items: sample_items(),
        delay_ms: config.feed_delay_ms,
    }));

    log::info!("roboticshub components mounted");
}
