//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site ships static HTML. Each component looks up its host element,
//! silently skips when the page does not have one, and otherwise attaches
//! listeners (or mounts a small Leptos view) on top of the existing markup.
//! Components never depend on each other.

pub mod assistant;
pub mod live_news;
#[cfg(feature = "csr")]
pub mod registration;
#[cfg(feature = "csr")]
pub mod reveal;
#[cfg(feature = "csr")]
pub mod theme_toggle;
