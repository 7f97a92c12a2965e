//! Browser-independent state for each page component.
//!
//! DESIGN
//! ======
//! State is split by component (`theme`, `reveal`, `assistant`,
//! `registration`, `news`) so every rule can be tested natively. DOM wiring
//! lives in `components` and only calls into these modules.

pub mod assistant;
pub mod draft;
pub mod news;
pub mod registration;
pub mod reveal;
pub mod theme;
