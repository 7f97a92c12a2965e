//! Site configuration with page-level overrides.
//!
//! Defaults match the shipped pages. A page can override a few knobs through
//! `data-*` attributes on `<body>`:
//!
//! - `data-feed-delay-ms`: simulated feed delay, default 700
//! - `data-reveal-threshold`: visibility ratio in `[0, 1]`, default 0.16
//! - `data-success-redirect`: page opened after registration, default `about.html`
//! - `data-log-level`: `error`, `warn`, `info` (default), `debug` or `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::SiteError;

pub const DEFAULT_THEME_KEY: &str = "theme-preference";
pub const DEFAULT_DRAFT_KEY: &str = "rh-registration-draft";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.16;
pub const DEFAULT_FEED_DELAY_MS: u32 = 700;
pub const DEFAULT_SUCCESS_REDIRECT: &str = "about.html";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub theme_key: String,
    pub draft_key: String,
    pub reveal_threshold: f64,
    pub feed_delay_ms: u32,
    pub success_redirect: String,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            draft_key: DEFAULT_DRAFT_KEY.to_owned(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            feed_delay_ms: DEFAULT_FEED_DELAY_MS,
            success_redirect: DEFAULT_SUCCESS_REDIRECT.to_owned(),
            log_level: log::Level::Info,
        }
    }
}

impl SiteConfig {
    /// Build config from a key lookup (dataset attribute names without the
    /// `data-` prefix). Values that fail to parse keep their default and are
    /// returned alongside so the caller can log them once logging is up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<SiteError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(raw) = lookup("feed-delay-ms") {
            match raw.trim().parse::<u32>() {
                Ok(ms) => config.feed_delay_ms = ms,
                Err(_) => rejected.push(SiteError::InvalidConfig { key: "feed-delay-ms", value: raw }),
            }
        }

        if let Some(raw) = lookup("reveal-threshold") {
            match raw.trim().parse::<f64>() {
                Ok(t) if t.is_finite() => config.reveal_threshold = t.clamp(0.0, 1.0),
                _ => rejected.push(SiteError::InvalidConfig { key: "reveal-threshold", value: raw }),
            }
        }

        if let Some(raw) = lookup("success-redirect") {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                rejected.push(SiteError::InvalidConfig { key: "success-redirect", value: raw });
            } else {
                config.success_redirect = trimmed.to_owned();
            }
        }

        if let Some(raw) = lookup("log-level") {
            match raw.trim().parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => rejected.push(SiteError::InvalidConfig { key: "log-level", value: raw }),
            }
        }

        (config, rejected)
    }

    /// Read overrides from the `<body>` element's dataset.
    #[cfg(feature = "csr")]
    pub fn from_document() -> (Self, Vec<SiteError>) {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        match body {
            Some(body) => Self::from_lookup(|key| body.get_attribute(&format!("data-{key}"))),
            None => (Self::default(), Vec::new()),
        }
    }
}
