//! Light/dark theme preference.
//!
//! The toggle control is a checkbox: checked means light. The stored value is
//! the plain string `"light"` or `"dark"`; anything else reads as unset and
//! leaves the control as the markup rendered it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::SiteError;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme selected by the toggle's checked state.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Light } else { Self::Dark }
    }

    pub fn is_checked(self) -> bool {
        self == Self::Light
    }
}

/// Read the stored preference, `None` when unset or unrecognized.
pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<Option<Theme>, SiteError> {
    Ok(store.get(key)?.as_deref().and_then(Theme::parse))
}

pub fn save(store: &dyn KeyValueStore, key: &str, theme: Theme) -> Result<(), SiteError> {
    store.set(key, theme.as_str())
}
