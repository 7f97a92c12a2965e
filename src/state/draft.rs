//! Registration draft persisted between visits.
//!
//! The wire shape is a flat JSON object with camelCase keys
//! (`fullName`, `email`, `interest`, `reason`). Password never appears here.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::state::registration::RegistrationInput;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const SAVED_STATUS: &str = "Your progress is saved automatically on this device.";
pub const RESTORED_STATUS: &str = "Draft restored from previous session on this device.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub full_name: String,
    pub email: String,
    pub interest: String,
    pub reason: String,
}

impl Draft {
    /// Snapshot the persistable part of the form.
    pub fn from_input(input: &RegistrationInput) -> Self {
        Self {
            full_name: input.full_name.clone(),
            email: input.email.clone(),
            interest: input.interest.clone(),
            reason: input.reason.clone(),
        }
    }

    /// Copy non-empty draft values into `input`. Empty values leave the
    /// field as it was, and the password is never touched.
    pub fn apply_to(&self, input: &mut RegistrationInput) {
        let pairs = [
            (&self.full_name, &mut input.full_name),
            (&self.email, &mut input.email),
            (&self.interest, &mut input.interest),
            (&self.reason, &mut input.reason),
        ];
        for (stored, field) in pairs {
            if !stored.is_empty() {
                field.clone_from(stored);
            }
        }
    }
}

pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<Option<Draft>, SiteError> {
    load_json(store, key)
}

pub fn save(store: &dyn KeyValueStore, key: &str, draft: &Draft) -> Result<(), SiteError> {
    save_json(store, key, draft)
}

pub fn clear(store: &dyn KeyValueStore, key: &str) -> Result<(), SiteError> {
    store.remove(key)
}
