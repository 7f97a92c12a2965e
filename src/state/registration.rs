//! Registration form model: field rules, per-field presentation state,
//! draft autosave and the submit decision.
//!
//! DESIGN
//! ======
//! Everything the browser glue needs to decide is computed here from plain
//! strings. The glue only reads values out of the DOM, calls into this
//! module, and paints the returned `FieldState`s.
//!
//! Each validator replaces only its own field's state, so live validation
//! and submit share one code path and a field is never left with both the
//! error and success markers.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SiteError;
use crate::state::draft::{self, Draft};
use crate::util::storage::KeyValueStore;

pub const SUCCESS_STATUS: &str = "Registration successful! Redirecting to About page...";

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 25;
const PASSWORD_MIN: usize = 8;
const REASON_MIN: usize = 10;
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
    Interest,
    Reason,
}

impl Field {
    /// Form order; the first failing field in this order receives focus.
    pub const ALL: [Field; 5] = [Field::FullName, Field::Email, Field::Password, Field::Interest, Field::Reason];

    pub fn element_id(self) -> &'static str {
        match self {
            Self::FullName => "fullname",
            Self::Email => "email",
            Self::Password => "password",
            Self::Interest => "interest",
            Self::Reason => "reason",
        }
    }

    /// Whether the field's value belongs in the saved draft.
    pub fn persisted(self) -> bool {
        self != Self::Password
    }

    pub fn validate(self, input: &RegistrationInput) -> FieldState {
        match self {
            Self::FullName => validate_full_name(&input.full_name),
            Self::Email => validate_email(&input.email),
            Self::Password => validate_password(&input.password),
            Self::Interest => validate_interest(&input.interest),
            Self::Reason => validate_reason(&input.reason),
        }
    }
}

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub interest: String,
    pub reason: String,
}

impl RegistrationInput {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Interest => &self.interest,
            Field::Reason => &self.reason,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Interest => self.interest = value,
            Field::Reason => self.reason = value,
        }
    }
}

/// Presentation state of one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Neutral,
    Error(&'static str),
    Success,
}

impl FieldState {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// What the DOM should show for a field: at most one marker class and an
/// optional inline message placed right after the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldPresentation {
    pub class: Option<&'static str>,
    pub message: Option<&'static str>,
}

pub const ERROR_CLASS: &str = "input-error";
pub const SUCCESS_CLASS: &str = "input-success";
pub const MESSAGE_CLASS: &str = "error-message";

pub fn present(state: &FieldState) -> FieldPresentation {
    match state {
        FieldState::Neutral => FieldPresentation { class: None, message: None },
        FieldState::Error(message) => FieldPresentation { class: Some(ERROR_CLASS), message: Some(*message) },
        FieldState::Success => FieldPresentation { class: Some(SUCCESS_CLASS), message: None },
    }
}

pub fn validate_full_name(raw: &str) -> FieldState {
    let value = raw.trim();
    if value.is_empty() {
        return FieldState::Error("Name is required.");
    }
    if !(NAME_MIN..=NAME_MAX).contains(&value.chars().count()) {
        return FieldState::Error("Name must be between 3 and 25 characters.");
    }
    if !NAME_RE.is_match(value) {
        return FieldState::Error("Name should contain only letters and spaces.");
    }
    FieldState::Success
}

pub fn validate_email(raw: &str) -> FieldState {
    let value = raw.trim();
    if value.is_empty() {
        return FieldState::Error("Email is required.");
    }
    if !EMAIL_RE.is_match(value) {
        return FieldState::Error("Please enter a valid email (example@domain.com).");
    }
    FieldState::Success
}

/// Password is checked untrimmed; whitespace is simply not an allowed char.
pub fn validate_password(raw: &str) -> FieldState {
    if raw.trim().is_empty() {
        return FieldState::Error("Password is required.");
    }
    if !is_password_secure(raw) {
        return FieldState::Error(
            "Password must be at least 8 characters with 1 lowercase, 1 uppercase, 1 number, and 1 special character.",
        );
    }
    FieldState::Success
}

fn is_password_secure(pass: &str) -> bool {
    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);
    pass.chars().count() >= PASSWORD_MIN
        && pass.chars().all(|c| c.is_ascii_alphanumeric() || is_special(c))
        && pass.chars().any(|c| c.is_ascii_lowercase())
        && pass.chars().any(|c| c.is_ascii_uppercase())
        && pass.chars().any(|c| c.is_ascii_digit())
        && pass.chars().any(is_special)
}

pub fn validate_interest(raw: &str) -> FieldState {
    if raw.trim().is_empty() {
        return FieldState::Error("Please choose your focus area.");
    }
    FieldState::Success
}

/// Optional field: empty clears back to neutral.
pub fn validate_reason(raw: &str) -> FieldState {
    let value = raw.trim();
    if value.is_empty() {
        return FieldState::Neutral;
    }
    if value.chars().count() < REASON_MIN {
        return FieldState::Error("Please write at least 10 characters or leave it empty.");
    }
    FieldState::Success
}

/// Result of validating every field at once, in form order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub states: Vec<(Field, FieldState)>,
}

impl ValidationReport {
    pub fn of(input: &RegistrationInput) -> Self {
        Self::of_fields(input, &Field::ALL)
    }

    /// Validate only `fields`, keeping form order. Used when a page omits
    /// some controls.
    pub fn of_fields(input: &RegistrationInput, fields: &[Field]) -> Self {
        let states = Field::ALL
            .into_iter()
            .filter(|f| fields.contains(f))
            .map(|f| (f, f.validate(input)))
            .collect();
        Self { states }
    }

    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }

    pub fn first_invalid(&self) -> Option<Field> {
        self.states.iter().find(|(_, s)| s.is_error()).map(|(f, _)| *f)
    }

    pub fn state(&self, field: Field) -> &FieldState {
        self.states
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(&FieldState::Neutral, |(_, s)| s)
    }
}

/// Outcome of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft cleared; the page should reset the form and open `redirect_to`.
    Accepted { redirect_to: String, status: &'static str },
    /// Stay on the page and focus `focus`.
    Rejected { report: ValidationReport, focus: Field },
}

/// Outcome of restoring a draft at page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored { status: &'static str },
    Empty,
    /// Stored draft could not be decoded; fields stay untouched.
    Corrupt,
}

/// Ties the form to its draft store.
pub struct RegistrationForm<'a> {
    store: &'a dyn KeyValueStore,
    draft_key: &'a str,
    redirect_to: &'a str,
}

impl<'a> RegistrationForm<'a> {
    pub fn new(store: &'a dyn KeyValueStore, draft_key: &'a str, redirect_to: &'a str) -> Self {
        Self { store, draft_key, redirect_to }
    }

    /// Populate `input` from a stored draft, if any.
    pub fn restore(&self, input: &mut RegistrationInput) -> RestoreOutcome {
        match draft::load(self.store, self.draft_key) {
            Ok(Some(saved)) => {
                saved.apply_to(input);
                RestoreOutcome::Restored { status: draft::RESTORED_STATUS }
            }
            Ok(None) => RestoreOutcome::Empty,
            Err(SiteError::Draft(e)) => {
                log::warn!("could not parse stored draft: {e}");
                RestoreOutcome::Corrupt
            }
            Err(e) => {
                log::debug!("draft restore skipped: {e}");
                RestoreOutcome::Empty
            }
        }
    }

    /// Persist the current values (minus password). Returns the status line.
    pub fn autosave(&self, input: &RegistrationInput) -> Result<&'static str, SiteError> {
        draft::save(self.store, self.draft_key, &Draft::from_input(input))?;
        Ok(draft::SAVED_STATUS)
    }

    pub fn submit(&self, input: &RegistrationInput) -> SubmitOutcome {
        self.submit_fields(input, &Field::ALL)
    }

    /// Submit considering only the controls present on the page.
    pub fn submit_fields(&self, input: &RegistrationInput, fields: &[Field]) -> SubmitOutcome {
        let report = ValidationReport::of_fields(input, fields);
        if let Some(focus) = report.first_invalid() {
            return SubmitOutcome::Rejected { report, focus };
        }
        if let Err(e) = draft::clear(self.store, self.draft_key) {
            log::debug!("draft clear failed: {e}");
        }
        SubmitOutcome::Accepted { redirect_to: self.redirect_to.to_owned(), status: SUCCESS_STATUS }
    }
}
