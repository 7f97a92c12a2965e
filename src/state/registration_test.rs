use super::*;
use crate::util::storage::MemoryStore;

const KEY: &str = "rh-registration-draft";
const REDIRECT: &str = "about.html";

fn valid_input() -> RegistrationInput {
    RegistrationInput {
        full_name: "Grace Hopper".to_owned(),
        email: "grace@navy.mil".to_owned(),
        password: "Cobol#1959".to_owned(),
        interest: "automation".to_owned(),
        reason: String::new(),
    }
}

// =============================================================
// Full name
// =============================================================

#[test]
fn full_name_too_short_fails() {
    assert_eq!(validate_full_name("Al"), FieldState::Error("Name must be between 3 and 25 characters."));
}

#[test]
fn full_name_with_digits_fails() {
    assert_eq!(validate_full_name("R2D2 Unit"), FieldState::Error("Name should contain only letters and spaces."));
}

#[test]
fn full_name_at_minimum_length_still_rejects_digits() {
    assert_eq!(validate_full_name("R2D"), FieldState::Error("Name should contain only letters and spaces."));
    assert_eq!(validate_full_name("Bo7"), FieldState::Error("Name should contain only letters and spaces."));
}

#[test]
fn full_name_bounds_pass() {
    assert_eq!(validate_full_name("Ana"), FieldState::Success);
    assert_eq!(validate_full_name(&"a".repeat(25)), FieldState::Success);
    assert!(validate_full_name(&"a".repeat(26)).is_error());
}

#[test]
fn full_name_is_trimmed_and_required() {
    assert_eq!(validate_full_name("   "), FieldState::Error("Name is required."));
    assert_eq!(validate_full_name("  Ana  "), FieldState::Success);
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_rules() {
    assert_eq!(validate_email(""), FieldState::Error("Email is required."));
    assert!(validate_email("ab.co").is_error());
    assert!(validate_email("a@bco").is_error());
    assert!(validate_email("a b@c.io").is_error());
    assert_eq!(validate_email("a@b.co"), FieldState::Success);
    assert_eq!(validate_email(" a@b.co "), FieldState::Success);
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_requires_all_classes() {
    assert_eq!(validate_password(""), FieldState::Error("Password is required."));
    assert!(validate_password("Ab1!").is_error());
    assert!(validate_password("abcdefg1!").is_error());
    assert!(validate_password("ABCDEFG1!").is_error());
    assert!(validate_password("Abcdefgh!").is_error());
    assert!(validate_password("Abcdefgh1").is_error());
    assert_eq!(validate_password("Abcdefg1!"), FieldState::Success);
}

#[test]
fn password_rejects_characters_outside_allowed_set() {
    assert!(validate_password("Abcdef 1!").is_error());
    assert!(validate_password("Abcdef1!?").is_error());
}

// =============================================================
// Interest + reason
// =============================================================

#[test]
fn interest_requires_selection() {
    assert_eq!(validate_interest(""), FieldState::Error("Please choose your focus area."));
    assert_eq!(validate_interest("humanoids"), FieldState::Success);
}

#[test]
fn reason_is_optional_but_bounded() {
    assert_eq!(validate_reason(""), FieldState::Neutral);
    assert_eq!(validate_reason("   "), FieldState::Neutral);
    assert!(validate_reason("short").is_error());
    assert_eq!(validate_reason("long enough"), FieldState::Success);
}

#[test]
fn reason_minimum_is_ten_characters() {
    assert_eq!(
        validate_reason("ninechars"),
        FieldState::Error("Please write at least 10 characters or leave it empty.")
    );
    assert_eq!(validate_reason("tenletters"), FieldState::Success);
    assert_eq!(validate_reason("  tenletters  "), FieldState::Success);
}

// =============================================================
// Presentation
// =============================================================

#[test]
fn present_sets_at_most_one_marker() {
    assert_eq!(present(&FieldState::Neutral), FieldPresentation { class: None, message: None });
    assert_eq!(
        present(&FieldState::Error("nope")),
        FieldPresentation { class: Some(ERROR_CLASS), message: Some("nope") }
    );
    assert_eq!(present(&FieldState::Success), FieldPresentation { class: Some(SUCCESS_CLASS), message: None });
}

#[test]
fn only_password_is_not_persisted() {
    let persisted: Vec<Field> = Field::ALL.into_iter().filter(|f| f.persisted()).collect();
    assert_eq!(persisted, [Field::FullName, Field::Email, Field::Interest, Field::Reason]);
}

#[test]
fn input_set_and_value_round_trip_per_field() {
    let mut input = RegistrationInput::default();
    for field in Field::ALL {
        input.set(field, field.element_id().to_owned());
    }
    for field in Field::ALL {
        assert_eq!(input.value(field), field.element_id());
    }
}

// =============================================================
// Report
// =============================================================

#[test]
fn report_first_invalid_follows_form_order() {
    let input = RegistrationInput { email: "bad".to_owned(), interest: String::new(), ..valid_input() };
    let report = ValidationReport::of(&input);
    assert!(!report.is_valid());
    assert_eq!(report.first_invalid(), Some(Field::Email));
    assert!(report.state(Field::Interest).is_error());
    assert_eq!(report.state(Field::FullName), &FieldState::Success);
}

// =============================================================
// RegistrationForm
// =============================================================

#[test]
fn autosave_persists_draft_and_reports_status() {
    let store = MemoryStore::new();
    let form = RegistrationForm::new(&store, KEY, REDIRECT);
    let status = form.autosave(&valid_input()).unwrap();
    assert_eq!(status, draft::SAVED_STATUS);
    let raw = store.get(KEY).unwrap().unwrap();
    assert!(raw.contains("Grace Hopper"));
    assert!(!raw.contains("Cobol#1959"));
}

#[test]
fn restore_populates_fields_except_password() {
    let store = MemoryStore::new();
    let form = RegistrationForm::new(&store, KEY, REDIRECT);
    form.autosave(&valid_input()).unwrap();

    let mut fresh = RegistrationInput::default();
    assert_eq!(form.restore(&mut fresh), RestoreOutcome::Restored { status: draft::RESTORED_STATUS });
    assert_eq!(fresh.full_name, "Grace Hopper");
    assert_eq!(fresh.interest, "automation");
    assert!(fresh.password.is_empty());
}

#[test]
fn restore_without_draft_is_empty() {
    let store = MemoryStore::new();
    let form = RegistrationForm::new(&store, KEY, REDIRECT);
    let mut input = RegistrationInput::default();
    assert_eq!(form.restore(&mut input), RestoreOutcome::Empty);
    assert_eq!(input, RegistrationInput::default());
}

#[test]
fn restore_corrupt_draft_leaves_fields_untouched() {
    let store = MemoryStore::new();
    store.set(KEY, "not json").unwrap();
    let form = RegistrationForm::new(&store, KEY, REDIRECT);
    let mut input = RegistrationInput { full_name: "Typed".to_owned(), ..RegistrationInput::default() };
    assert_eq!(form.restore(&mut input), RestoreOutcome::Corrupt);
    assert_eq!(input.full_name, "Typed");
}

#[test]
fn valid_submit_clears_draft_and_redirects() {
    let store = MemoryStore::new();
    let form = RegistrationForm::new(&store, KEY, REDIRECT);
    form.autosave(&valid_input()).unwrap();

    let outcome = form.submit(&valid_input());
    assert_eq!(
        outcome,
        SubmitOutcome::Accepted { redirect_to: REDIRECT.to_owned(), status: SUCCESS_STATUS }
    );
    assert_eq!(store.get(KEY).unwrap(), None);
}

#[test]
fn invalid_submit_keeps_draft_and_focuses_first_error() {
    let store = MemoryStore::new();
    let form = RegistrationForm::new(&store, KEY, REDIRECT);
    let input = RegistrationInput { password: "weak".to_owned(), reason: "tiny".to_owned(), ..valid_input() };
    form.autosave(&input).unwrap();

    match form.submit(&input) {
        SubmitOutcome::Rejected { focus, report } => {
            assert_eq!(focus, Field::Password);
            assert!(report.state(Field::Reason).is_error());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(store.get(KEY).unwrap().is_some());
}

#[test]
fn submit_fields_ignores_controls_missing_from_page() {
    let store = MemoryStore::new();
    let form = RegistrationForm::new(&store, KEY, REDIRECT);
    let input = RegistrationInput { password: String::new(), ..valid_input() };
    let present = [Field::FullName, Field::Email, Field::Interest, Field::Reason];
    assert!(matches!(form.submit_fields(&input, &present), SubmitOutcome::Accepted { .. }));
    assert!(matches!(form.submit(&input), SubmitOutcome::Rejected { focus: Field::Password, .. }));
}

#[test]
fn report_of_fields_keeps_form_order() {
    let report = ValidationReport::of_fields(&valid_input(), &[Field::Reason, Field::FullName]);
    let fields: Vec<Field> = report.states.iter().map(|(f, _)| *f).collect();
    assert_eq!(fields, [Field::FullName, Field::Reason]);
}
