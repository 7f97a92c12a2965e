//! Registration form wiring: draft restore/autosave, live field validation,
//! and the submit handler.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config::SiteConfig;
use crate::state::registration::{
    self, Field, FieldState, MESSAGE_CLASS, RegistrationForm, RegistrationInput, RestoreOutcome, SubmitOutcome,
};
use crate::util::dom;
use crate::util::storage::KeyValueStore;

pub const FORM_SELECTOR: &str = ".register-form";
pub const STATUS_ID: &str = "draft-status";

/// One of the form's value-carrying controls.
#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn from_element(el: Element) -> Option<Self> {
        let el = match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::Select(select)),
            Err(el) => el,
        };
        el.dyn_ref::<HtmlTextAreaElement>().cloned().map(Self::TextArea)
    }

    fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => el,
            Self::Select(el) => el,
            Self::TextArea(el) => el,
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::Select(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
        }
    }

    /// Event that signals a committed edit for live validation.
    fn edit_event(&self) -> &'static str {
        match self {
            Self::Select(_) => "change",
            Self::Input(_) | Self::TextArea(_) => "input",
        }
    }
}

/// The five fields that are actually present on the page.
#[derive(Clone)]
struct Controls {
    fields: Vec<(Field, Control)>,
}

impl Controls {
    fn find() -> Self {
        let fields = Field::ALL
            .into_iter()
            .filter_map(|f| Some((f, Control::from_element(dom::element_by_id(f.element_id())?)?)))
            .collect();
        Self { fields }
    }

    fn present(&self) -> Vec<Field> {
        self.fields.iter().map(|(f, _)| *f).collect()
    }

    fn get(&self, field: Field) -> Option<&Control> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, c)| c)
    }

    fn read(&self) -> RegistrationInput {
        let mut input = RegistrationInput::default();
        for (field, control) in &self.fields {
            input.set(*field, control.value());
        }
        input
    }

    fn write(&self, input: &RegistrationInput) {
        for (field, control) in &self.fields {
            if field.persisted() {
                control.set_value(input.value(*field));
            }
        }
    }
}

/// Paint `state` onto `el`: clear both marker classes and any inline
/// message, then apply what `registration::present` asks for.
fn render_field(el: &HtmlElement, state: &FieldState) {
    let classes = el.class_list();
    if let Err(e) = classes.remove_2(registration::ERROR_CLASS, registration::SUCCESS_CLASS) {
        log::debug!("field classes not cleared: {e:?}");
    }
    if let Some(next) = el.next_element_sibling() {
        if next.class_list().contains(MESSAGE_CLASS) {
            next.remove();
        }
    }

    let presentation = registration::present(state);
    if let Some(class) = presentation.class {
        if let Err(e) = classes.add_1(class) {
            log::debug!("field class {class} not added: {e:?}");
        }
    }
    if let Some(message) = presentation.message {
        let Some(doc) = dom::document() else {
            return;
        };
        let inserted = doc.create_element("div").and_then(|msg| {
            msg.set_class_name(MESSAGE_CLASS);
            dom::set_text(&msg, message);
            el.insert_adjacent_element("afterend", &msg)
        });
        if let Err(e) = inserted {
            log::debug!("field message not shown: {e:?}");
        }
    }
}

pub fn mount(store: Rc<dyn KeyValueStore>, config: &SiteConfig) {
    let Some(form) = dom::query(FORM_SELECTOR).and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned()) else {
        log::debug!("registration form not present");
        return;
    };
    let controls = Controls::find();
    let status_line = dom::element_by_id(STATUS_ID);
    let draft_key: Rc<str> = Rc::from(config.draft_key.as_str());
    let redirect: Rc<str> = Rc::from(config.success_redirect.as_str());

    let set_status = move |text: &str| {
        if let Some(line) = &status_line {
            dom::set_text(line, text);
        }
    };

    // Restore
    {
        let form_model = RegistrationForm::new(store.as_ref(), &draft_key, &redirect);
        let mut input = controls.read();
        if let RestoreOutcome::Restored { status } = form_model.restore(&mut input) {
            controls.write(&input);
            set_status(status);
        }
    }

    // Autosave + live validation
    for (field, control) in &controls.fields {
        let field = *field;
        let el = control.element().clone();

        for event in ["input", "change"] {
            let store = Rc::clone(&store);
            let controls = controls.clone();
            let draft_key = Rc::clone(&draft_key);
            let redirect = Rc::clone(&redirect);
            let set_status = set_status.clone();
            dom::listen(&el, event, move |_| {
                let form_model = RegistrationForm::new(store.as_ref(), &draft_key, &redirect);
                match form_model.autosave(&controls.read()) {
                    Ok(text) => set_status(text),
                    Err(e) => log::debug!("draft not saved: {e}"),
                }
            });
        }

        for event in [control.edit_event(), "blur"] {
            let controls = controls.clone();
            let target = el.clone();
            dom::listen(&el, event, move |_| {
                render_field(&target, &field.validate(&controls.read()));
            });
        }
    }

    // Submit
    let target = form.clone();
    dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let input = controls.read();
        let form_model = RegistrationForm::new(store.as_ref(), &draft_key, &redirect);
        match form_model.submit_fields(&input, &controls.present()) {
            SubmitOutcome::Rejected { report, focus } => {
                for (field, state) in &report.states {
                    if let Some(control) = controls.get(*field) {
                        render_field(control.element(), state);
                    }
                }
                if let Some(control) = controls.get(focus) {
                    if let Err(e) = control.element().focus() {
                        log::debug!("focus on {} failed: {e:?}", focus.element_id());
                    }
                }
            }
            SubmitOutcome::Accepted { redirect_to, status } => {
                target.reset();
                for (_, control) in &controls.fields {
                    render_field(control.element(), &FieldState::Neutral);
                }
                set_status(status);
                dom::navigate(&redirect_to);
            }
        }
    });
}
