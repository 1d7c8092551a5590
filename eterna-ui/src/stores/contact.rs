//! Contact form state store

use dioxus::prelude::*;
use eterna_common::{ContactField, ContactForm, FieldErrors, SubmitStatus};

/// State for the contact section
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ContactState {
    /// Values as typed
    pub form: ContactForm,
    /// Inline validation messages from the last submit attempt
    pub errors: FieldErrors,
    /// Submit cycle of the current or last request
    pub status: SubmitStatus,
}

impl ContactState {
    /// Apply an edit to one field, clearing only that field's error
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.form.set(field, value, &mut self.errors);
    }

    /// Back to a blank form after a successful send, keeping the status
    pub fn reset_form(&mut self) {
        self.form = ContactForm::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_clears_only_the_edited_field() {
        let mut state = ContactState::default();
        state.errors = state.form.validate();
        assert_eq!(state.errors.len(), 5);

        state.edit(ContactField::Email, "a@b.co".to_string());

        assert!(!state.errors.contains_key(&ContactField::Email));
        assert_eq!(state.errors.len(), 4);
        assert_eq!(state.form.email, "a@b.co");
    }

    #[test]
    fn reset_keeps_the_success_message() {
        let mut state = ContactState::default();
        state.edit(ContactField::Name, "Ada".to_string());
        state.status = SubmitStatus::success("Penthouse");

        state.reset_form();

        assert_eq!(state.form, ContactForm::default());
        assert!(matches!(state.status, SubmitStatus::Success(_)));
    }
}
