// SPDX-License-Identifier: MPL-2.0
//! Contact form with local validation.
//!
//! Submitting never leaves the process: a valid form is cleared and a
//! confirmation goes through the injected [`Notifier`]. An invalid form is
//! kept as typed and the offending fields are highlighted until edited.

mod view;

pub use view::ViewContext;

use crate::ui::notifications::Notifier;

/// Translation keys of the confirmation shown after a successful submit.
pub const SENT_TITLE_KEY: &str = "contact-sent-title";
pub const SENT_MESSAGE_KEY: &str = "contact-sent-message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Company)
    }

    /// Translation key of the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact-field-name",
            Field::Email => "contact-field-email",
            Field::Company => "contact-field-company",
            Field::Message => "contact-field-message",
        }
    }

    #[must_use]
    pub fn placeholder_key(self) -> &'static str {
        match self {
            Field::Name => "contact-placeholder-name",
            Field::Email => "contact-placeholder-email",
            Field::Company => "contact-placeholder-company",
            Field::Message => "contact-placeholder-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
    ViewPortfolio,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Submitted,
    /// Fields that failed validation, in form order.
    Rejected(Vec<Field>),
    /// The user asked to see more work.
    ShowPortfolio,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    name: String,
    email: String,
    company: String,
    message: String,
    invalid: Vec<Field>,
}

impl State {
    pub fn handle(&mut self, message: Message, notifier: &mut impl Notifier) -> Effect {
        match message {
            Message::FieldChanged(field, value) => {
                self.field_changed(field, value);
                Effect::None
            }
            Message::Submit => self.submit(notifier),
            Message::ViewPortfolio => Effect::ShowPortfolio,
        }
    }

    /// Stores `value` and drops the invalid mark of that one field.
    pub fn field_changed(&mut self, field: Field, value: String) {
        *self.value_mut(field) = value;
        self.invalid.retain(|flagged| *flagged != field);
    }

    /// Validates every field; on success clears the form and notifies once.
    pub fn submit(&mut self, notifier: &mut impl Notifier) -> Effect {
        let invalid = self.validate();
        if !invalid.is_empty() {
            log::warn!("contact form rejected, invalid fields: {:?}", invalid);
            self.invalid.clone_from(&invalid);
            return Effect::Rejected(invalid);
        }

        log::debug!("contact form submitted");
        *self = Self::default();
        notifier.notify(SENT_TITLE_KEY, SENT_MESSAGE_KEY);
        Effect::Submitted
    }

    /// Fields that currently violate their constraint, in form order.
    #[must_use]
    pub fn validate(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.is_field_valid(*field))
            .collect()
    }

    fn is_field_valid(&self, field: Field) -> bool {
        let value = self.value(field);
        match field {
            Field::Name | Field::Message => !value.trim().is_empty(),
            Field::Email => is_valid_email(value),
            Field::Company => true,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        }
    }

    /// Whether `field` is highlighted from the last rejected submit.
    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    #[must_use]
    pub fn invalid_fields(&self) -> &[Field] {
        &self.invalid
    }
}

/// Accepts `local@domain.tld`: one `@`, a non-empty local part, a dot inside
/// the domain with text on both sides, and no whitespace anywhere.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingNotifier {
        sent: Vec<(String, String)>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, title_key: &str, message_key: &str) {
            self.sent.push((title_key.to_string(), message_key.to_string()));
        }
    }

    fn filled() -> State {
        let mut form = State::default();
        form.field_changed(Field::Name, "Ada".into());
        form.field_changed(Field::Email, "ada@example.com".into());
        form.field_changed(Field::Message, "Hello".into());
        form
    }

    #[test]
    fn valid_submit_clears_form_and_notifies_once() {
        let mut form = filled();
        form.field_changed(Field::Company, "Analytical Engines".into());
        let mut notifier = RecordingNotifier::default();

        let effect = form.handle(Message::Submit, &mut notifier);

        assert_eq!(effect, Effect::Submitted);
        assert_eq!(form, State::default());
        assert_eq!(
            notifier.sent,
            vec![(SENT_TITLE_KEY.to_string(), SENT_MESSAGE_KEY.to_string())]
        );
    }

    #[test]
    fn company_is_optional() {
        let mut form = filled();
        let mut notifier = RecordingNotifier::default();
        assert_eq!(form.submit(&mut notifier), Effect::Submitted);
    }

    #[test]
    fn missing_email_is_rejected_without_notification() {
        let mut form = State::default();
        form.field_changed(Field::Name, "Ada".into());
        form.field_changed(Field::Message, "Hello".into());
        let mut notifier = RecordingNotifier::default();

        let effect = form.submit(&mut notifier);

        assert_eq!(effect, Effect::Rejected(vec![Field::Email]));
        assert!(notifier.sent.is_empty());
        assert_eq!(form.value(Field::Name), "Ada");
        assert!(form.is_invalid(Field::Email));
    }

    #[test]
    fn blank_required_fields_are_all_flagged() {
        let mut form = State::default();
        form.field_changed(Field::Name, "   ".into());
        let mut notifier = RecordingNotifier::default();

        assert_eq!(
            form.submit(&mut notifier),
            Effect::Rejected(vec![Field::Name, Field::Email, Field::Message])
        );
        assert_eq!(form.value(Field::Name), "   ");
    }

    #[test]
    fn editing_clears_only_that_fields_flag() {
        let mut form = State::default();
        form.submit(&mut RecordingNotifier::default());

        form.field_changed(Field::Email, "a".into());

        assert!(!form.is_invalid(Field::Email));
        assert!(form.is_invalid(Field::Name));
        assert!(form.is_invalid(Field::Message));
    }

    #[test]
    fn view_portfolio_is_forwarded() {
        let mut form = State::default();
        assert_eq!(
            form.handle(Message::ViewPortfolio, &mut RecordingNotifier::default()),
            Effect::ShowPortfolio
        );
    }

    #[test]
    fn email_shape() {
        for valid in ["a@b.c", "hello@m3danstudio.com", "first.last@mail.example.org"] {
            assert!(is_valid_email(valid), "{valid}");
        }
        for invalid in [
            "",
            "plain",
            "@example.com",
            "a@",
            "a@example",
            "a@.com",
            "a@example.",
            "a b@example.com",
            "a@example.com ",
            "a@b@example.com",
        ] {
            assert!(!is_valid_email(invalid), "{invalid:?}");
        }
    }
}
