//! Contact form state, validation and request payload

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Shown whenever a submission fails, whatever the cause
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Residence type the visitor is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorType {
    Penthouse,
    IntermediateFloor,
}

impl FloorType {
    pub const ALL: [FloorType; 2] = [FloorType::Penthouse, FloorType::IntermediateFloor];

    pub fn label(self) -> &'static str {
        match self {
            FloorType::Penthouse => "Penthouse",
            FloorType::IntermediateFloor => "Intermediate Floor",
        }
    }

    /// Parse a `<select>` value; the empty placeholder yields `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|floor| floor.label() == value)
    }
}

/// A form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    FloorType,
    Message,
}

/// Per-field validation messages
pub type FieldErrors = BTreeMap<ContactField, &'static str>;

/// What the visitor has typed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub floor_type: Option<FloorType>,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").unwrap())
}

impl ContactForm {
    /// Current raw value of a field, as the input should display it
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
            ContactField::FloorType => self.floor_type.map(FloorType::label).unwrap_or(""),
        }
    }

    /// Store an edited value and drop that field's error, leaving the others.
    pub fn set(&mut self, field: ContactField, value: String, errors: &mut FieldErrors) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
            ContactField::FloorType => self.floor_type = FloorType::from_label(&value),
        }
        errors.remove(&field);
    }

    /// Check every field at once. Empty map means the form can be sent.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !email_pattern().is_match(&self.email) {
            errors.insert(ContactField::Email, "Email is invalid");
        }

        if self.phone.trim().is_empty() {
            errors.insert(ContactField::Phone, "Phone is required");
        }

        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, "Message is required");
        }

        if self.floor_type.is_none() {
            errors.insert(ContactField::FloorType, "Floor type selection is required");
        }

        errors
    }

    /// Validate and build the request body.
    pub fn to_request(&self) -> Result<ContactRequest, FieldErrors> {
        let errors = self.validate();
        match self.floor_type {
            Some(floor_type) if errors.is_empty() => Ok(ContactRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                message: self.message.clone(),
                floor_type: floor_type.label().to_string(),
                subject: format!("Eterna Tower - {} Request", floor_type.label()),
            }),
            _ => Err(errors),
        }
    }
}

/// JSON body posted to the email endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(rename = "floorType")]
    pub floor_type: String,
    pub subject: String,
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success(String),
    Error(String),
}

impl SubmitStatus {
    pub fn success(floor_type: &str) -> Self {
        SubmitStatus::Success(format!(
            "Thank you for your interest! We will contact you soon about the {floor_type}."
        ))
    }

    pub fn failure() -> Self {
        SubmitStatus::Error(FAILURE_MESSAGE.to_string())
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 615 555 0100".to_string(),
            message: "Interested in a viewing".to_string(),
            floor_type: Some(FloorType::Penthouse),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.get(&ContactField::Name), Some(&"Name is required"));
        assert_eq!(errors.get(&ContactField::Email), Some(&"Email is required"));
        assert_eq!(errors.get(&ContactField::Phone), Some(&"Phone is required"));
        assert_eq!(
            errors.get(&ContactField::Message),
            Some(&"Message is required")
        );
        assert_eq!(
            errors.get(&ContactField::FloorType),
            Some(&"Floor type selection is required")
        );
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..filled()
        };
        assert_eq!(
            form.validate().get(&ContactField::Name),
            Some(&"Name is required")
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@example", "@example.com", "ada example.com"] {
            let form = ContactForm {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(
                form.validate().get(&ContactField::Email),
                Some(&"Email is invalid"),
                "{email}"
            );
        }
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut form = ContactForm::default();
        let mut errors = form.validate();
        form.set(ContactField::Phone, "555".to_string(), &mut errors);
        assert!(!errors.contains_key(&ContactField::Phone));
        assert!(errors.contains_key(&ContactField::Name));
        assert_eq!(form.phone, "555");
    }

    #[test]
    fn floor_type_round_trips_through_select_value() {
        let mut form = ContactForm::default();
        let mut errors = FieldErrors::new();
        form.set(
            ContactField::FloorType,
            "Intermediate Floor".to_string(),
            &mut errors,
        );
        assert_eq!(form.floor_type, Some(FloorType::IntermediateFloor));
        assert_eq!(form.value(ContactField::FloorType), "Intermediate Floor");
        form.set(ContactField::FloorType, String::new(), &mut errors);
        assert_eq!(form.floor_type, None);
    }

    #[test]
    fn request_carries_subject_and_camel_case_floor_type() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.subject, "Eterna Tower - Penthouse Request");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["floorType"], "Penthouse");
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["subject"], "Eterna Tower - Penthouse Request");
        assert!(json.get("floor_type").is_none());
    }

    #[test]
    fn invalid_form_has_no_request() {
        let form = ContactForm {
            message: String::new(),
            ..filled()
        };
        let errors = form.to_request().unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn success_message_names_the_floor_type() {
        assert_eq!(
            SubmitStatus::success("Intermediate Floor"),
            SubmitStatus::Success(
                "Thank you for your interest! We will contact you soon about the Intermediate Floor."
                    .to_string()
            )
        );
        assert!(SubmitStatus::Sending.is_sending());
        assert!(!SubmitStatus::failure().is_sending());
    }
}
