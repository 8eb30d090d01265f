use serde::{Deserialize, Serialize};

use crate::shared::error::ValidationErrors;
use crate::usecases::common::{FormKind, IntakeForm};
use crate::shared::validation::{check_email, check_message, check_name, check_phone};

/// Contact form payload, one field per form control.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactRequest {
    /// Rules run in order name, email, message, phone.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_name(&self.name, &mut errors);
        check_email(&self.email, &mut errors);
        check_message(&self.message, &mut errors);
        check_phone(&self.phone, &mut errors);
        errors.into_result()
    }
}

impl IntakeForm for ContactRequest {
    const KIND: FormKind = FormKind::Contact;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ContactRequest::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{MESSAGE_MESSAGE, NAME_MESSAGE};

    fn valid() -> ContactRequest {
        ContactRequest {
            name: "Asha Patil".into(),
            email: "asha@example.com".into(),
            phone: "+91 98220-12345".into(),
            company: "Patil Plastics".into(),
            message: "Need a replacement screw barrel for a 150T machine.".into(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_short_name_and_message_in_order() {
        let request = ContactRequest {
            name: "A".into(),
            message: "Hello".into(),
            ..valid()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.messages,
            vec![NAME_MESSAGE.to_string(), MESSAGE_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = ContactRequest::default().validate().unwrap_err();
        // phone is optional, so three of the four rules fire
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_payload_serializes_as_flat_mapping() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["email"], "asha@example.com");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
