use serde::{Deserialize, Serialize};

use crate::domain::a002_spare_part::QuoteTarget;
use crate::shared::error::ValidationErrors;
use crate::usecases::common::{FormKind, IntakeForm};
use crate::shared::validation::{check_email, check_name, check_phone};

/// Quote request payload. `product` is pre-filled from the card that
/// opened the modal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub product: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub quantity: String,
    pub details: String,
}

impl QuoteRequest {
    pub fn for_product(target: &QuoteTarget) -> Self {
        Self {
            product: target.product_name.clone(),
            ..Self::default()
        }
    }

    /// Rules run in order name, email, phone.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_name(&self.name, &mut errors);
        check_email(&self.email, &mut errors);
        check_phone(&self.phone, &mut errors);
        errors.into_result()
    }
}

impl IntakeForm for QuoteRequest {
    const KIND: FormKind = FormKind::Quote;

    fn validate(&self) -> Result<(), ValidationErrors> {
        QuoteRequest::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{EMAIL_MESSAGE, NAME_MESSAGE, PHONE_MESSAGE};

    #[test]
    fn test_prefill_from_target() {
        let target = QuoteTarget {
            product_id: "drive-shaft".into(),
            product_name: "Drive Shaft".into(),
        };
        let request = QuoteRequest::for_product(&target);
        assert_eq!(request.product, "Drive Shaft");
        assert!(request.name.is_empty());
    }

    #[test]
    fn test_quote_has_no_message_rule() {
        let request = QuoteRequest {
            name: "Ravi".into(),
            email: "ravi@plant.co".into(),
            ..QuoteRequest::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_errors_in_rule_order() {
        let request = QuoteRequest {
            name: "".into(),
            email: "ravi@plant".into(),
            phone: "123".into(),
            ..QuoteRequest::default()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.messages,
            vec![
                NAME_MESSAGE.to_string(),
                EMAIL_MESSAGE.to_string(),
                PHONE_MESSAGE.to_string()
            ]
        );
    }
}
