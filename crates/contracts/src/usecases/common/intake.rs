use super::{FormEvent, FormKind, FormPhase};
use crate::domain::a001_site_page::ViewState;
use crate::shared::error::ValidationErrors;

/// A form the site accepts: validated as a whole, then cleared.
pub trait IntakeForm: Clone + Default {
    const KIND: FormKind;

    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<F> {
    /// Every failed rule, in rule order. Nothing else changed.
    Rejected(ValidationErrors),
    /// The payload as it was entered, ready to send.
    Accepted(F),
}

/// Everything a submit leaves behind, for the browser layer to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<F> {
    pub view: ViewState,
    pub form: F,
    pub phase: FormPhase,
    pub outcome: SubmitOutcome<F>,
}

impl<F> Submission<F> {
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, SubmitOutcome::Accepted(_))
    }
}

/// Run one submit of `form` against the current view.
///
/// A rejected form keeps its fields and the view is untouched. An accepted
/// one is cleared, closes the quote modal if it came from there, and raises
/// its confirmation banner.
pub fn submit<F: IntakeForm>(view: &ViewState, form: &F, phase: FormPhase) -> Submission<F> {
    let phase = phase.next(FormEvent::Submit);

    match form.validate() {
        Err(errors) => Submission {
            view: view.clone(),
            form: form.clone(),
            phase: phase.next(FormEvent::Reject),
            outcome: SubmitOutcome::Rejected(errors),
        },
        Ok(()) => {
            let mut next = view.clone();
            if F::KIND == FormKind::Quote {
                next = next.close_quote();
            }
            Submission {
                view: next.show_confirmation(F::KIND, F::KIND.success_message()),
                form: F::default(),
                phase: phase
                    .next(FormEvent::Accept)
                    .next(FormEvent::Confirm),
                outcome: SubmitOutcome::Accepted(form.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_site_page::PageId;
    use crate::domain::a002_spare_part::{catalog, QuoteTarget};
    use crate::shared::validation::{MESSAGE_MESSAGE, NAME_MESSAGE};
    use crate::usecases::u101_contact_request::ContactRequest;
    use crate::usecases::u102_quote_request::QuoteRequest;

    fn plunger() -> QuoteTarget {
        let product = catalog()
            .iter()
            .find(|p| p.id == "plunger")
            .unwrap();
        QuoteTarget::from(product)
    }

    #[test]
    fn test_rejected_contact_form_keeps_its_fields() {
        let view = ViewState::default().with_page(PageId::Contact);
        let form = ContactRequest {
            name: "A".into(),
            email: "a@b.co".into(),
            phone: "".into(),
            company: "Acme".into(),
            message: "Hello".into(),
        };

        let result = submit(&view, &form, FormPhase::Idle);

        assert_eq!(result.form, form);
        assert_eq!(result.view, view);
        assert_eq!(result.phase, FormPhase::Rejected);
        assert_eq!(
            result.outcome,
            SubmitOutcome::Rejected(ValidationErrors {
                messages: vec![NAME_MESSAGE.to_string(), MESSAGE_MESSAGE.to_string()],
            })
        );
        assert_eq!(result.phase.next(FormEvent::Acknowledge), FormPhase::Idle);
    }

    #[test]
    fn test_accepted_contact_form_is_cleared_and_confirmed() {
        let view = ViewState::default().with_page(PageId::Contact);
        let form = ContactRequest {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            message: "Please call me about barrels.".into(),
            ..ContactRequest::default()
        };

        let result = submit(&view, &form, FormPhase::Idle);

        assert!(result.is_accepted());
        assert_eq!(result.outcome, SubmitOutcome::Accepted(form));
        assert_eq!(result.form, ContactRequest::default());
        assert!(result.view.is_confirming(FormKind::Contact));
        assert!(result.view.is_active(PageId::Contact));
        assert_eq!(result.phase, FormPhase::Confirming);
    }

    #[test]
    fn test_accepted_quote_closes_modal_and_opens_banner() {
        let target = plunger();
        let view = ViewState::default()
            .with_page(PageId::Spares)
            .open_quote(target.clone());
        let form = QuoteRequest {
            name: "Ravi".into(),
            email: "ravi@plant.co".into(),
            quantity: "4".into(),
            ..QuoteRequest::for_product(&target)
        };

        let result = submit(&view, &form, FormPhase::Idle);

        assert!(!result.view.is_quote_open());
        assert!(result.view.is_confirming(FormKind::Quote));
        assert_eq!(
            result.view.confirmation.as_ref().map(|c| c.message.as_str()),
            Some(FormKind::Quote.success_message())
        );
        assert!(result.view.scroll_locked());
        assert!(result.view.is_active(PageId::Spares));
        assert_eq!(result.form, QuoteRequest::default());
        match result.outcome {
            SubmitOutcome::Accepted(payload) => assert_eq!(payload.product, "Plunger"),
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_quote_leaves_modal_open() {
        let view = ViewState::default().open_quote(plunger());
        let form = QuoteRequest::for_product(&plunger());

        let result = submit(&view, &form, FormPhase::Idle);

        assert!(!result.is_accepted());
        assert!(result.view.is_quote_open());
        assert!(!result.view.is_confirmation_open());
        assert_eq!(result.form.product, "Plunger");
    }

    #[test]
    fn test_resubmit_while_confirming_replaces_banner() {
        let view = ViewState::default().show_confirmation(FormKind::Quote, "earlier");
        let form = ContactRequest {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            message: "Second enquiry, different part.".into(),
            ..ContactRequest::default()
        };

        let result = submit(&view, &form, FormPhase::Confirming);

        assert_eq!(result.phase, FormPhase::Confirming);
        assert!(result.view.is_confirming(FormKind::Contact));
        assert!(!result.view.is_confirming(FormKind::Quote));
    }
}
