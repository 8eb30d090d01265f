//! Lifecycle plumbing shared by the form view models.

use crate::layout::global_context::SiteContext;
use crate::shared::dom;
use contracts::shared::error::ValidationErrors;
use contracts::usecases::common::{submit, FormEvent, FormKind, FormPhase, IntakeForm, SubmitOutcome};
use leptos::prelude::*;

pub fn advance(phase: RwSignal<FormPhase>, event: FormEvent) {
    phase.update(|p| *p = p.next(event));
}

/// Move a confirming form back to idle once its banner is gone, however it
/// was closed.
pub fn follow_confirmation(site: SiteContext, kind: FormKind, phase: RwSignal<FormPhase>) {
    let confirming = Memo::new(move |_| site.view.with(|v| v.is_confirming(kind)));
    Effect::new(move |_| {
        if !confirming.get() {
            advance(phase, FormEvent::Dismiss);
        }
    });
}

/// Validate and apply one submit of `form`. A rejection reports every failed
/// rule in one blocking alert and leaves the form as is. Returns the accepted
/// payload.
pub fn submit_form<F>(site: SiteContext, form: RwSignal<F>, phase: RwSignal<FormPhase>) -> Option<F>
where
    F: IntakeForm + Send + Sync + 'static,
{
    let submission = site.view.with_untracked(|view| {
        form.with_untracked(|f| submit(view, f, phase.get_untracked()))
    });

    match submission.outcome {
        SubmitOutcome::Rejected(errors) => {
            phase.set(submission.phase);
            report(F::KIND, &errors);
            advance(phase, FormEvent::Acknowledge);
            None
        }
        SubmitOutcome::Accepted(payload) => {
            form.set(submission.form);
            site.accept_submission(submission.view);
            phase.set(submission.phase);
            Some(payload)
        }
    }
}

fn report(kind: FormKind, errors: &ValidationErrors) {
    log::debug!("{} form rejected: {:?}", kind, errors.messages);
    dom::alert(&errors.to_string());
}
