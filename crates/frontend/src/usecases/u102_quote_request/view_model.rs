use super::api;
use crate::layout::global_context::SiteContext;
use crate::usecases::common::{follow_confirmation, submit_form};
use contracts::domain::a002_spare_part::QuoteTarget;
use contracts::usecases::common::{FormKind, FormPhase};
use contracts::usecases::u102_quote_request::QuoteRequest;
use leptos::prelude::*;

const KIND: FormKind = FormKind::Quote;

/// ViewModel for the quote modal form
#[derive(Clone, Copy)]
pub struct QuoteRequestViewModel {
    pub form: RwSignal<QuoteRequest>,
    pub phase: RwSignal<FormPhase>,
    pub target: Memo<Option<QuoteTarget>>,
    site: SiteContext,
}

impl QuoteRequestViewModel {
    pub fn new(site: SiteContext) -> Self {
        let form = RwSignal::new(QuoteRequest::default());
        let phase = RwSignal::new(FormPhase::Idle);
        let target = Memo::new(move |_| site.view.with(|v| v.quote.clone()));

        // Opening pre-fills the product; closing resets every field.
        Effect::new(move |_| {
            let next = match target.get() {
                Some(t) => QuoteRequest::for_product(&t),
                None => QuoteRequest::default(),
            };
            form.set(next);
        });
        follow_confirmation(site, KIND, phase);

        Self {
            form,
            phase,
            target,
            site,
        }
    }

    pub fn field(&self, set: fn(&mut QuoteRequest, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value| form.update(|f| set(f, value)))
    }

    pub fn close_command(&self) {
        self.site.close_quote();
    }

    pub fn submit_command(&self) {
        if let Some(request) = submit_form(self.site, self.form, self.phase) {
            api::submit(&request);
        }
    }
}
