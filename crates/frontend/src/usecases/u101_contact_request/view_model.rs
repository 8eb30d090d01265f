use super::api;
use crate::layout::global_context::SiteContext;
use crate::usecases::common::{follow_confirmation, submit_form};
use contracts::usecases::common::{FormKind, FormPhase};
use contracts::usecases::u101_contact_request::ContactRequest;
use leptos::prelude::*;

const KIND: FormKind = FormKind::Contact;

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactRequestViewModel {
    pub form: RwSignal<ContactRequest>,
    pub phase: RwSignal<FormPhase>,
    site: SiteContext,
}

impl ContactRequestViewModel {
    pub fn new(site: SiteContext) -> Self {
        let phase = RwSignal::new(FormPhase::Idle);
        follow_confirmation(site, KIND, phase);
        Self {
            form: RwSignal::new(ContactRequest::default()),
            phase,
            site,
        }
    }

    /// Setter for one field, for wiring into `on_input`.
    pub fn field(&self, set: fn(&mut ContactRequest, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value| form.update(|f| set(f, value)))
    }

    pub fn submit_command(&self) {
        if let Some(request) = submit_form(self.site, self.form, self.phase) {
            api::submit(&request);
        }
    }
}
