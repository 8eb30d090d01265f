use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use crate::usecases::u101_contact_request::ContactForm;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");
    let contact = site.config.with_value(|c| c.site.clone());

    view! {
        <div class="container contact">
            <h2 class="section-title">"Contact Us"</h2>
            <div class="contact-grid">
                <div class="contact-info">
                    <div class="contact-item">{icon("phone")}<span>{contact.phone}</span></div>
                    <div class="contact-item">{icon("mail")}<span>{contact.email}</span></div>
                    <div class="contact-item">{icon("map-pin")}<span>{contact.address}</span></div>
                </div>
                <ContactForm />
            </div>
        </div>
    }
}
