use super::view_model::ContactRequestViewModel;
use crate::layout::global_context::SiteContext;
use crate::shared::components::ui::{Button, Input, Textarea};
use contracts::usecases::common::FormKind;
use leptos::prelude::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");
    let vm = ContactRequestViewModel::new(site);
    let form = vm.form;

    view! {
        <form
            id=FormKind::Contact.form_id()
            class="contact-form"
            data-phase=move || vm.phase.get().as_str()
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command();
            }
        >
            <Input
                label="Name *"
                name="name"
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=vm.field(|f, v| f.name = v)
                required=true
            />
            <Input
                label="Email *"
                name="email"
                input_type="email"
                value=Signal::derive(move || form.with(|f| f.email.clone()))
                on_input=vm.field(|f, v| f.email = v)
                required=true
            />
            <Input
                label="Phone"
                name="phone"
                input_type="tel"
                value=Signal::derive(move || form.with(|f| f.phone.clone()))
                on_input=vm.field(|f, v| f.phone = v)
            />
            <Input
                label="Company"
                name="company"
                value=Signal::derive(move || form.with(|f| f.company.clone()))
                on_input=vm.field(|f, v| f.company = v)
            />
            <Textarea
                label="Message *"
                name="message"
                value=Signal::derive(move || form.with(|f| f.message.clone()))
                on_input=vm.field(|f, v| f.message = v)
                required=true
            />
            <Button button_type="submit">"Send Message"</Button>
        </form>
    }
}
