use super::view_model::QuoteRequestViewModel;
use crate::layout::global_context::SiteContext;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::usecases::common::FormKind;
use leptos::prelude::*;

const PREFIX: &str = "quote";

#[component]
pub fn QuoteModal() -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");
    let vm = QuoteRequestViewModel::new(site);
    let form = vm.form;
    let close = Callback::new(move |_| vm.close_command());

    view! {
        <Show when=move || vm.target.with(|t| t.is_some())>
            <ModalFrame id="quote-modal" on_close=close>
                <div class="modal-header">
                    <h3>"Request a Quote"</h3>
                    <button class="close" aria-label="Close" on:click=move |_| close.run(())>
                        {icon("close")}
                    </button>
                </div>
                <form
                    id=FormKind::Quote.form_id()
                    class="quote-form"
                    data-phase=move || vm.phase.get().as_str()
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit_command();
                    }
                >
                    <Input
                        label="Product"
                        name="product"
                        id_prefix=PREFIX
                        value=Signal::derive(move || form.with(|f| f.product.clone()))
                        on_input=vm.field(|f, v| f.product = v)
                        readonly=true
                    />
                    <Input
                        label="Name *"
                        name="name"
                        id_prefix=PREFIX
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=vm.field(|f, v| f.name = v)
                        input_ref=site.quote_focus
                        required=true
                    />
                    <Input
                        label="Email *"
                        name="email"
                        id_prefix=PREFIX
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=vm.field(|f, v| f.email = v)
                        required=true
                    />
                    <Input
                        label="Phone"
                        name="phone"
                        id_prefix=PREFIX
                        input_type="tel"
                        value=Signal::derive(move || form.with(|f| f.phone.clone()))
                        on_input=vm.field(|f, v| f.phone = v)
                    />
                    <Input
                        label="Company"
                        name="company"
                        id_prefix=PREFIX
                        value=Signal::derive(move || form.with(|f| f.company.clone()))
                        on_input=vm.field(|f, v| f.company = v)
                    />
                    <Input
                        label="Quantity"
                        name="quantity"
                        id_prefix=PREFIX
                        input_type="number"
                        value=Signal::derive(move || form.with(|f| f.quantity.clone()))
                        on_input=vm.field(|f, v| f.quantity = v)
                    />
                    <Textarea
                        label="Specifications"
                        name="details"
                        id_prefix=PREFIX
                        rows=4
                        value=Signal::derive(move || form.with(|f| f.details.clone()))
                        on_input=vm.field(|f, v| f.details = v)
                    />
                    <Button button_type="submit">"Submit Request"</Button>
                </form>
            </ModalFrame>
        </Show>
    }
}
