use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;

/// Success message shown after a form is accepted.
///
/// Closes on its button, a backdrop click, Escape, or the dismiss timer.
#[component]
pub fn ConfirmationBanner() -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");

    let message = Memo::new(move |_| {
        site.view
            .with(|v| v.confirmation.as_ref().map(|c| c.message.clone()))
    });
    let close = Callback::new(move |_| site.close_confirmation());

    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <ModalFrame id="success-message" on_close=close surface_class="success-content">
                <div class="success-icon">{icon("check")}</div>
                <h3>"Thank You!"</h3>
                <p>{move || message.get().unwrap_or_default()}</p>
                <button class="btn btn-primary" on:click=move |_| close.run(())>
                    "Close"
                </button>
            </ModalFrame>
        </Show>
    }
}
