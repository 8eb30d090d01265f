use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay backdrop plus a positioned surface, shared by the quote modal and
/// the confirmation banner.
///
/// A click on the backdrop itself (not on the surface) calls `on_close`.
#[component]
pub fn ModalFrame(
    /// Element id of the backdrop, e.g. `quote-modal`.
    #[prop(into)]
    id: String,
    /// Called when the backdrop is clicked.
    on_close: Callback<()>,
    /// Extra class for the surface (`div.modal-content`).
    #[prop(optional, into)]
    surface_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the backdrop, so a text selection
    // dragged out of the surface does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // The backdrop unmounts inside its own click dispatch; close on the next tick.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match surface_class {
        Some(cls) => format!("modal-content {cls}"),
        None => "modal-content".to_string(),
    };

    view! {
        <div
            id=id
            class="modal"
            style="display: block;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
