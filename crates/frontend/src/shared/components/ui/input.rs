use leptos::html;
use leptos::prelude::*;

/// Labelled form input bound to a string signal
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Form field name, also used to build the element id
    #[prop(into)]
    name: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    on_input: Callback<String>,
    /// Input type: "text" (default), "email", "tel", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Prefix for the element id, e.g. "quote" gives `quote-name`
    #[prop(optional)]
    id_prefix: Option<&'static str>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Read-only attribute
    #[prop(optional)]
    readonly: bool,
    /// Element handle for callers that need to focus the input
    #[prop(optional)]
    input_ref: Option<NodeRef<html::Input>>,
) -> impl IntoView {
    let input_id = match id_prefix {
        Some(prefix) => format!("{prefix}-{name}"),
        None => name.clone(),
    };
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_ref = input_ref.unwrap_or_else(NodeRef::new);

    view! {
        <div class="form-group">
            <label for=input_id.clone()>{label}</label>
            <input
                id=input_id
                name=name
                type=input_t
                node_ref=input_ref
                prop:value=move || value.get()
                required=required
                readonly=readonly
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
