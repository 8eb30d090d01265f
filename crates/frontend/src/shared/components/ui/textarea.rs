use leptos::prelude::*;

/// Labelled textarea bound to a string signal
#[component]
pub fn Textarea(
    #[prop(into)]
    label: String,
    /// Form field name, also used to build the element id
    #[prop(into)]
    name: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    id_prefix: Option<&'static str>,
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let textarea_id = match id_prefix {
        Some(prefix) => format!("{prefix}-{name}"),
        None => name.clone(),
    };
    let textarea_rows = rows.unwrap_or(5);

    view! {
        <div class="form-group">
            <label for=textarea_id.clone()>{label}</label>
            <textarea
                id=textarea_id
                name=name
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
