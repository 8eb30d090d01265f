use crate::domain::a002_spare_part::ui::grid::ProductGrid;
use leptos::prelude::*;

#[component]
pub fn SparesPage() -> impl IntoView {
    view! {
        <div class="container spares">
            <h2 class="section-title">"Spare Parts"</h2>
            <p class="section-subtitle">
                "Select a part to request a quote. Custom sizes and materials on request."
            </p>
            <ProductGrid />
        </div>
    }
}
