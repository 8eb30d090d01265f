use super::view_model::{ProductCardModel, ProductGridViewModel};
use crate::layout::global_context::SiteContext;
use crate::shared::icons::fa_icon;
use crate::shared::reveal::{use_reveal, HIDDEN_STYLE};
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn ProductGrid() -> impl IntoView {
    let vm = ProductGridViewModel::new();

    view! {
        <div id="products-grid" class="products-grid">
            {vm.cards.into_iter().map(|card| view! { <ProductCard card=card /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn ProductCard(card: ProductCardModel) -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");
    let node = NodeRef::<html::Div>::new();
    use_reveal(node);

    view! {
        <div
            class="product-card"
            data-product-id=card.product_id()
            style=HIDDEN_STYLE
            node_ref=node
        >
            <div class="product-image">
                {fa_icon(card.icon_class())}
            </div>
            <div class="product-content">
                <h3>{card.title()}</h3>
                <p>{card.description()}</p>
                <button
                    class="btn btn-primary"
                    on:click=move |_| site.request_quote(card.product)
                >
                    "Request Quote"
                </button>
            </div>
        </div>
    }
}
