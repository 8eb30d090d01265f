use crate::layout::global_context::SiteContext;
use crate::pages;
use contracts::domain::a001_site_page::PageId;
use leptos::prelude::*;

/// All sections are rendered once; only the active one carries `active`.
#[component]
pub fn Center() -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");

    view! {
        <main>
            {PageId::all().into_iter().map(|page| view! {
                <section
                    id=page.as_str()
                    class="page"
                    class:active=move || site.view.with(|v| v.is_active(page))
                >
                    {pages::render(page)}
                </section>
            }).collect_view()}
        </main>
    }
}
