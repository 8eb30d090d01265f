use crate::layout::global_context::SiteContext;
use crate::shared::icons::icon;
use contracts::domain::a001_site_page::PageId;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");

    let contact = site.config.with_value(|c| c.site.clone());
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container footer-content">
                <div class="footer-section">
                    <h3>{contact.brand.clone()}</h3>
                    <p>{contact.tagline.clone()}</p>
                </div>

                <div class="footer-section">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {PageId::all().into_iter().map(|page| view! {
                            <li>
                                <a
                                    href="#"
                                    data-page=page.as_str()
                                    on:click=move |ev| site.handle_nav_click(&ev)
                                >
                                    {page.nav_label()}
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <div class="footer-section">
                    <h4>"Contact"</h4>
                    <p>{icon("phone")}" "{contact.phone.clone()}</p>
                    <p>{icon("mail")}" "{contact.email.clone()}</p>
                    <p>{icon("map-pin")}" "{contact.address.clone()}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, contact.brand)}</p>
            </div>
        </footer>
    }
}
