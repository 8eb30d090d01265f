//! Fixed navigation bar: brand, section links and the mobile menu toggle.

use crate::layout::global_context::SiteContext;
use contracts::domain::a001_site_page::PageId;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");

    let brand = site.config.with_value(|c| c.site.brand.clone());
    let menu_open = move || site.view.with(|v| v.mobile_menu_open);

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || site.navbar_scrolled.get()>
            <div class="nav-container">
                <a
                    href="#"
                    class="nav-logo"
                    data-page=PageId::Home.as_str()
                    on:click=move |ev| site.handle_nav_click(&ev)
                >
                    <i class="fas fa-cogs" aria-hidden="true"></i>
                    <span>{brand}</span>
                </a>

                <ul id="nav-menu" class="nav-menu" class:active=menu_open>
                    {PageId::all().into_iter().map(|page| view! {
                        <li class="nav-item">
                            <NavLink page=page />
                        </li>
                    }).collect_view()}
                </ul>

                <div
                    id="mobile-menu"
                    class="hamburger"
                    class:active=menu_open
                    role="button"
                    aria-label="Toggle navigation"
                    on:click=move |_| site.toggle_mobile_menu()
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

/// Link to one section, highlighted while that section is active.
#[component]
pub fn NavLink(page: PageId) -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");

    view! {
        <a
            href="#"
            class="nav-link"
            class:active=move || site.view.with(|v| v.is_active(page))
            data-page=page.as_str()
            on:click=move |ev| site.handle_nav_click(&ev)
        >
            {page.nav_label()}
        </a>
    }
}
