use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use crate::shared::reveal::RevealService;
use contracts::domain::a001_site_page::PageId;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load().unwrap_or_else(|e| {
        log::error!("Site config rejected, using defaults: {}", e);
        SiteConfig::default()
    });

    // Scroll-reveal observer shared by every animated element.
    provide_context(RevealService::new(&config.reveal));

    let site = SiteContext::new(config);
    provide_context(site);

    site.init_listeners();
    site.init_scroll_lock();

    if let Err(e) = site.show_page(PageId::Home.as_str()) {
        log::warn!("{}", e);
    }

    log::info!("Mobin Engineers website initialized successfully");

    view! {
        <Shell />
    }
}
