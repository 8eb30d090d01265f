pub mod center;
pub mod confirmation_banner;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod overlay_timers;

use crate::usecases::u102_quote_request::QuoteModal;
use confirmation_banner::ConfirmationBanner;
use leptos::prelude::*;

/// Page skeleton.
///
/// ```text
/// +------------------------------------------+
/// |  Navbar (fixed)                          |
/// +------------------------------------------+
/// |  <section class="page"> x 4, one active  |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
///   QuoteModal / ConfirmationBanner overlays
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <header::Navbar />
        <center::Center />
        <footer::Footer />
        <QuoteModal />
        <ConfirmationBanner />
    }
}
