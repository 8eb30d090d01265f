//! Static content of the four sections.

mod about;
mod contact;
mod home;
mod spares;

use contracts::domain::a001_site_page::PageId;
use leptos::prelude::*;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use spares::SparesPage;

pub fn render(page: PageId) -> AnyView {
    match page {
        PageId::Home => view! { <HomePage /> }.into_any(),
        PageId::About => view! { <AboutPage /> }.into_any(),
        PageId::Spares => view! { <SparesPage /> }.into_any(),
        PageId::Contact => view! { <ContactPage /> }.into_any(),
    }
}
