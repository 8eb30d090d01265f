use crate::layout::global_context::SiteContext;
use crate::shared::components::ui::Button;
use crate::shared::icons::fa_icon;
use crate::shared::reveal::Reveal;
use contracts::domain::a001_site_page::PageId;
use leptos::prelude::*;

const SERVICES: [(&str, &str, &str); 3] = [
    (
        "fas fa-industry",
        "Precision Manufacturing",
        "Spare parts machined to OEM tolerances for every major injection molding machine brand.",
    ),
    (
        "fas fa-tools",
        "Repair & Refurbishment",
        "Restoration of worn screws, barrels and plungers to extend the life of your equipment.",
    ),
    (
        "fas fa-shipping-fast",
        "Fast Delivery",
        "Ready stock of common parts and short lead times on custom orders across India.",
    ),
];

const INDUSTRIES: [(&str, &str); 4] = [
    ("fas fa-car", "Automotive"),
    ("fas fa-box-open", "Packaging"),
    ("fas fa-heartbeat", "Medical Devices"),
    ("fas fa-blender", "Consumer Goods"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_context::<SiteContext>().expect("SiteContext not found");
    let nav = Callback::new(move |ev: leptos::ev::MouseEvent| site.handle_nav_click(&ev));
    let tagline = site.config.with_value(|c| c.site.tagline.clone());

    view! {
        <div class="hero">
            <div class="container hero-content">
                <h1>{tagline}</h1>
                <p>
                    "Screw barrels, plungers, rings and custom components engineered for \
                     reliable, high-pressure molding."
                </p>
                <div class="hero-buttons">
                    <Button data_page=PageId::Spares.as_str() on_click=nav>
                        "View Spare Parts"
                    </Button>
                    <Button variant="outline" data_page=PageId::Contact.as_str() on_click=nav>
                        "Get in Touch"
                    </Button>
                </div>
            </div>
        </div>

        <div class="container services">
            <h2 class="section-title">"What We Do"</h2>
            <div class="services-grid">
                {SERVICES.into_iter().map(|(glyph, title, text)| view! {
                    <Reveal class="service-card">
                        <div class="service-icon">{fa_icon(glyph)}</div>
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </Reveal>
                }).collect_view()}
            </div>
        </div>

        <div class="container industries">
            <h2 class="section-title">"Industries We Serve"</h2>
            <div class="industries-grid">
                {INDUSTRIES.into_iter().map(|(glyph, name)| view! {
                    <Reveal class="industry-item">
                        {fa_icon(glyph)}
                        <span>{name}</span>
                    </Reveal>
                }).collect_view()}
            </div>
        </div>
    }
}
