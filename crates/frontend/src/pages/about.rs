use crate::shared::icons::fa_icon;
use crate::shared::reveal::Reveal;
use leptos::prelude::*;

const TEAM: [(&str, &str); 3] = [
    ("Founder & Managing Director", "Three decades in injection molding machine maintenance."),
    ("Head of Production", "Runs the CNC shop and final inspection."),
    ("Customer Support", "Helps match worn parts to drawings and replacements."),
];

const CAPABILITIES: [(&str, &str); 4] = [
    ("fas fa-ruler-combined", "CNC turning and grinding"),
    ("fas fa-fire", "Nitriding and bimetallic lining"),
    ("fas fa-microscope", "Dimensional inspection"),
    ("fas fa-drafting-compass", "Reverse engineering from samples"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="container about">
            <h2 class="section-title">"About Mobin Engineers"</h2>
            <p class="about-text">
                "We manufacture and supply precision spare parts for injection molding machines, \
                 serving processors who cannot afford unplanned downtime."
            </p>

            <h3>"Our Team"</h3>
            <div class="team-grid">
                {TEAM.into_iter().map(|(role, text)| view! {
                    <Reveal class="team-member">
                        <h4>{role}</h4>
                        <p>{text}</p>
                    </Reveal>
                }).collect_view()}
            </div>

            <h3>"Capabilities"</h3>
            <div class="capabilities-grid">
                {CAPABILITIES.into_iter().map(|(glyph, text)| view! {
                    <Reveal class="capability-item">
                        {fa_icon(glyph)}
                        <span>{text}</span>
                    </Reveal>
                }).collect_view()}
            </div>
        </div>
    }
}
