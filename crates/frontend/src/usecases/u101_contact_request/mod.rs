//! Contact form intake
//!
//! - api.rs: submission (logged, no backend yet)
//! - view_model.rs: form state and submit command
//! - view.rs: Leptos component (pure UI)

mod api;
mod view;
mod view_model;

pub use view::ContactForm;
pub use view_model::ContactRequestViewModel;
