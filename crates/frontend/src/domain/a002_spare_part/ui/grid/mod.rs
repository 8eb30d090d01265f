//! Spare part card grid
//!
//! - view_model.rs: one card model per catalog entry
//! - view.rs: Leptos components (grid + card)

mod view;
mod view_model;

pub use view::{ProductCard, ProductGrid};
pub use view_model::{ProductCardModel, ProductGridViewModel};
