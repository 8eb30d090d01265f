//! Quote request intake (modal opened from a product card)

mod api;
mod view;
mod view_model;

pub use view::QuoteModal;
pub use view_model::QuoteRequestViewModel;
