pub mod api_utils;
pub mod components;
pub mod dom;
pub mod icons;
pub mod modal_frame;
pub mod reveal;
