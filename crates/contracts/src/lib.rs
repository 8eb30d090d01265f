//! Shared, browser-independent model of the Mobin Engineers site.
//!
//! Everything here is plain Rust so it can be exercised with `cargo test`
//! on the host; the `frontend` crate binds it to the DOM.

pub mod domain;
pub mod shared;
pub mod usecases;
