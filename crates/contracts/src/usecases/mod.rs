pub mod common;
pub mod u101_contact_request;
pub mod u102_quote_request;
