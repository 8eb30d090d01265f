pub mod catalog;
pub mod descriptor;

pub use catalog::catalog;
pub use descriptor::{ProductDescriptor, QuoteTarget};
