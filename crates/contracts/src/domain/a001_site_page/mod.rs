pub mod page;
pub mod view_state;

pub use page::{title_for, PageId};
pub use view_state::{Confirmation, ViewState};
