pub mod element;
pub mod page;

pub use element::StatusElement;
pub use page::{Page, SharedPage};
