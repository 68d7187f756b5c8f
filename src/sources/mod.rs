pub mod fetch;

pub use fetch::{FetchStatus, HttpStatusSource};
