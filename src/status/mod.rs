pub mod status_result;

pub use status_result::{StatusLevel, StatusResult, StatusView};
