//! # Token Status Library
//!
//! Polls a backend token-status endpoint on a fixed schedule and renders
//! the answer into a status element of an in-process page header.
//!
//! Modules:
//! - `config` — service configuration, loading and validation
//! - `status` — the backend contract and the three display states
//! - `display` — page header model and the status element
//! - `sources` — HTTP status source
//! - `poller` — check-and-render loop with a start/stop handle
//! - `server` — rendered header, display snapshot and metrics over HTTP

pub mod config;
pub mod status;
pub mod display;
pub mod sources;
pub mod poller;
pub mod observability;
pub mod server;
pub mod helpers;
pub mod utils;
#[cfg(test)]
mod tests;


pub use crate::config::settings::ServiceConfig;
pub use crate::status::{StatusLevel, StatusResult, StatusView};
