pub mod common;
pub mod server_routes;
