pub mod server;
pub mod display_routes;
