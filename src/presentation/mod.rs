// Presentation layer - HTTP handlers, routes and shared state
pub mod app_state;
pub mod handlers;
pub mod routes;
