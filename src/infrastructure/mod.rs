// Infrastructure layer - External dependencies and adapters
pub mod api_provider;
pub mod config;
pub mod http_response;
pub mod json_mapper;
