pub mod api_client;
pub mod app;
pub mod config;
pub mod errors;
pub mod scheduler;
