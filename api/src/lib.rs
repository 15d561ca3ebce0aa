pub mod app;
pub mod config;
pub mod errors;
pub mod github;
pub mod health_check;
pub mod repositories;
pub mod state;
