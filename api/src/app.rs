use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Settings,
    errors::{MessageResponse, NOT_FOUND_MESSAGE},
    github::client::GithubHttpClient,
    health_check::router::HealthCheckRouter,
    repositories::router::RepositoriesRouter,
    state::AppState,
};

pub struct AppBuilder {
    settings: Settings,
}

impl AppBuilder {
    pub fn new(settings: Settings) -> Self {
        AppBuilder { settings }
    }

    pub fn build(&self) -> Result<Router, anyhow::Error> {
        let github_client = GithubHttpClient::new(self.settings.github.clone())?;

        let state = Arc::new(AppState { github_client });

        Ok(Router::new()
            .merge(HealthCheckRouter::build())
            .merge(RepositoriesRouter::build())
            .fallback(not_found)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any))
            .with_state(state))
    }
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(NOT_FOUND_MESSAGE)),
    )
}
