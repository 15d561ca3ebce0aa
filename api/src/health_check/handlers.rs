use axum::extract::State;
use axum::response::Response;
use axum::{http::StatusCode, response::IntoResponse, Json};

use std::sync::Arc;

use crate::errors::{MessageResponse, PopularReposError};
use crate::state::AppState;

const HEALTHY_MESSAGE: &str = "ok";

#[tracing::instrument(name = "Health check handler", skip(state))]
pub async fn health_check(state: State<Arc<AppState>>) -> Result<Response, PopularReposError> {
    state.github_client.check_connection().await?;

    Ok((StatusCode::OK, Json(MessageResponse::new(HEALTHY_MESSAGE))).into_response())
}
