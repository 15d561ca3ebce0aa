use axum::response::Response;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use std::sync::Arc;

use crate::errors::PopularReposError;
use crate::state::AppState;

use super::evaluator::get_repository_popularity;
use super::models::GetRepositoryPathParams;

#[tracing::instrument(name = "Get repository classification handler", skip(state))]
pub async fn get_repository_classification(
    state: State<Arc<AppState>>,
    path: Path<GetRepositoryPathParams>,
) -> Result<Response, PopularReposError> {
    let path_params = path.0;

    let res =
        get_repository_popularity(&state.github_client, &path_params.owner, &path_params.repo)
            .await?;

    Ok((StatusCode::OK, Json(res)).into_response())
}
