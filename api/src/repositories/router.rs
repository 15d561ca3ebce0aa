use crate::{repositories::handlers::get_repository_classification, state::AppState};
use axum::{routing, Router};

use std::sync::Arc;

pub struct RepositoriesRouter;

impl RepositoriesRouter {
    pub fn build() -> Router<Arc<AppState>> {
        Router::new().route("/:owner/:repo", routing::get(get_repository_classification))
    }
}
