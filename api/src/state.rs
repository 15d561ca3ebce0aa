use crate::github::client::GithubHttpClient;

#[derive(Clone)]
pub struct AppState {
    pub github_client: GithubHttpClient,
}
