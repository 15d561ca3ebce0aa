use serde::{Deserialize, Serialize};

/// Subset of the repository resource returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepositoryAPI {
    pub stargazers_count: u64,
    pub forks_count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GithubApiErrorPayload {
    pub message: String,
}
