use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GetRepositoryPathParams {
    pub owner: String,
    pub repo: String,
}

/// Popularity classification of a Github repository, as returned by `GET /{owner}/{repo}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryStats {
    pub num_stars: u64,
    pub num_forks: u64,
    pub score: u64,
    pub popular: bool,
}
