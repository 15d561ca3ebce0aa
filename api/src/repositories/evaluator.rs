use crate::errors::PopularReposError;
use crate::github::client::GithubHttpClient;
use crate::github::models::GithubRepositoryAPI;

use super::models::RepositoryStats;

// Business rules: a fork weighs twice as much as a star, and 500 points make a repository popular
const STAR_WEIGHT: u64 = 1;
const FORK_WEIGHT: u64 = 2;
pub const POPULARITY_THRESHOLD: u64 = 500;

pub fn calculate_score(num_stars: u64, num_forks: u64) -> u64 {
    num_stars
        .saturating_mul(STAR_WEIGHT)
        .saturating_add(num_forks.saturating_mul(FORK_WEIGHT))
}

pub fn classify(repository: &GithubRepositoryAPI) -> RepositoryStats {
    let num_stars = repository.stargazers_count;
    let num_forks = repository.forks_count;
    let score = calculate_score(num_stars, num_forks);

    RepositoryStats {
        num_stars,
        num_forks,
        score,
        popular: score >= POPULARITY_THRESHOLD,
    }
}

/// Fetches the repository from Github and classifies it.
///
/// Upstream 401 and 404 become [`PopularReposError::InvalidCredentials`] and
/// [`PopularReposError::RepositoryNotFound`]; every other failure is passed through.
#[tracing::instrument(name = "Evaluate repository popularity", skip(github_client))]
pub async fn get_repository_popularity(
    github_client: &GithubHttpClient,
    owner: &str,
    repo: &str,
) -> Result<RepositoryStats, PopularReposError> {
    let repository = github_client
        .get_repository(owner, repo)
        .await
        .map_err(PopularReposError::classify)?;

    Ok(classify(&repository))
}
