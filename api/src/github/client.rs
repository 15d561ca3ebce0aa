use reqwest::{header, Client, Url};

use crate::{config::GithubSettings, errors::PopularReposError};

use super::models::{GithubApiErrorPayload, GithubRepositoryAPI};

const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_API_USER_AGENT: &str = "popular-repos-api";

#[derive(Clone)]
pub struct GithubHttpClient {
    http_client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GithubHttpClient {
    pub fn new(settings: GithubSettings) -> Result<Self, PopularReposError> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(GITHUB_API_USER_AGENT),
        );

        let http_client: Client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PopularReposError::Reqwest)?;

        let base_url =
            Url::parse(&settings.get_api_url()).map_err(PopularReposError::ParseUrl)?;

        Ok(Self {
            http_client,
            base_url,
            token: settings.get_token(),
        })
    }

    /// Checks that the Github API answers with the configured credentials.
    ///
    /// A rejected token is reported as [`PopularReposError::InvalidCredentials`],
    /// any other failure keeps the upstream status.
    #[tracing::instrument(name = "Check Github API connection", skip(self))]
    pub async fn check_connection(&self) -> Result<(), PopularReposError> {
        // The API root is the configured base URL itself, prefix included
        self.get(self.base_url.clone())
            .await
            .map_err(PopularReposError::classify_connection_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "Get repository from Github API", skip(self))]
    pub async fn get_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<GithubRepositoryAPI, PopularReposError> {
        let mut repository_url = self.base_url.clone();

        // Segments are appended to the base path (e.g. `/api/v3` on Github Enterprise)
        // and escaped, so owner and repo cannot rewrite the path
        repository_url
            .path_segments_mut()
            .map_err(|_| {
                PopularReposError::ParseUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .extend(&["repos", owner, repo]);

        let response = self.get(repository_url).await?;

        response
            .json::<GithubRepositoryAPI>()
            .await
            .map_err(PopularReposError::Reqwest)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, PopularReposError> {
        // Without a token Github would reject the call anyway
        let token = self
            .token
            .as_ref()
            .ok_or(PopularReposError::InvalidCredentials)?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(PopularReposError::Reqwest)?;

        if !response.status().is_success() {
            return Err(self.parse_error_from_response(response).await);
        }

        Ok(response)
    }

    pub async fn parse_error_from_response(
        &self,
        response: reqwest::Response,
    ) -> PopularReposError {
        let status_code = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return PopularReposError::Reqwest(err),
        };

        let message = match serde_json::from_str::<GithubApiErrorPayload>(&body) {
            Ok(payload) => payload.message,
            Err(_) => body,
        };

        PopularReposError::GithubAPI(status_code, message)
    }
}
