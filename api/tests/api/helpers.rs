use axum::Router;

use popular_repos_api::{
    app::AppBuilder,
    config::{get_app_settings, Settings},
    errors::MessageResponse,
};
use wiremock::MockServer;

pub const TEST_GITHUB_TOKEN: &str = "test-github-token";

// Nothing listens on port 1, so connections are refused straight away
const UNREACHABLE_GITHUB_URL: &str = "http://127.0.0.1:1";

pub struct TestApp {
    pub settings: Settings,
    pub app: Router,
    pub github_server: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::build(Some(TEST_GITHUB_TOKEN), None, "").await
    }

    /// Github served under a path prefix, like `/api/v3` on Github Enterprise.
    pub async fn with_github_path_prefix(path_prefix: &str) -> Self {
        Self::build(Some(TEST_GITHUB_TOKEN), None, path_prefix).await
    }

    pub async fn with_github_token(token: Option<&str>) -> Self {
        Self::build(token, None, "").await
    }

    pub async fn with_unreachable_github() -> Self {
        Self::build(Some(TEST_GITHUB_TOKEN), Some(UNREACHABLE_GITHUB_URL), "").await
    }

    async fn build(token: Option<&str>, api_url: Option<&str>, path_prefix: &str) -> Self {
        let mut settings = get_app_settings().expect("Unable to get server settings");
        let github_server = MockServer::start().await;

        settings.application.set_host("127.0.0.1".to_string());
        settings.application.set_port(0);
        settings.github.set_token(token.map(String::from));
        settings.github.set_api_url(
            api_url
                .map(String::from)
                .unwrap_or_else(|| format!("{}{}", github_server.uri(), path_prefix)),
        );

        let app = AppBuilder::new(settings.clone()).build().unwrap();

        TestApp {
            settings,
            app,
            github_server,
        }
    }

    pub async fn spawn_app(&self) -> String {
        let address = self
            .settings
            .application
            .get_addr()
            .expect("Unable to get http address for running the tests");

        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .expect("Unable to create a tcp listener");

        let base_url = listener.local_addr().unwrap();

        let app = self.app.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Error running the test server");
        });

        format!("http://{}", base_url)
    }
}

pub async fn assert_message_response(res: reqwest::Response, status: u16, message: &str) {
    assert_eq!(res.status(), status);

    let body: MessageResponse = res.json().await.unwrap();

    assert_eq!(body.message, message);
}
