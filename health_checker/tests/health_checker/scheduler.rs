use std::time::Duration;

use health_checker::{app::SchedulerBuilder, config::HealthCheckerSettings};
use serde_json::json;
use tracing_test::traced_test;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
#[traced_test]
async fn test_scheduler_checks_api_health_at_start() {
    let api_server = MockServer::start().await;

    Mock::given(path("/health"))
        .and(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .named("Health endpoint called by the scheduled job")
        .expect(1..)
        .mount(&api_server)
        .await;

    let settings =
        HealthCheckerSettings::from_values(Some(format!("{}/health", api_server.uri())), None)
            .expect("Unable to get health checker settings");
    let scheduler = SchedulerBuilder::new(settings)
        .build()
        .expect("Unable to build the scheduler");

    // The first run fires right away, the next one would only come a minute later
    scheduler
        .run_until(tokio::time::sleep(Duration::from_millis(500)))
        .await;

    let requests = api_server.received_requests().await.unwrap_or_default();

    assert_eq!(requests.len(), 1);
    assert!(logs_contain("Application healthy."));
}
