//! Health probe mapping

use crate::integration::mock_server::{closed_port_url, MockServerFixture};
use ecg_classify::{ClassificationBackend, ClassificationGateway, HealthStatus};

#[tokio::test]
async fn test_healthy_is_online() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "GET",
            "/health",
            200,
            r#"{"status":"healthy","message":"Model loaded and ready"}"#,
        )
        .await;

    assert_eq!(fixture.gateway().check_health().await, HealthStatus::Online);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_other_status_is_degraded() {
    for body in [
        r#"{"status":"degraded"}"#,
        r#"{"status":"error","message":"Model not loaded"}"#,
        r#"{"uptime": 12}"#,
        "OK",
    ] {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture.mock_json("GET", "/health", 200, body).await;
        assert_eq!(
            fixture.gateway().check_health().await,
            HealthStatus::Degraded,
            "body: {body}"
        );
    }
}

#[tokio::test]
async fn test_error_status_is_offline() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/health", 503, r#"{"status":"healthy"}"#)
        .await;
    assert_eq!(fixture.gateway().check_health().await, HealthStatus::Offline);
}

#[tokio::test]
async fn test_unreachable_is_offline() {
    let gateway = ClassificationGateway::builder()
        .base_url(closed_port_url())
        .build()
        .unwrap();
    assert_eq!(gateway.check_health().await, HealthStatus::Offline);
    assert_eq!(gateway.health().await, HealthStatus::Offline);
}
