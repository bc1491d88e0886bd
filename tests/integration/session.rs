//! Submission session driven by the real gateway

use crate::integration::mock_server::{closed_port_url, png_candidate, MockServerFixture, NORMAL_RESULT};
use ecg_classify::{ClassificationGateway, RequestError, SubmissionSession, SubmissionState};

#[tokio::test]
async fn test_session_success_then_removal() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_predict(200, NORMAL_RESULT).await;
    let gateway = fixture.gateway();

    let session = SubmissionSession::new();
    session.select(png_candidate()).unwrap();
    let result = session.submit(&gateway).await.unwrap();
    mock.assert_async().await;

    assert_eq!(session.state(), SubmissionState::Succeeded(result));
    assert!(session.selected().is_none());

    session.remove().unwrap();
    assert_eq!(session.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn test_session_records_transport_failure() {
    let gateway = ClassificationGateway::builder()
        .base_url(closed_port_url())
        .build()
        .unwrap();

    let session = SubmissionSession::new();
    session.select(png_candidate()).unwrap();
    let err = session.submit(&gateway).await.unwrap_err();
    assert_eq!(
        err.user_message(),
        "Could not connect to the server. Please try again later."
    );
    assert!(matches!(
        session.state(),
        SubmissionState::Failed(RequestError::TransportFailure { .. })
    ));
}
