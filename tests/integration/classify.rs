//! Single-image classification against the mock backend

use crate::integration::mock_server::{
    closed_port_url, png_candidate, MockServerFixture, NORMAL_RESULT,
};
use ecg_classify::{
    ArrhythmiaClass, ClassificationGateway, ClassificationResult, Error, RequestError,
    UploadCandidate, ValidationError,
};
use mockito::Matcher;

#[tokio::test]
async fn test_submit_returns_backend_result_unchanged() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_predict(200, NORMAL_RESULT).await;

    let result = fixture.gateway().submit(&png_candidate()).await.unwrap();
    mock.assert_async().await;

    let served: serde_json::Value = serde_json::from_str(NORMAL_RESULT).unwrap();
    assert_eq!(serde_json::to_value(&result).unwrap(), served);

    let expected: ClassificationResult = serde_json::from_str(NORMAL_RESULT).unwrap();
    assert_eq!(result, expected);
    assert_eq!(result.class, ArrhythmiaClass::Normal);
    assert_eq!(result.top_predictions.len(), 2);
    assert_eq!(result.top_predictions[1].confidence, 0.03);
}

#[tokio::test]
async fn test_upload_carries_file_name_and_mime() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/predict/")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="ecg.png""#.to_string()),
            Matcher::Regex("(?i)content-type: image/png".to_string()),
            Matcher::Regex("PNGDATA".to_string()),
        ]))
        .match_header("x-request-id", Matcher::Any)
        .with_status(200)
        .with_body(NORMAL_RESULT)
        .create_async()
        .await;

    fixture.gateway().submit(&png_candidate()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_detail_is_surfaced() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_predict(422, r#"{"detail":"Invalid image format"}"#)
        .await;

    let err = fixture.gateway().submit(&png_candidate()).await.unwrap_err();
    assert_eq!(
        err,
        RequestError::ServerMessage {
            status: 422,
            message: "Invalid image format".to_string()
        }
    );
    assert_eq!(err.user_message(), "Invalid image format");
}

#[tokio::test]
async fn test_server_error_without_detail_is_generic() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/predict/")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = fixture.gateway().submit(&png_candidate()).await.unwrap_err();
    assert!(matches!(err, RequestError::Unknown { .. }));
    assert_eq!(err.user_message(), "An error occurred during classification.");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    let gateway = ClassificationGateway::builder()
        .base_url(closed_port_url())
        .build()
        .unwrap();

    let err = gateway.submit(&png_candidate()).await.unwrap_err();
    assert!(matches!(err, RequestError::TransportFailure { .. }));
    assert_eq!(
        err.user_message(),
        "Could not connect to the server. Please try again later."
    );
}

#[tokio::test]
async fn test_missing_fields_are_malformed_response() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_predict(
            200,
            r#"{"class":"N","description":"Normal beat","confidence":0.9}"#,
        )
        .await;

    let err = fixture.gateway().submit(&png_candidate()).await.unwrap_err();
    assert!(matches!(err, RequestError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_unknown_class_code_is_malformed_response() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_predict(
            200,
            r#"{"class":"X","description":"?","confidence":0.9,"top_predictions":[]}"#,
        )
        .await;

    let err = fixture.gateway().submit(&png_candidate()).await.unwrap_err();
    assert!(matches!(err, RequestError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/ecg/predict/")
        .with_status(200)
        .with_body(NORMAL_RESULT)
        .create_async()
        .await;

    let gateway = ClassificationGateway::builder()
        .base_url(format!("{}/ecg/", fixture.base_url))
        .build()
        .unwrap();
    gateway.submit(&png_candidate()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_classify_path_rejects_non_image_without_request() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/predict/")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not an ecg").unwrap();

    let err = fixture.gateway().classify_path(&path).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::NotAnImage { ref mime_type }) if mime_type == "text/plain"
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_classify_path_uploads_image() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_predict(200, NORMAL_RESULT).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beat.jpg");
    std::fs::write(&path, b"JPEGDATA").unwrap();

    let result = fixture.gateway().classify_path(&path).await.unwrap();
    assert_eq!(result.description, "Normal beat");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_classes() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/classes",
            200,
            r#"{
                "class_indices": {"F": 0, "M": 1, "N": 2, "Q": 3, "S": 4, "V": 5},
                "class_descriptions": {
                    "F": "Fusion of ventricular and normal beat",
                    "M": "Myocardial infarction",
                    "N": "Normal beat",
                    "Q": "Unclassifiable beat",
                    "S": "Supraventricular premature beat",
                    "V": "Premature ventricular contraction"
                }
            }"#,
        )
        .await;

    let catalog = fixture.gateway().fetch_classes().await.unwrap();
    assert_eq!(catalog.codes_by_index(), vec!["F", "M", "N", "Q", "S", "V"]);
    for class in ArrhythmiaClass::ALL {
        assert_eq!(
            catalog.class_descriptions.get(class.code()).map(String::as_str),
            Some(class.description())
        );
    }
}

#[tokio::test]
async fn test_unparseable_image_mime_passes_validation_but_is_not_sent() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/predict/")
        .with_status(200)
        .with_body(NORMAL_RESULT)
        .expect(0)
        .create_async()
        .await;

    let gateway = fixture.gateway();
    let candidate = gateway
        .validate_file(UploadCandidate::new(
            Some("ecg.png".into()),
            "image/x png",
            b"PNGDATA".to_vec(),
        ))
        .unwrap();

    let err = gateway.submit(&candidate).await.unwrap_err();
    assert!(
        matches!(&err, RequestError::Unknown { details } if details.starts_with("cannot encode upload")),
        "{:?}",
        err
    );
    assert_eq!(err.user_message(), "An error occurred during classification.");
    mock.assert_async().await;
}
