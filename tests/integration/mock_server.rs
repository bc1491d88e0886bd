//! Mock HTTP server setup for integration tests

use ecg_classify::{ClassificationGateway, UploadCandidate};
use mockito::{Matcher, Mock, Server, ServerGuard};

/// Test fixture that manages a mock classification backend
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Gateway pointed at the mock server
    pub fn gateway(&self) -> ClassificationGateway {
        ClassificationGateway::builder()
            .base_url(&self.base_url)
            .build()
            .expect("gateway builds against mock url")
    }

    /// JSON response for `method path` with the given status
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// `POST /predict/` that only matches a multipart upload in field `file`
    pub async fn mock_predict(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", "/predict/")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::Regex(r#"name="file""#.to_string()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn png_candidate() -> UploadCandidate {
    UploadCandidate::new(Some("ecg.png".to_string()), "image/png", b"PNGDATA".to_vec())
}

/// URL of a local port nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub const NORMAL_RESULT: &str = r#"{
    "class": "N",
    "description": "Normal beat",
    "confidence": 0.945,
    "top_predictions": [
        {"class": "N", "description": "Normal beat", "confidence": 0.945},
        {"class": "V", "description": "Premature ventricular contraction", "confidence": 0.03}
    ]
}"#;
