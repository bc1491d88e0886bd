//! # ecg-classify
//!
//! 心电图心律失常分类服务的客户端：上传 ECG 图像并展示分类结果。
//!
//! Client for an ECG arrhythmia classification API.
//!
//! ## Overview
//!
//! A user supplies an ECG image; the crate checks that it is an image, uploads
//! it to the prediction backend as multipart form data, and maps the outcome
//! onto a typed [`ClassificationResult`] or a user-facing error. The result can
//! then be rendered as terminal cards, confidence bars and a share breakdown.
//!
//! Every operation is a single request/response cycle: no retries, no caching,
//! no cancellation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ecg_classify::{display, ClassificationGateway, UploadCandidate};
//!
//! #[tokio::main]
//! async fn main() -> ecg_classify::Result<()> {
//!     let gateway = ClassificationGateway::builder()
//!         .base_url("http://localhost:8000")
//!         .build()?;
//!
//!     let candidate = UploadCandidate::from_path("beat.png").await?;
//!     let candidate = gateway.validate_file(candidate)?;
//!     let result = gateway.submit(&candidate).await?;
//!     println!("{}", display::render_result(&result));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Gateway, builder, validation and the submission session |
//! | [`config`] | Explicit gateway configuration (env, YAML, code) |
//! | [`display`] | Terminal rendering of results and health |
//! | [`transport`] | HTTP transport over `reqwest` |
//! | [`types`] | Class codes, results, uploads, health |

pub mod client;
pub mod config;
pub mod display;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{
    validate_file, ClassificationBackend, ClassificationGateway, GatewayBuilder,
    SubmissionSession, SubmissionState,
};
pub use config::GatewayConfig;
pub use types::{
    ArrhythmiaClass, BatchOutcome, ClassCatalog, ClassificationResult, HealthStatus, Prediction,
    UploadCandidate,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, RequestError, SessionError, ValidationError};
