use super::backend::ClassificationBackend;
use super::builder::GatewayBuilder;
use super::response::{decode_response, map_transport_error};
use crate::config::GatewayConfig;
use crate::error::{RequestError, ValidationError};
use crate::transport::HttpTransport;
use crate::types::{
    BatchOutcome, ClassCatalog, ClassificationResult, HealthReport, HealthStatus, UploadCandidate,
};
use async_trait::async_trait;
use std::path::Path;
use tracing::{info, warn};

pub const HEALTH_PATH: &str = "/health";
pub const CLASSES_PATH: &str = "/classes";
pub const PREDICT_PATH: &str = "/predict/";
pub const PREDICT_BATCH_PATH: &str = "/predict-batch/";

/// Boundary between callers and the classification backend.
///
/// Validates uploads, sends them, and maps every outcome onto
/// [`ClassificationResult`] or [`RequestError`]. Each operation issues exactly
/// one HTTP request; nothing is cached or retried. Cloning is cheap and clones
/// share the connection pool.
#[derive(Debug, Clone)]
pub struct ClassificationGateway {
    transport: HttpTransport,
}

impl ClassificationGateway {
    pub fn new(config: GatewayConfig) -> crate::Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    pub fn config(&self) -> &GatewayConfig {
        self.transport.config()
    }

    /// See [`validate_file`](super::validation::validate_file).
    pub fn validate_file(
        &self,
        candidate: UploadCandidate,
    ) -> Result<UploadCandidate, ValidationError> {
        super::validation::validate_file(candidate)
    }

    /// Upload one image to `POST /predict/` under the multipart field `file`.
    ///
    /// The candidate is sent as-is; run [`validate_file`](Self::validate_file)
    /// first.
    pub async fn submit(
        &self,
        candidate: &UploadCandidate,
    ) -> Result<ClassificationResult, RequestError> {
        let part = candidate.to_part().map_err(|e| RequestError::Unknown {
            details: format!("cannot encode upload: {}", e),
        })?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let raw = self
            .transport
            .post_multipart(PREDICT_PATH, form)
            .await
            .map_err(|e| {
                let err = map_transport_error(e);
                warn!(error = %err, "classification request failed");
                err
            })?;

        match decode_response::<ClassificationResult>(&raw) {
            Ok(result) => {
                info!(
                    request_id = %raw.request_id,
                    class = %result.class,
                    confidence = result.confidence,
                    "classification received"
                );
                Ok(result)
            }
            Err(err) => {
                warn!(request_id = %raw.request_id, error = %err, "classification rejected");
                Err(err)
            }
        }
    }

    /// Read, validate and submit a file from disk.
    pub async fn classify_path(
        &self,
        path: impl AsRef<Path>,
    ) -> crate::Result<ClassificationResult> {
        let candidate = UploadCandidate::from_path(path).await?;
        let candidate = self.validate_file(candidate)?;
        Ok(self.submit(&candidate).await?)
    }

    /// Probe `GET /health`.
    ///
    /// Any 2xx response is at least `Degraded`; only `"status": "healthy"` is
    /// `Online`. Failures of any kind are `Offline`.
    pub async fn check_health(&self) -> HealthStatus {
        let raw = match self.transport.get(HEALTH_PATH).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "health check failed");
                return HealthStatus::Offline;
            }
        };
        if !raw.is_success() {
            warn!(status = raw.status.as_u16(), "health check returned an error status");
            return HealthStatus::Offline;
        }
        let report: HealthReport = serde_json::from_slice(&raw.body).unwrap_or_default();
        HealthStatus::from_report(&report)
    }

    /// Fetch class indices and descriptions from `GET /classes`.
    pub async fn fetch_classes(&self) -> Result<ClassCatalog, RequestError> {
        let raw = self
            .transport
            .get(CLASSES_PATH)
            .await
            .map_err(map_transport_error)?;
        decode_response(&raw)
    }

    /// Upload several images in one `POST /predict-batch/` request.
    ///
    /// Per-file failures come back as [`BatchOutcome::Failed`]; only a failure
    /// of the request as a whole is an `Err`.
    pub async fn submit_batch(
        &self,
        candidates: &[UploadCandidate],
    ) -> Result<Vec<BatchOutcome>, RequestError> {
        let mut form = reqwest::multipart::Form::new();
        for candidate in candidates {
            let part = candidate.to_part().map_err(|e| RequestError::Unknown {
                details: format!("cannot encode upload: {}", e),
            })?;
            form = form.part("files", part);
        }

        let raw = self
            .transport
            .post_multipart(PREDICT_BATCH_PATH, form)
            .await
            .map_err(map_transport_error)?;
        let outcomes: Vec<BatchOutcome> = decode_response(&raw)?;
        info!(
            request_id = %raw.request_id,
            files = outcomes.len(),
            failed = outcomes.iter().filter(|o| !o.is_success()).count(),
            "batch classification received"
        );
        Ok(outcomes)
    }
}

#[async_trait]
impl ClassificationBackend for ClassificationGateway {
    async fn classify(
        &self,
        candidate: &UploadCandidate,
    ) -> Result<ClassificationResult, RequestError> {
        self.submit(candidate).await
    }

    async fn health(&self) -> HealthStatus {
        self.check_health().await
    }
}
