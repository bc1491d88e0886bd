use crate::error::RequestError;
use crate::types::{ClassificationResult, HealthStatus, UploadCandidate};
use async_trait::async_trait;

/// Anything that can classify an upload and report its own health.
///
/// [`ClassificationGateway`](super::ClassificationGateway) is the HTTP
/// implementation; [`SubmissionSession`](super::SubmissionSession) only depends
/// on this trait.
#[async_trait]
pub trait ClassificationBackend: Send + Sync {
    async fn classify(
        &self,
        candidate: &UploadCandidate,
    ) -> Result<ClassificationResult, RequestError>;

    async fn health(&self) -> HealthStatus;
}
