//! Upload candidates.

use bytes::Bytes;
use std::path::Path;

/// A file selected by the user, not yet submitted.
///
/// Candidates are never mutated in place; selecting a different file means
/// building a new candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    file_name: Option<String>,
    mime_type: String,
    bytes: Bytes,
}

impl UploadCandidate {
    pub fn new(
        file_name: Option<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name,
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    ///
    /// Unknown extensions map to `application/octet-stream`, which validation
    /// then rejects.
    pub async fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Ok(Self::new(file_name, mime_type, bytes))
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Multipart part carrying this file.
    pub(crate) fn to_part(&self) -> std::result::Result<reqwest::multipart::Part, reqwest::Error> {
        reqwest::multipart::Part::bytes(self.bytes.to_vec())
            .file_name(self.file_name.clone().unwrap_or_else(|| "upload".to_string()))
            .mime_str(&self.mime_type)
    }
}
