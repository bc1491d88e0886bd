//! 上传文件校验：只接受 image/* 类型。
//!
//! Upload validation.

use crate::error::ValidationError;
use crate::types::UploadCandidate;

/// Accept a candidate whose MIME type starts with `image/`.
///
/// File size and name play no part in the decision; in particular the upload
/// limit shown to users is not enforced here.
pub fn validate_file(candidate: UploadCandidate) -> Result<UploadCandidate, ValidationError> {
    if candidate.mime_type().starts_with("image/") {
        Ok(candidate)
    } else {
        Err(ValidationError::NotAnImage {
            mime_type: candidate.mime_type().to_string(),
        })
    }
}
