//! 提交会话：同一时刻只允许一个进行中的分类请求。
//!
//! Submission session.
//!
//! Holds the currently selected file and the outcome of the last submission,
//! and refuses to start a submission while another one is outstanding.

use super::backend::ClassificationBackend;
use super::validation::validate_file;
use crate::error::{RequestError, SessionError, ValidationError};
use crate::types::{ClassificationResult, UploadCandidate};
use crate::{Error, Result};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Where a session is in the submit cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded(ClassificationResult),
    Failed(RequestError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

#[derive(Debug)]
struct Inner {
    state: SubmissionState,
    selected: Option<UploadCandidate>,
}

/// One user's upload-and-classify flow.
///
/// Safe to share behind an `Arc`: the in-flight guard is checked and set under
/// a single lock, so two racing `submit` calls cannot both start a request.
#[derive(Debug)]
pub struct SubmissionSession {
    inner: Mutex<Inner>,
}

impl SubmissionSession {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: SubmissionState::Idle,
                selected: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    pub fn selected(&self) -> Option<UploadCandidate> {
        self.lock().selected.clone()
    }

    /// Validate and select a file, replacing any previous selection.
    ///
    /// A rejected file leaves the previous selection in place.
    pub fn select(&self, candidate: UploadCandidate) -> std::result::Result<(), ValidationError> {
        let candidate = validate_file(candidate)?;
        self.lock().selected = Some(candidate);
        Ok(())
    }

    /// Drop the selected file and any previous outcome.
    pub fn remove(&self) -> std::result::Result<(), SessionError> {
        let mut inner = self.lock();
        if inner.state.is_submitting() {
            return Err(SessionError::SubmissionInProgress);
        }
        inner.selected = None;
        inner.state = SubmissionState::Idle;
        Ok(())
    }

    /// Submit the selected file through `backend`.
    ///
    /// Fails without touching the network when a submission is already in
    /// flight or no file is selected. The selected file is consumed once the
    /// request starts; if the returned future is dropped before the backend
    /// answers, the file is selected again and the session returns to `Idle`.
    pub async fn submit<B>(&self, backend: &B) -> Result<ClassificationResult>
    where
        B: ClassificationBackend + ?Sized,
    {
        let candidate = {
            let mut inner = self.lock();
            if inner.state.is_submitting() {
                return Err(SessionError::SubmissionInProgress.into());
            }
            let candidate = inner
                .selected
                .take()
                .ok_or(Error::Validation(ValidationError::MissingFile))?;
            inner.state = SubmissionState::Submitting;
            candidate
        };
        debug!(file = ?candidate.file_name(), bytes = candidate.size_bytes(), "submission started");

        let mut in_flight = InFlight {
            session: self,
            candidate,
            armed: true,
        };
        let outcome = backend.classify(&in_flight.candidate).await;
        in_flight.armed = false;

        let mut inner = self.lock();
        match outcome {
            Ok(result) => {
                inner.state = SubmissionState::Succeeded(result.clone());
                Ok(result)
            }
            Err(err) => {
                inner.state = SubmissionState::Failed(err.clone());
                Err(err.into())
            }
        }
    }
}

/// Marks a submission as in flight until its outcome is recorded.
///
/// If the `submit` future is dropped first (timeout, `select!`, task abort),
/// the session goes back to `Idle` and the candidate is selected again.
struct InFlight<'a> {
    session: &'a SubmissionSession,
    candidate: UploadCandidate,
    armed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = self.session.lock();
        if inner.state.is_submitting() {
            inner.state = SubmissionState::Idle;
        }
        if inner.selected.is_none() {
            inner.selected = Some(self.candidate.clone());
        }
        debug!("submission dropped before completion");
    }
}

impl Default for SubmissionSession {
    fn default() -> Self {
        Self::new()
    }
}
