//! Backend health.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Liveness of the classification backend, derived from one `GET /health` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Online,
    Degraded,
    Offline,
}

impl HealthStatus {
    /// Map a successfully parsed `/health` body onto a status.
    pub fn from_report(report: &HealthReport) -> Self {
        if report.status.as_deref() == Some("healthy") {
            HealthStatus::Online
        } else {
            HealthStatus::Degraded
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Online => "Online",
            HealthStatus::Degraded => "Degraded",
            HealthStatus::Offline => "Offline",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
