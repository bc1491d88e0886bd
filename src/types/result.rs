//! Classification payloads returned by the backend.

use super::class::ArrhythmiaClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One ranked candidate in [`ClassificationResult::top_predictions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub class: ArrhythmiaClass,
    pub description: String,
    pub confidence: f64,
}

/// Result of classifying a single ECG image.
///
/// Values are kept exactly as received: `top_predictions` is assumed to be
/// sorted by descending confidence and is never re-sorted, and confidences are
/// not clamped to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "class")]
    pub class: ArrhythmiaClass,
    pub description: String,
    pub confidence: f64,
    pub top_predictions: Vec<Prediction>,
}

impl ClassificationResult {
    /// The highest-ranked entry of `top_predictions`, if any.
    pub fn leading_prediction(&self) -> Option<&Prediction> {
        self.top_predictions.first()
    }
}

/// Class metadata served by `GET /classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCatalog {
    /// Model output index per class code. `None` when the backend has no model loaded.
    #[serde(default)]
    pub class_indices: Option<BTreeMap<String, u32>>,
    #[serde(default)]
    pub class_descriptions: BTreeMap<String, String>,
}

impl ClassCatalog {
    /// Class codes ordered by model output index; empty when indices are unknown.
    pub fn codes_by_index(&self) -> Vec<&str> {
        let Some(indices) = &self.class_indices else {
            return Vec::new();
        };
        let mut entries: Vec<(&str, u32)> =
            indices.iter().map(|(code, idx)| (code.as_str(), *idx)).collect();
        entries.sort_by_key(|(_, idx)| *idx);
        entries.into_iter().map(|(code, _)| code).collect()
    }
}

/// Per-file entry of a `POST /predict-batch/` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Classified {
        filename: Option<String>,
        #[serde(rename = "class")]
        class: ArrhythmiaClass,
        description: String,
        confidence: f64,
    },
    Failed {
        filename: Option<String>,
        error: String,
    },
}

impl BatchOutcome {
    pub fn filename(&self) -> Option<&str> {
        match self {
            BatchOutcome::Classified { filename, .. } | BatchOutcome::Failed { filename, .. } => {
                filename.as_deref()
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Classified { .. })
    }
}
