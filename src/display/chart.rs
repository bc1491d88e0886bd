use crate::types::{ArrhythmiaClass, ClassificationResult};

/// One slice of the top-prediction share chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub class: ArrhythmiaClass,
    /// `"{code}: {description}"` using the description the backend sent.
    pub label: String,
    /// Confidence scaled to percent.
    pub value: f64,
}

/// Slices in the order of `top_predictions`. Values are not normalized, so
/// they need not sum to 100.
pub fn chart_slices(result: &ClassificationResult) -> Vec<ChartSlice> {
    result
        .top_predictions
        .iter()
        .map(|pred| ChartSlice {
            class: pred.class,
            label: format!("{}: {}", pred.class.code(), pred.description),
            value: pred.confidence * 100.0,
        })
        .collect()
}
