//! 结果展示：把分类结果格式化为终端文本。
//!
//! Display surfaces.
//!
//! Pure functions from results to text. Nothing here re-sorts, clamps or
//! otherwise changes the values it is given; bar widths are the only thing
//! bounded, and only for drawing.

mod chart;

pub use chart::{chart_slices, ChartSlice};

use crate::types::{BatchOutcome, ClassCatalog, ClassificationResult, HealthStatus};
use std::collections::BTreeMap;
use std::fmt::Write as _;

pub const DISCLAIMER: &str = "This classification is based on the uploaded ECG image. For medical advice, please consult a healthcare professional.";

const BAR_WIDTH: usize = 30;

/// `confidence * 100` with `decimals` places, followed by `%`.
///
/// ```rust
/// use ecg_classify::display::format_percent;
///
/// assert_eq!(format_percent(0.7, 1), "70.0%");
/// assert_eq!(format_percent(0.945, 2), "94.50%");
/// ```
pub fn format_percent(confidence: f64, decimals: usize) -> String {
    format!("{}%", format_fixed(confidence * 100.0, decimals))
}

/// `value` with exactly `decimals` fractional digits.
///
/// Rounds half away from zero on the exact decimal value of the `f64`, so
/// `6.25` becomes `"6.3"` where `{:.1}` would give `"6.2"`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // 1074 fractional digits hold any f64 exactly.
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.iter().copied().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();
    if frac.get(decimals).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|d| *d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| *d as char));
    }
    out
}

/// Share of `value` in `total` as a percentage; `0.0` when `total` is zero.
pub fn distribution_percentage(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    value as f64 / total as f64 * 100.0
}

/// File size in kilobytes with two decimals, e.g. `"12.50 KB"`.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Coarse reading of a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            ConfidenceLevel::High
        } else if confidence > 0.4 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

fn bar(fraction: f64, width: usize) -> String {
    let filled = if fraction.is_finite() {
        (fraction * width as f64).round().clamp(0.0, width as f64) as usize
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Headline card plus one bar per top prediction, in received order.
pub fn render_result(result: &ClassificationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Classification Result");
    let _ = writeln!(out, "  {}: {}", result.class.code(), result.description);
    let _ = writeln!(out, "  Confidence: {}", format_percent(result.confidence, 2));
    out.push('\n');

    let _ = writeln!(out, "Top Predictions");
    for pred in &result.top_predictions {
        let _ = writeln!(
            out,
            "  {}  {}  {:>6}  {}",
            pred.class.code(),
            bar(pred.confidence, BAR_WIDTH),
            format_percent(pred.confidence, 1),
            pred.description
        );
    }
    out.push('\n');
    let _ = writeln!(out, "{}", DISCLAIMER);
    out
}

/// Result card, class explanation and probability distribution.
pub fn render_details(result: &ClassificationResult) -> String {
    let mut out = render_result(result);
    out.push('\n');

    let level = ConfidenceLevel::from_confidence(result.confidence);
    let _ = writeln!(out, "Confidence Level: {}", level.as_str());
    let _ = writeln!(out, "  {}", bar(result.confidence, BAR_WIDTH));
    out.push('\n');

    let _ = writeln!(out, "What This Means");
    let _ = writeln!(out, "  {}", result.class.explanation());
    out.push('\n');

    let _ = writeln!(out, "Probability Distribution");
    for slice in chart_slices(result) {
        let _ = writeln!(out, "  {:<45} {}%", slice.label, format_fixed(slice.value, 2));
    }
    out
}

pub fn render_health(status: HealthStatus) -> String {
    format!("API Status: {}", status)
}

pub fn render_catalog(catalog: &ClassCatalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Arrhythmia Classes");
    for (code, description) in &catalog.class_descriptions {
        let index = catalog
            .class_indices
            .as_ref()
            .and_then(|m| m.get(code))
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  [{:>2}] {}: {}", index, code, description);
    }
    if catalog.class_indices.is_none() {
        let _ = writeln!(out, "  (model not loaded; class indices unavailable)");
    }
    out
}

/// One line per file, followed by the class distribution of the successes.
pub fn render_batch(outcomes: &[BatchOutcome]) -> String {
    let mut out = String::new();
    let mut counts: BTreeMap<&'static str, u64> = BTreeMap::new();
    let _ = writeln!(out, "Batch Results");
    for outcome in outcomes {
        let name = outcome.filename().unwrap_or("<unnamed>");
        match outcome {
            BatchOutcome::Classified {
                class,
                description,
                confidence,
                ..
            } => {
                *counts.entry(class.code()).or_default() += 1;
                let _ = writeln!(
                    out,
                    "  {}  {}: {} ({})",
                    name,
                    class.code(),
                    description,
                    format_percent(*confidence, 2)
                );
            }
            BatchOutcome::Failed { error, .. } => {
                let _ = writeln!(out, "  {}  error: {}", name, error);
            }
        }
    }

    let total: u64 = counts.values().sum();
    if total > 0 {
        out.push('\n');
        let _ = writeln!(out, "Class Distribution");
        for (code, count) in &counts {
            let pct = distribution_percentage(*count, total);
            let _ = writeln!(
                out,
                "  {}  {}  {} ({}%)",
                code,
                bar(pct / 100.0, BAR_WIDTH),
                count,
                format_fixed(pct, 1)
            );
        }
    }
    out
}
