//! 类型系统模块：心电分类请求与响应的核心数据类型。
//!
//! # Types Module
//!
//! Strongly-typed representations of everything that crosses the wire between
//! this client and the classification backend.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ArrhythmiaClass`] | One of the six recognized beat class codes |
//! | [`ClassificationResult`] | Predicted class, confidence and top predictions |
//! | [`UploadCandidate`] | A selected file waiting to be submitted |
//! | [`HealthStatus`] | Online / Degraded / Offline |
//! | [`ClassCatalog`] | Class indices and descriptions served by the backend |
//! | [`BatchOutcome`] | Per-file result of a batch prediction |
//!
//! ## Example
//!
//! ```rust
//! use ecg_classify::types::ArrhythmiaClass;
//!
//! let class = ArrhythmiaClass::from_code("V").unwrap();
//! assert_eq!(class.description(), "Premature ventricular contraction");
//! ```

pub mod class;
pub mod health;
pub mod result;
pub mod upload;

pub use class::ArrhythmiaClass;
pub use health::{HealthReport, HealthStatus};
pub use result::{BatchOutcome, ClassCatalog, ClassificationResult, Prediction};
pub use upload::UploadCandidate;
