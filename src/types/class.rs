//! Arrhythmia class codes.
//!
//! The six codes and their descriptions are a wire contract with the backend
//! and must match it exactly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Cardiac rhythm category identified by a single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArrhythmiaClass {
    /// N: Normal beat
    Normal,
    /// V: Premature ventricular contraction
    PrematureVentricular,
    /// F: Fusion of ventricular and normal beat
    Fusion,
    /// S: Supraventricular premature beat
    Supraventricular,
    /// Q: Unclassifiable beat
    Unclassifiable,
    /// M: Myocardial infarction
    MyocardialInfarction,
}

impl ArrhythmiaClass {
    /// All classes, in the order the backend documents them.
    pub const ALL: [ArrhythmiaClass; 6] = [
        ArrhythmiaClass::Normal,
        ArrhythmiaClass::PrematureVentricular,
        ArrhythmiaClass::Fusion,
        ArrhythmiaClass::Supraventricular,
        ArrhythmiaClass::Unclassifiable,
        ArrhythmiaClass::MyocardialInfarction,
    ];

    /// Returns the single-letter wire code (e.g., `"N"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Normal => "N",
            Self::PrematureVentricular => "V",
            Self::Fusion => "F",
            Self::Supraventricular => "S",
            Self::Unclassifiable => "Q",
            Self::MyocardialInfarction => "M",
        }
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal beat",
            Self::PrematureVentricular => "Premature ventricular contraction",
            Self::Fusion => "Fusion of ventricular and normal beat",
            Self::Supraventricular => "Supraventricular premature beat",
            Self::Unclassifiable => "Unclassifiable beat",
            Self::MyocardialInfarction => "Myocardial infarction",
        }
    }

    /// Longer plain-language explanation shown on the detailed result view.
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Normal => "The ECG shows a normal heart rhythm pattern with regular beats and no abnormalities.",
            Self::Fusion => "The ECG shows fusion beats, which occur when a normal beat and a ventricular beat happen simultaneously.",
            Self::MyocardialInfarction => "The ECG shows patterns consistent with myocardial infarction (heart attack), indicating damage to the heart muscle.",
            Self::Unclassifiable => "The ECG shows an unclassifiable beat pattern that doesn't fit standard categories.",
            Self::Supraventricular => "The ECG shows supraventricular premature beats, which originate above the ventricles.",
            Self::PrematureVentricular => "The ECG shows premature ventricular contractions, which are early beats originating from the ventricles.",
        }
    }

    /// Parse a wire code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::Normal),
            "V" => Some(Self::PrematureVentricular),
            "F" => Some(Self::Fusion),
            "S" => Some(Self::Supraventricular),
            "Q" => Some(Self::Unclassifiable),
            "M" => Some(Self::MyocardialInfarction),
            _ => None,
        }
    }

    /// `"{code}: {description}"`, the label used on cards and chart slices.
    pub fn label(&self) -> String {
        format!("{}: {}", self.code(), self.description())
    }
}

impl fmt::Display for ArrhythmiaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ArrhythmiaClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ArrhythmiaClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        ArrhythmiaClass::from_code(&code).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown arrhythmia class code '{}', expected one of N, V, F, S, Q, M",
                code
            ))
        })
    }
}
