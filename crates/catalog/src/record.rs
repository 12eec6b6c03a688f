//! External catalog response shape (read-only).

use serde::{Deserialize, Serialize};

/// A physical measurement as the catalog reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    /// Unit symbol as reported (e.g. "cm", "kg").
    pub unit: String,
}

/// Hazardous-material attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazmatInfo {
    pub hazmat: bool,
    /// UN number, present only for hazmat products (e.g. "UN1993").
    #[serde(default)]
    pub un_number: Option<String>,
}

impl HazmatInfo {
    pub fn none() -> Self {
        Self {
            hazmat: false,
            un_number: None,
        }
    }
}

/// Product record as returned by the external catalog API.
///
/// Consumed read-only; inventory validation only ever asks for existence, the
/// richer fields feed packing/shipping concerns elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub length: Option<Measurement>,
    #[serde(default)]
    pub width: Option<Measurement>,
    #[serde(default)]
    pub height: Option<Measurement>,
    #[serde(default)]
    pub weight: Option<Measurement>,
    #[serde(default = "HazmatInfo::none")]
    pub hazmat: HazmatInfo,
}

impl ProductRecord {
    /// Minimal record with just the identifying fields.
    pub fn named(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            length: None,
            width: None,
            height: None,
            weight: None,
            hazmat: HazmatInfo::none(),
        }
    }
}
