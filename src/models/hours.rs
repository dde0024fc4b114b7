//! Hour record models for the timecard viewer.
//!
//! This module contains the [`PayClass`] classification enum and the
//! [`HourRecord`] type: the immutable per-day hour entries produced by the
//! data-fetch layer and consumed read-only by the aggregation core.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the pay classification of a set of worked hours.
///
/// The upstream service encodes classifications as lowercase strings
/// (`"regular"`, `"overtime"`, `"doubletime"`). Any value outside that set
/// deserializes to [`PayClass::Other`] so that partial or malformed upstream
/// data still renders instead of failing.
///
/// # Example
///
/// ```
/// use timecards_viewer::models::PayClass;
///
/// let class: PayClass = serde_json::from_str("\"overtime\"").unwrap();
/// assert_eq!(class, PayClass::Overtime);
///
/// let class: PayClass = serde_json::from_str("\"travel_time\"").unwrap();
/// assert_eq!(class, PayClass::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayClass {
    /// Regular (straight-time) hours.
    Regular,
    /// Overtime hours.
    Overtime,
    /// Double-time hours.
    Doubletime,
    /// Fallback bucket for classifications this viewer does not recognize.
    #[serde(other)]
    Other,
}

impl fmt::Display for PayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayClass::Regular => write!(f, "Regular"),
            PayClass::Overtime => write!(f, "Overtime"),
            PayClass::Doubletime => write!(f, "Doubletime"),
            PayClass::Other => write!(f, "Other"),
        }
    }
}

/// A single per-day hour entry for one employee against one cost code.
///
/// Records are immutable once fetched. A record either carries a tag code
/// (holiday, sick, and similar markers tracked outside the pay
/// classification totals) or contributes to its pay classification.
///
/// # Example
///
/// ```
/// use timecards_viewer::models::{HourRecord, PayClass};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = HourRecord {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     hours: Decimal::from_str("8.0").unwrap(),
///     pay_class: PayClass::Regular,
///     tag_code: None,
///     cost_code_id: "cc_001".to_string(),
/// };
/// assert!(record.tag().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRecord {
    /// The date the hours were worked (the per-day grouping key).
    pub date: NaiveDate,
    /// The number of hours worked.
    #[serde(with = "rust_decimal::serde::float")]
    pub hours: Decimal,
    /// The pay classification of the hours.
    pub pay_class: PayClass,
    /// Optional special-purpose tag code (e.g. holiday, sick).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_code: Option<String>,
    /// The cost code this record belongs to.
    #[serde(default)]
    pub cost_code_id: String,
}

impl HourRecord {
    /// Returns the effective tag code, if any.
    ///
    /// The upstream service serializes untagged records with an empty-string
    /// tag, so an empty tag counts as no tag.
    pub fn tag(&self) -> Option<&str> {
        self.tag_code.as_deref().filter(|tag| !tag.is_empty())
    }
}
