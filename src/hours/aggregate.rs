//! Hours aggregation functionality.
//!
//! This module provides the pure reduction from hour records to totals:
//! tag-coded hours accumulate per tag, everything else accumulates per pay
//! classification. The reduction is order-independent and never fails.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::models::{HourRecord, PayClass};

/// The totals produced by aggregating a set of hour records.
///
/// Created fresh on each aggregation call; a plain value with no further
/// lifecycle. Summing `by_class` and `tag_totals` together always equals
/// the sum of hours across the input records: every record lands in
/// exactly one bucket.
///
/// # Example
///
/// ```
/// use timecards_viewer::hours::{HoursAggregate, aggregate_hours};
/// use timecards_viewer::models::PayClass;
///
/// let aggregate = aggregate_hours(&[]);
/// assert!(aggregate.is_zero());
/// assert_eq!(aggregate.class_hours(PayClass::Regular), rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoursAggregate {
    /// Total hours per pay classification (untagged records only).
    pub by_class: HashMap<PayClass, Decimal>,
    /// Total hours per tag code (tagged records only), in tag order.
    pub tag_totals: BTreeMap<String, Decimal>,
}

impl HoursAggregate {
    /// Total hours recorded against one pay classification.
    pub fn class_hours(&self, class: PayClass) -> Decimal {
        self.by_class.get(&class).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of the totals across all pay classifications.
    pub fn class_total(&self) -> Decimal {
        self.by_class.values().copied().sum()
    }

    /// Total hours recorded against one tag code.
    pub fn tag_hours(&self, tag: &str) -> Decimal {
        self.tag_totals.get(tag).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of the totals across all tag codes.
    pub fn tag_total(&self) -> Decimal {
        self.tag_totals.values().copied().sum()
    }

    /// Sum of every hour in the aggregate, classified or tagged.
    pub fn grand_total(&self) -> Decimal {
        self.class_total() + self.tag_total()
    }

    /// Whether the aggregate holds no hours at all.
    pub fn is_zero(&self) -> bool {
        self.class_total() == Decimal::ZERO && self.tag_total() == Decimal::ZERO
    }
}

/// Aggregates hour records into per-classification and per-tag totals.
///
/// A record carrying a tag code contributes its hours only to that tag's
/// total; every other record contributes to its pay classification's
/// total. Unrecognized classifications arrive as [`PayClass::Other`] and
/// accumulate there like any other class.
///
/// # Arguments
///
/// * `records` - Any finite sequence of hour records, in any order
///
/// # Returns
///
/// The aggregate totals. Empty input yields an all-zero aggregate; the
/// function has no failure modes.
///
/// # Examples
///
/// ```
/// use timecards_viewer::hours::aggregate_hours;
/// use timecards_viewer::models::{HourRecord, PayClass};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let records = vec![
///     HourRecord {
///         date,
///         hours: Decimal::from(8),
///         pay_class: PayClass::Regular,
///         tag_code: None,
///         cost_code_id: "cc_001".to_string(),
///     },
///     HourRecord {
///         date,
///         hours: Decimal::from(1),
///         pay_class: PayClass::Regular,
///         tag_code: Some("HOL".to_string()),
///         cost_code_id: "cc_001".to_string(),
///     },
/// ];
///
/// let aggregate = aggregate_hours(&records);
/// assert_eq!(aggregate.class_hours(PayClass::Regular), Decimal::from(8));
/// assert_eq!(aggregate.tag_hours("HOL"), Decimal::from(1));
/// assert_eq!(aggregate.grand_total(), Decimal::from(9));
/// ```
pub fn aggregate_hours<'a, I>(records: I) -> HoursAggregate
where
    I: IntoIterator<Item = &'a HourRecord>,
{
    let mut aggregate = HoursAggregate::default();

    for record in records {
        match record.tag() {
            Some(tag) => {
                *aggregate
                    .tag_totals
                    .entry(tag.to_string())
                    .or_insert(Decimal::ZERO) += record.hours;
            }
            None => {
                *aggregate
                    .by_class
                    .entry(record.pay_class)
                    .or_insert(Decimal::ZERO) += record.hours;
            }
        }
    }

    aggregate
}
