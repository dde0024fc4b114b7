//! Hours rendering functionality.
//!
//! This module formats an [`HoursAggregate`] as the compact cell text used
//! by the weekly tables: the classified total at one decimal place, with an
//! optional bracketed suffix listing tag-coded hours.

use rust_decimal::Decimal;

use super::HoursAggregate;

/// The display token for an aggregate holding no hours.
pub const ZERO_DISPLAY: &str = "";

/// Renders aggregated hours as a compact, human-readable string.
///
/// The classified total prints with one decimal place. When
/// `include_tag_breakdown` is set and tag-coded hours are present, a
/// bracketed suffix lists each tag total in tag order. An aggregate with
/// no hours renders as [`ZERO_DISPLAY`]; rendering never fails.
///
/// # Arguments
///
/// * `aggregate` - The totals to render
/// * `include_tag_breakdown` - Whether to append the per-tag suffix
///
/// # Examples
///
/// ```
/// use timecards_viewer::hours::{aggregate_hours, render_hours};
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
/// let aggregate = aggregate_hours(&records);
///
/// assert_eq!(render_hours(&aggregate, false), "8.0");
/// assert_eq!(render_hours(&aggregate, true), "8.0 [HOL:1.0]");
/// ```
pub fn render_hours(aggregate: &HoursAggregate, include_tag_breakdown: bool) -> String {
    let mut rendered = String::new();

    let class_total = aggregate.class_total();
    if class_total != Decimal::ZERO {
        rendered.push_str(&format!("{class_total:.1}"));
    }

    let has_tag_hours = aggregate.tag_totals.values().any(|hours| *hours != Decimal::ZERO);
    if include_tag_breakdown && has_tag_hours {
        let markers: Vec<String> = aggregate
            .tag_totals
            .iter()
            .map(|(tag, hours)| format!("{tag}:{hours:.1}"))
            .collect();

        if !rendered.is_empty() {
            rendered.push(' ');
        }
        rendered.push_str(&format!("[{}]", markers.join(", ")));
    }

    rendered
}
