//! Date badge formatting.
//!
//! A date badge is the small stacked header above each table column:
//! abbreviated month (optional), day-of-month number, abbreviated weekday.

use chrono::{Datelike, NaiveDate};

/// The textual fields of a date badge.
///
/// Pure function of the date and the `show_month` toggle; the fields are
/// placed into the layout independently.
///
/// # Example
///
/// ```
/// use timecards_viewer::view::DateBadge;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let badge = DateBadge::new(date, true);
/// assert_eq!(badge.month.as_deref(), Some("Jan"));
/// assert_eq!(badge.day, "1");
/// assert_eq!(badge.weekday, "Mon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBadge {
    /// Abbreviated month name, present when the badge shows the month.
    pub month: Option<String>,
    /// Day-of-month number, without zero padding.
    pub day: String,
    /// Abbreviated weekday name.
    pub weekday: String,
}

impl DateBadge {
    /// Builds the badge fields for a date.
    pub fn new(date: NaiveDate, show_month: bool) -> Self {
        DateBadge {
            month: show_month.then(|| date.format("%b").to_string()),
            day: date.day().to_string(),
            weekday: date.format("%a").to_string(),
        }
    }
}
