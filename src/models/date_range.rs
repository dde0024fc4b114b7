//! Date range model for the timecard viewer.
//!
//! A [`DateRange`] selects the window of dates shown by the weekly views.
//! Ranges are converted to a pair of primitive date-key strings before
//! being handed to the data-fetch collaborator.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// Formats a date as the canonical date-key string (`YYYY-MM-DD`).
///
/// This is the grouping key carried by hour records and the wire format
/// the fetch collaborator expects for range boundaries.
///
/// # Example
///
/// ```
/// use timecards_viewer::models::format_date_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(format_date_key(date), "2024-01-07");
/// ```
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// An inclusive range of dates selected for viewing.
///
/// # Example
///
/// ```
/// use timecards_viewer::models::DateRange;
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let week = DateRange::week_ending(sunday);
/// assert_eq!(week.days().len(), 7);
/// assert_eq!(week.date_keys(), ("2024-01-01".to_string(), "2024-01-07".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date in the range.
    pub start: NaiveDate,
    /// The last date in the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, validating that `start` is not after `end`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidRange`] when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ViewerResult<Self> {
        if start > end {
            return Err(ViewerError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// The seven-day range ending on `end`.
    pub fn week_ending(end: NaiveDate) -> Self {
        Self::ending_at(end, 7)
    }

    /// The `days`-long range ending on `end`.
    ///
    /// A zero length is treated as one day.
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        let span = days.max(1) - 1;
        let start = end
            .checked_sub_days(Days::new(u64::from(span)))
            .unwrap_or(NaiveDate::MIN);
        DateRange { start, end }
    }

    /// The ordered dates in the range, one per table column.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start
            .iter_days()
            .take_while(|date| *date <= self.end)
            .collect()
    }

    /// Checks whether a date falls within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Converts the range to its `(start, end)` date-key strings.
    ///
    /// This is the form handed to the data-fetch collaborator.
    pub fn date_keys(&self) -> (String, String) {
        (format_date_key(self.start), format_date_key(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_accepts_ordered_dates() {
        let range = DateRange::new(make_date(2024, 1, 1), make_date(2024, 1, 7)).unwrap();
        assert_eq!(range.start, make_date(2024, 1, 1));
        assert_eq!(range.end, make_date(2024, 1, 7));
    }

    #[test]
    fn test_new_accepts_single_day_range() {
        let range = DateRange::new(make_date(2024, 1, 1), make_date(2024, 1, 1)).unwrap();
        assert_eq!(range.days(), vec![make_date(2024, 1, 1)]);
    }

    #[test]
    fn test_new_rejects_inverted_dates() {
        let result = DateRange::new(make_date(2024, 1, 7), make_date(2024, 1, 1));
        assert!(matches!(
            result,
            Err(ViewerError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_week_ending_spans_seven_days() {
        let range = DateRange::week_ending(make_date(2024, 1, 7));
        assert_eq!(range.start, make_date(2024, 1, 1));
        assert_eq!(range.end, make_date(2024, 1, 7));
        assert_eq!(range.days().len(), 7);
    }

    #[test]
    fn test_week_ending_crosses_month_boundary() {
        let range = DateRange::week_ending(make_date(2024, 2, 3));
        assert_eq!(range.start, make_date(2024, 1, 28));
    }

    #[test]
    fn test_ending_at_clamps_zero_days_to_one() {
        let range = DateRange::ending_at(make_date(2024, 1, 7), 0);
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_ending_at_two_week_range() {
        let range = DateRange::ending_at(make_date(2024, 1, 14), 14);
        assert_eq!(range.start, make_date(2024, 1, 1));
        assert_eq!(range.days().len(), 14);
    }

    #[test]
    fn test_days_are_ordered_and_inclusive() {
        let range = DateRange::week_ending(make_date(2024, 1, 7));
        let days = range.days();
        assert_eq!(days.first(), Some(&make_date(2024, 1, 1)));
        assert_eq!(days.last(), Some(&make_date(2024, 1, 7)));
        for pair in days.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_contains_is_inclusive_of_bounds() {
        let range = DateRange::week_ending(make_date(2024, 1, 7));
        assert!(range.contains(make_date(2024, 1, 1)));
        assert!(range.contains(make_date(2024, 1, 7)));
        assert!(!range.contains(make_date(2024, 1, 8)));
        assert!(!range.contains(make_date(2023, 12, 31)));
    }

    #[test]
    fn test_date_keys_format() {
        let range = DateRange::week_ending(make_date(2024, 1, 7));
        let (start_key, end_key) = range.date_keys();
        assert_eq!(start_key, "2024-01-01");
        assert_eq!(end_key, "2024-01-07");
    }

    #[test]
    fn test_format_date_key_pads_month_and_day() {
        assert_eq!(format_date_key(make_date(2024, 3, 5)), "2024-03-05");
        assert_eq!(format_date_key(make_date(2024, 11, 25)), "2024-11-25");
    }

    #[test]
    fn test_serialization_round_trip() {
        let range = DateRange::week_ending(make_date(2024, 1, 7));
        let json = serde_json::to_string(&range).unwrap();
        assert!(json.contains("\"start\":\"2024-01-01\""));
        assert!(json.contains("\"end\":\"2024-01-07\""));

        let back: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
