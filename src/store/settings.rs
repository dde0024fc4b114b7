//! Viewer settings state and its reducer.
//!
//! The settings slice holds the user's current selections: the date range
//! the tables cover and the week-ending date the range is anchored to.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;
use crate::models::DateRange;

/// State for the settings slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    /// The date range currently shown by the timecard tables.
    pub timecard_date_range: DateRange,
    /// The week-ending date the user has selected.
    pub week_ending: NaiveDate,
}

impl SettingsState {
    /// Derives the initial settings from configuration and today's date.
    ///
    /// The week-ending date is the first date on or after `today` that
    /// falls on the configured weekday; the range ends there and spans the
    /// configured number of days.
    ///
    /// # Example
    ///
    /// ```
    /// use timecards_viewer::config::ViewerConfig;
    /// use timecards_viewer::store::SettingsState;
    /// use chrono::NaiveDate;
    ///
    /// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    /// let settings = SettingsState::initial(&ViewerConfig::default(), wednesday);
    /// assert_eq!(settings.week_ending, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    /// ```
    pub fn initial(config: &ViewerConfig, today: NaiveDate) -> Self {
        let target = config.week_ending().num_days_from_monday() as i64;
        let current = today.weekday().num_days_from_monday() as i64;
        let days_ahead = (target - current).rem_euclid(7) as u64;

        let week_ending = today
            .checked_add_days(Days::new(days_ahead))
            .unwrap_or(today);

        SettingsState {
            timecard_date_range: DateRange::ending_at(week_ending, config.range_days()),
            week_ending,
        }
    }
}

/// Actions on the settings slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Replace the date range shown by the timecard tables.
    SetTimecardDateRange(DateRange),
    /// Replace the selected week-ending date.
    SetWeekEnding(NaiveDate),
}

/// Reduces the settings slice with one action.
///
/// Pure value-in/value-out; each action replaces only the field it names.
pub fn reduce_settings(state: SettingsState, action: SettingsAction) -> SettingsState {
    match action {
        SettingsAction::SetTimecardDateRange(range) => SettingsState {
            timecard_date_range: range,
            ..state
        },
        SettingsAction::SetWeekEnding(date) => SettingsState {
            week_ending: date,
            ..state
        },
    }
}
