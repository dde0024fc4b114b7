//! Explicit application state for the timecard viewer.
//!
//! The viewer keeps its state in a plain [`Store`] value that callers own
//! and pass where needed. Updates flow through [`Store::dispatch`] with
//! tagged [`Action`] values, routed to pure per-slice reducer functions.
//! There are no ambient singletons: constructing two stores gives two
//! fully independent states.

mod settings;
mod timecard_employees;

pub use settings::{SettingsAction, SettingsState, reduce_settings};
pub use timecard_employees::{
    FetchStatus, TimecardEmployeesAction, TimecardEmployeesState, reduce_timecard_employees,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;

/// The root application state.
///
/// # Example
///
/// ```
/// use timecards_viewer::config::ViewerConfig;
/// use timecards_viewer::store::{Action, SettingsAction, Store};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let mut store = Store::initial(&ViewerConfig::default(), today);
///
/// let new_ending = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
/// store.dispatch(Action::Settings(SettingsAction::SetWeekEnding(new_ending)));
/// assert_eq!(store.settings.week_ending, new_ending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// The settings slice.
    pub settings: SettingsState,
    /// The timecard-employees fetch slice.
    pub timecard_employees: TimecardEmployeesState,
}

/// A tagged action routed to one slice's reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// An action on the settings slice.
    Settings(SettingsAction),
    /// An action on the timecard-employees slice.
    TimecardEmployees(TimecardEmployeesAction),
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::Settings(action)
    }
}

impl From<TimecardEmployeesAction> for Action {
    fn from(action: TimecardEmployeesAction) -> Self {
        Action::TimecardEmployees(action)
    }
}

impl Store {
    /// Creates a store with the given settings and an idle fetch slice.
    pub fn new(settings: SettingsState) -> Self {
        Store {
            settings,
            timecard_employees: TimecardEmployeesState::default(),
        }
    }

    /// Creates a store with settings derived from configuration and
    /// today's date.
    pub fn initial(config: &ViewerConfig, today: NaiveDate) -> Self {
        Self::new(SettingsState::initial(config, today))
    }

    /// Applies one action through the matching slice reducer.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Settings(action) => {
                self.settings = reduce_settings(self.settings, action);
            }
            Action::TimecardEmployees(action) => {
                let state = std::mem::take(&mut self.timecard_employees);
                self.timecard_employees = reduce_timecard_employees(state, action);
            }
        }
    }
}
