//! Fetched timecard-employee state and its reducer.
//!
//! Tracks one fetch slice: the lifecycle status of the most recent fetch
//! and the employees it produced. The reducer is a pure function; a failed
//! fetch keeps the previously loaded employees on screen.

use serde::{Deserialize, Serialize};

use crate::models::TimecardEmployee;

/// The lifecycle of the most recent fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch has started and has not yet finished.
    Loading,
    /// The last fetch completed and its payload is loaded.
    Loaded,
    /// The last fetch failed; prior data remains displayed.
    Failed,
}

/// State for the timecard-employees slice.
///
/// # Example
///
/// ```
/// use timecards_viewer::store::{FetchStatus, TimecardEmployeesState};
///
/// let state = TimecardEmployeesState::default();
/// assert_eq!(state.status, FetchStatus::Idle);
/// assert!(state.employees.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecardEmployeesState {
    /// Status of the most recent fetch.
    pub status: FetchStatus,
    /// The employees from the last completed fetch.
    pub employees: Vec<TimecardEmployee>,
}

/// Actions on the timecard-employees slice.
///
/// A fetch dispatches [`TimecardEmployeesAction::FetchStart`] followed by
/// exactly one terminal action: complete (with the payload) or error
/// (carrying none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimecardEmployeesAction {
    /// A fetch has started.
    FetchStart,
    /// The fetch completed with the given employees.
    FetchComplete(Vec<TimecardEmployee>),
    /// The fetch failed.
    FetchError,
}

/// Reduces the timecard-employees slice with one action.
///
/// Pure value-in/value-out: the new state is built from the given state
/// and action alone. Start and error keep the previously fetched
/// employees so the tables continue to show the last good data.
pub fn reduce_timecard_employees(
    state: TimecardEmployeesState,
    action: TimecardEmployeesAction,
) -> TimecardEmployeesState {
    match action {
        TimecardEmployeesAction::FetchStart => TimecardEmployeesState {
            status: FetchStatus::Loading,
            ..state
        },
        TimecardEmployeesAction::FetchComplete(employees) => TimecardEmployeesState {
            status: FetchStatus::Loaded,
            employees,
        },
        TimecardEmployeesAction::FetchError => TimecardEmployeesState {
            status: FetchStatus::Failed,
            ..state
        },
    }
}
