//! Timecard entity models for the timecard viewer.
//!
//! This module contains the [`Timecard`] type and the entities nested under
//! it: cost codes and per-employee hour sets, as served by the upstream
//! timecards service for a weekly view.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::HourRecord;

/// The review state of a timecard, derived from its approval flags.
///
/// # Example
///
/// ```
/// use timecards_viewer::models::TimecardStatus;
///
/// let status = TimecardStatus::Pending;
/// assert_eq!(status.to_string(), "Pending");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimecardStatus {
    /// Not yet approved by the foreman.
    Pending,
    /// Approved by the foreman, awaiting review.
    Approved,
    /// Reviewed, awaiting payroll acceptance.
    Reviewed,
    /// Accepted by payroll.
    Accepted,
    /// Rejected and returned to the foreman.
    Rejected,
}

impl fmt::Display for TimecardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimecardStatus::Pending => write!(f, "Pending"),
            TimecardStatus::Approved => write!(f, "Approved"),
            TimecardStatus::Reviewed => write!(f, "Reviewed"),
            TimecardStatus::Accepted => write!(f, "Accepted"),
            TimecardStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A cost code line on a timecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecardCostCode {
    /// Unique identifier of this timecard cost code line.
    pub id: String,
    /// The timecard this line belongs to.
    pub timecard_id: String,
    /// The cost code itself (e.g. "101-200").
    pub code: String,
    /// Human-readable description of the cost code.
    pub description: String,
    /// Quantity installed/produced against the code.
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    /// Unit of measure for the quantity.
    pub unit: String,
}

/// One employee's entry on a timecard, with their per-day hour records.
///
/// This is the unit returned by the data-fetch collaborator when loading
/// a date range for the weekly views.
///
/// # Example
///
/// ```
/// use timecards_viewer::models::TimecardEmployee;
///
/// let json = r#"{
///     "id": "tce_001",
///     "timecard_id": "tc_001",
///     "employee_id": "emp_001",
///     "employee_code": "E100",
///     "employee_name": "Sam Carter",
///     "pay_class_code": "CARP1",
///     "hours": []
/// }"#;
/// let employee: TimecardEmployee = serde_json::from_str(json).unwrap();
/// assert_eq!(employee.employee_code, "E100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecardEmployee {
    /// Unique identifier of this timecard employee entry.
    pub id: String,
    /// The timecard this entry belongs to.
    pub timecard_id: String,
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's short code.
    pub employee_code: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's pay class code (e.g. "CARP1").
    pub pay_class_code: String,
    /// The employee's hour records for the fetched range.
    #[serde(default)]
    pub hours: Vec<HourRecord>,
}

impl TimecardEmployee {
    /// Returns the employee's hour records for a single date.
    pub fn hours_on(&self, date: NaiveDate) -> impl Iterator<Item = &HourRecord> {
        self.hours.iter().filter(move |record| record.date == date)
    }
}

/// A single timecard: one foreman's daily record of cost codes and
/// employee hours on a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timecard {
    /// Unique identifier of the timecard.
    pub id: String,
    /// The job the timecard was filed against.
    pub job_id: String,
    /// The foreman who filed the timecard.
    pub foreman_id: String,
    /// The work date the timecard covers.
    pub date: NaiveDate,
    /// Revision number, incremented on each edit.
    pub revision: i32,
    /// Whether the foreman has approved the timecard.
    pub is_approved: bool,
    /// Whether the timecard has been reviewed.
    pub is_reviewed: bool,
    /// Whether payroll has accepted the timecard.
    pub is_accepted: bool,
    /// Whether the timecard has been rejected.
    pub is_rejected: bool,
    /// The cost code lines on the timecard.
    #[serde(default)]
    pub cost_codes: Vec<TimecardCostCode>,
    /// The employee entries on the timecard.
    #[serde(default)]
    pub employees: Vec<TimecardEmployee>,
}

impl Timecard {
    /// Derives the display status from the approval flags.
    ///
    /// Later workflow stages win: a rejected timecard reads as rejected
    /// even if it was previously approved and reviewed.
    pub fn status(&self) -> TimecardStatus {
        if self.is_rejected {
            TimecardStatus::Rejected
        } else if self.is_accepted {
            TimecardStatus::Accepted
        } else if self.is_reviewed {
            TimecardStatus::Reviewed
        } else if self.is_approved {
            TimecardStatus::Approved
        } else {
            TimecardStatus::Pending
        }
    }
}
