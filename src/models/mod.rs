//! Core data models for the timecard viewer.
//!
//! This module contains all the domain models used throughout the viewer.

mod date_range;
mod hours;
mod timecard;

pub use date_range::{DateRange, format_date_key};
pub use hours::{HourRecord, PayClass};
pub use timecard::{Timecard, TimecardCostCode, TimecardEmployee, TimecardStatus};
