//! Presentational formatting for the weekly tables.
//!
//! Pure helpers that turn domain values into the strings the UI places
//! into its layout: date badges for column headers and per-row hour cells
//! for cost codes and employees.

mod badge;
mod row;

pub use badge::DateBadge;
pub use row::{CostCodeRow, EmployeeRow, records_for_cost_code, week_badges};
