//! Hours aggregation and rendering for the timecard viewer.
//!
//! This is the computational core of the crate: reducing a set of per-day
//! hour records into totals per pay classification and per tag code, and
//! formatting those totals for tabular display.
//!
//! The row views drive it in two steps: filter the hour records down to the
//! slice a cell covers, aggregate that slice with [`aggregate_hours`], then
//! produce the cell text with [`render_hours`].

mod aggregate;
mod render;

pub use aggregate::{HoursAggregate, aggregate_hours};
pub use render::{ZERO_DISPLAY, render_hours};
