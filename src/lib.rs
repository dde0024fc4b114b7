//! Client data layer for a weekly timecard viewer
//!
//! This crate provides the data-shaping side of a timecard-viewing web
//! application: typed timecard/cost-code/employee models, the hours
//! aggregation and rendering core, pure-reducer state management, and the
//! async collaborator boundary used to fetch timecard employees for a
//! date range.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod hours;
pub mod models;
pub mod store;
pub mod view;
