//! Configuration loading and management for the timecard viewer.
//!
//! This module provides functionality to load the viewer configuration from
//! a YAML file: the default week window and table display settings.
//!
//! # Example
//!
//! ```no_run
//! use timecards_viewer::config::ViewerConfig;
//!
//! let config = ViewerConfig::load("./config").unwrap();
//! println!("Week ends on {}", config.week_ending());
//! ```

mod loader;
mod types;

pub use loader::ViewerConfig;
pub use types::{DisplayConfig, ViewerConfigFile, WeekConfig};
