//! Raw configuration types for the timecard viewer.
//!
//! These structs mirror the YAML layout of `viewer.yaml` one-to-one and are
//! validated into a [`ViewerConfig`] by the loader.
//!
//! [`ViewerConfig`]: super::ViewerConfig

use serde::Deserialize;

/// Top-level shape of `viewer.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfigFile {
    /// Week window settings.
    pub week: WeekConfig,
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// The week window shown by default.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekConfig {
    /// Name of the weekday the visible week ends on (e.g. `sunday`).
    pub ending: String,
    /// Length of the default range in days.
    #[serde(default = "default_range_days")]
    pub days: u32,
}

/// Display settings for the weekly tables.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Whether date badges include the month field.
    #[serde(default = "default_show_month")]
    pub show_month: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_month: default_show_month(),
        }
    }
}

fn default_range_days() -> u32 {
    7
}

fn default_show_month() -> bool {
    true
}
