//! Configuration loading functionality.
//!
//! This module provides the [`ViewerConfig`] type for loading the viewer
//! configuration from a YAML file.

use chrono::Weekday;
use std::fs;
use std::path::Path;

use crate::error::{ViewerError, ViewerResult};

use super::types::ViewerConfigFile;

/// Validated viewer configuration.
///
/// The configuration is read from `viewer.yaml` in a configuration
/// directory and validated on load: the week-ending weekday must be a
/// recognizable weekday name and the range length must be at least one
/// day.
///
/// # Example
///
/// ```no_run
/// use timecards_viewer::config::ViewerConfig;
///
/// let config = ViewerConfig::load("./config")?;
/// println!("Week ends on {}", config.week_ending());
/// # Ok::<(), timecards_viewer::error::ViewerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    week_ending: Weekday,
    range_days: u32,
    show_month: bool,
}

impl ViewerConfig {
    /// Loads configuration from `viewer.yaml` in the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ViewerConfig` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The week-ending weekday or range length fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> ViewerResult<Self> {
        let file_path = path.as_ref().join("viewer.yaml");
        let file = Self::load_yaml::<ViewerConfigFile>(&file_path)?;
        Self::validate(file, &file_path.display().to_string())
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ViewerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ViewerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ViewerError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the raw file contents into a usable configuration.
    fn validate(file: ViewerConfigFile, path: &str) -> ViewerResult<Self> {
        let week_ending =
            file.week
                .ending
                .parse::<Weekday>()
                .map_err(|_| ViewerError::ConfigParse {
                    path: path.to_string(),
                    message: format!("unknown week-ending weekday '{}'", file.week.ending),
                })?;

        if file.week.days == 0 {
            return Err(ViewerError::ConfigParse {
                path: path.to_string(),
                message: "week days must be at least 1".to_string(),
            });
        }

        Ok(Self {
            week_ending,
            range_days: file.week.days,
            show_month: file.display.show_month,
        })
    }

    /// The weekday the visible week ends on.
    pub fn week_ending(&self) -> Weekday {
        self.week_ending
    }

    /// The length of the default date range in days.
    pub fn range_days(&self) -> u32 {
        self.range_days
    }

    /// Whether date badges include the month field.
    pub fn show_month(&self) -> bool {
        self.show_month
    }
}

impl Default for ViewerConfig {
    /// Mirrors the shipped `config/viewer.yaml`: weeks end on Sunday,
    /// seven-day range, badges show the month.
    fn default() -> Self {
        ViewerConfig {
            week_ending: Weekday::Sun,
            range_days: 7,
            show_month: true,
        }
    }
}
