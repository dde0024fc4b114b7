//! Error types for the timecard viewer data layer.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! fetching timecard data.
//!
//! A record with an unrecognized pay classification is deliberately *not*
//! an error condition: it is folded into [`PayClass::Other`] so that
//! rendering stays robust against partial upstream data.
//!
//! [`PayClass::Other`]: crate::models::PayClass::Other

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the timecard viewer data layer.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timecards_viewer::error::ViewerError;
///
/// let error = ViewerError::ConfigNotFound {
///     path: "/missing/viewer.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/viewer.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },

    /// A date range had its end before its start.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange {
        /// The requested start of the range.
        start: NaiveDate,
        /// The requested end of the range.
        end: NaiveDate,
    },

    /// The data-fetch collaborator failed to produce timecard data.
    #[error("Timecard fetch failed: {message}")]
    Fetch {
        /// A description of the fetch failure.
        message: String,
    },
}

/// A type alias for Results that return ViewerError.
pub type ViewerResult<T> = Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ViewerError::ConfigNotFound {
            path: "/missing/viewer.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/viewer.yaml"
        );
    }

    #[test]
    fn test_config_parse_displays_path_and_message() {
        let error = ViewerError::ConfigParse {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_range_displays_both_dates() {
        let error = ViewerError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2024-01-07 is after 2024-01-01"
        );
    }

    #[test]
    fn test_fetch_displays_message() {
        let error = ViewerError::Fetch {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Timecard fetch failed: connection refused");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ViewerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_fetch_error() -> ViewerResult<()> {
            Err(ViewerError::Fetch {
                message: "timed out".to_string(),
            })
        }

        fn propagates_error() -> ViewerResult<()> {
            returns_fetch_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
