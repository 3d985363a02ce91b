//! Error types for the hydrocast-forecast crate.

use hydrocast_calendar::Month;

/// Error type for all fallible operations in the hydrocast-forecast crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Returned when a river profile parameter is not a finite positive number.
    #[error("invalid river profile: {field} must be finite and > 0, got {value}")]
    InvalidProfile {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// Returned when an aggregate is requested over zero months.
    #[error("no months selected")]
    EmptySelection,

    /// Returned when the same month is supplied twice for one run.
    #[error("month {month} selected more than once")]
    DuplicateMonth {
        /// The repeated month.
        month: Month,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
