//! Error types for the hydrocast-calendar crate.

/// Error type for all fallible operations in the hydrocast-calendar crate.
///
/// Covers month numbers outside the calendar and month labels that match
/// none of the accepted spellings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a month label cannot be parsed.
    #[error("unknown month: {name:?}")]
    UnknownMonth {
        /// The label that was provided.
        name: String,
    },
}
