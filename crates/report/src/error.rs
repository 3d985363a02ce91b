//! Report error types.

/// Errors that can occur while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A rendering parameter is invalid.
    #[error("invalid report configuration: {reason}")]
    InvalidConfig { reason: String },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
