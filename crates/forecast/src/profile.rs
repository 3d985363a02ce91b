//! River site description.

use serde::Serialize;

use crate::error::ForecastError;

/// A river site: baseline discharge and available head.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiverProfile {
    /// Display name of the river or site.
    name: String,
    /// Long-term mean discharge (m³/s).
    base_flow: f64,
    /// Gross head (m).
    head: f64,
}

impl RiverProfile {
    /// Creates a new river profile.
    ///
    /// Values are checked by [`validate`](Self::validate), which every
    /// forecast operation calls before computing.
    ///
    /// # Arguments
    ///
    /// * `name`: River or site name.
    /// * `base_flow`: Baseline discharge in m³/s (must be > 0).
    /// * `head`: Vertical drop in m (must be > 0).
    pub fn new(name: impl Into<String>, base_flow: f64, head: f64) -> Self {
        Self {
            name: name.into(),
            base_flow,
            head,
        }
    }

    /// Returns the river name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the baseline discharge (m³/s).
    pub fn base_flow(&self) -> f64 {
        self.base_flow
    }

    /// Returns the head (m).
    pub fn head(&self) -> f64 {
        self.head
    }

    /// Validates the profile.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidProfile`] if `base_flow` or `head` is
    /// not a finite number greater than zero.
    pub fn validate(&self) -> Result<(), ForecastError> {
        for (field, value) in [("base_flow", self.base_flow), ("head", self.head)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ForecastError::InvalidProfile {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
