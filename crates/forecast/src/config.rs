//! Configuration types for the forecast engine.

use crate::constants::{
    FEASIBLE_FLOW, GRAVITY, HIGHLY_FEASIBLE_FLOW, HUMIDITY_COEFF, RAINFALL_COEFF,
    TEMPERATURE_COEFF, WATER_DENSITY,
};
use crate::error::ForecastError;

/// Model coefficients and feasibility thresholds.
///
/// [`ForecastConfig::new`] yields the reference model; every field can be
/// overridden with the `with_*` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Flow response per mm of rainfall.
    rainfall_coeff: f64,
    /// Flow reduction per °C of temperature.
    temperature_coeff: f64,
    /// Flow response per unit humidity fraction.
    humidity_coeff: f64,
    /// Water density (kg/m³).
    water_density: f64,
    /// Gravitational acceleration (m/s²).
    gravity: f64,
    /// Minimum average flow for [`FeasibilityStatus::HighlyFeasible`](crate::FeasibilityStatus::HighlyFeasible).
    highly_feasible_flow: f64,
    /// Minimum average flow for [`FeasibilityStatus::Feasible`](crate::FeasibilityStatus::Feasible).
    feasible_flow: f64,
}

impl ForecastConfig {
    /// Creates the reference configuration.
    pub fn new() -> Self {
        Self {
            rainfall_coeff: RAINFALL_COEFF,
            temperature_coeff: TEMPERATURE_COEFF,
            humidity_coeff: HUMIDITY_COEFF,
            water_density: WATER_DENSITY,
            gravity: GRAVITY,
            highly_feasible_flow: HIGHLY_FEASIBLE_FLOW,
            feasible_flow: FEASIBLE_FLOW,
        }
    }

    /// Sets the rainfall coefficient.
    pub fn with_rainfall_coeff(mut self, k: f64) -> Self {
        self.rainfall_coeff = k;
        self
    }

    /// Sets the temperature coefficient.
    pub fn with_temperature_coeff(mut self, k: f64) -> Self {
        self.temperature_coeff = k;
        self
    }

    /// Sets the humidity coefficient.
    pub fn with_humidity_coeff(mut self, k: f64) -> Self {
        self.humidity_coeff = k;
        self
    }

    /// Sets the water density.
    pub fn with_water_density(mut self, rho: f64) -> Self {
        self.water_density = rho;
        self
    }

    /// Sets the gravitational acceleration.
    pub fn with_gravity(mut self, g: f64) -> Self {
        self.gravity = g;
        self
    }

    /// Sets both feasibility thresholds.
    pub fn with_thresholds(mut self, highly_feasible_flow: f64, feasible_flow: f64) -> Self {
        self.highly_feasible_flow = highly_feasible_flow;
        self.feasible_flow = feasible_flow;
        self
    }

    // --- Accessors ---

    /// Returns the rainfall coefficient.
    pub fn rainfall_coeff(&self) -> f64 {
        self.rainfall_coeff
    }

    /// Returns the temperature coefficient.
    pub fn temperature_coeff(&self) -> f64 {
        self.temperature_coeff
    }

    /// Returns the humidity coefficient.
    pub fn humidity_coeff(&self) -> f64 {
        self.humidity_coeff
    }

    /// Returns the water density.
    pub fn water_density(&self) -> f64 {
        self.water_density
    }

    /// Returns the gravitational acceleration.
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Returns the highly-feasible flow threshold.
    pub fn highly_feasible_flow(&self) -> f64 {
        self.highly_feasible_flow
    }

    /// Returns the feasible flow threshold.
    pub fn feasible_flow(&self) -> f64 {
        self.feasible_flow
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidConfig`] if any value is non-finite,
    /// density or gravity is not positive, or the thresholds are out of order.
    pub fn validate(&self) -> Result<(), ForecastError> {
        for (name, v) in [
            ("rainfall_coeff", self.rainfall_coeff),
            ("temperature_coeff", self.temperature_coeff),
            ("humidity_coeff", self.humidity_coeff),
            ("highly_feasible_flow", self.highly_feasible_flow),
            ("feasible_flow", self.feasible_flow),
        ] {
            if !v.is_finite() {
                return Err(ForecastError::InvalidConfig {
                    reason: format!("{name} must be finite, got {v}"),
                });
            }
        }
        for (name, v) in [
            ("water_density", self.water_density),
            ("gravity", self.gravity),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ForecastError::InvalidConfig {
                    reason: format!("{name} must be finite and > 0, got {v}"),
                });
            }
        }
        if self.highly_feasible_flow < self.feasible_flow {
            return Err(ForecastError::InvalidConfig {
                reason: format!(
                    "highly_feasible_flow ({}) must be >= feasible_flow ({})",
                    self.highly_feasible_flow, self.feasible_flow
                ),
            });
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::new()
    }
}
