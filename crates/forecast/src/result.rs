//! Result types for the forecast engine.

use std::fmt;

use hydrocast_calendar::Month;
use serde::Serialize;

use crate::profile::RiverProfile;

/// Forecast for a single month, with the climate inputs it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyForecastRecord {
    month: Month,
    rainfall_mm: f64,
    temperature_c: f64,
    humidity_pct: f64,
    forecast_flow: f64,
    forecast_power: f64,
}

impl MonthlyForecastRecord {
    /// Creates a new record.
    pub fn new(
        month: Month,
        rainfall_mm: f64,
        temperature_c: f64,
        humidity_pct: f64,
        forecast_flow: f64,
        forecast_power: f64,
    ) -> Self {
        Self {
            month,
            rainfall_mm,
            temperature_c,
            humidity_pct,
            forecast_flow,
            forecast_power,
        }
    }

    /// Returns the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Returns the rainfall input (mm).
    pub fn rainfall_mm(&self) -> f64 {
        self.rainfall_mm
    }

    /// Returns the temperature input (°C).
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Returns the humidity input (%).
    pub fn humidity_pct(&self) -> f64 {
        self.humidity_pct
    }

    /// Returns the forecast discharge (m³/s). May be zero or negative.
    pub fn forecast_flow(&self) -> f64 {
        self.forecast_flow
    }

    /// Returns the forecast power (kW). Carries the sign of the flow.
    pub fn forecast_power(&self) -> f64 {
        self.forecast_power
    }
}

/// Coarse site classification from the average forecast flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityStatus {
    /// Average flow at or above the upper threshold; suits a mini hydro plant.
    HighlyFeasible,
    /// Average flow at or above the lower threshold; suits a micro hydro plant.
    Feasible,
    /// Below both thresholds.
    LowFeasible,
}

impl FeasibilityStatus {
    /// Returns the plant scale the status corresponds to, if any.
    pub fn plant_scale(self) -> Option<&'static str> {
        match self {
            Self::HighlyFeasible => Some("mini hydro"),
            Self::Feasible => Some("micro hydro"),
            Self::LowFeasible => None,
        }
    }

    /// Returns a short human-readable label, without the plant scale.
    pub fn label(self) -> &'static str {
        match self {
            Self::HighlyFeasible => "Highly feasible",
            Self::Feasible => "Feasible",
            Self::LowFeasible => "Low feasibility",
        }
    }
}

/// Formats the label followed by the plant scale, e.g. `Feasible (micro hydro)`.
impl fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())?;
        if let Some(scale) = self.plant_scale() {
            write!(f, " ({scale})")?;
        }
        Ok(())
    }
}

/// Average forecast flow and the resulting feasibility status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeasibilityVerdict {
    average_flow: f64,
    status: FeasibilityStatus,
}

impl FeasibilityVerdict {
    /// Creates a new verdict.
    pub fn new(average_flow: f64, status: FeasibilityStatus) -> Self {
        Self {
            average_flow,
            status,
        }
    }

    /// Returns the mean forecast flow (m³/s).
    pub fn average_flow(&self) -> f64 {
        self.average_flow
    }

    /// Returns the feasibility status.
    pub fn status(&self) -> FeasibilityStatus {
        self.status
    }
}

/// Run-level figures shown alongside the record table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastSummary {
    verdict: FeasibilityVerdict,
    average_power: f64,
    peak_month: Option<Month>,
    lowest_month: Option<Month>,
}

impl ForecastSummary {
    /// Creates a new summary.
    pub fn new(
        verdict: FeasibilityVerdict,
        average_power: f64,
        peak_month: Option<Month>,
        lowest_month: Option<Month>,
    ) -> Self {
        Self {
            verdict,
            average_power,
            peak_month,
            lowest_month,
        }
    }

    /// Returns the feasibility verdict.
    pub fn verdict(&self) -> &FeasibilityVerdict {
        &self.verdict
    }

    /// Returns the mean forecast power (kW).
    pub fn average_power(&self) -> f64 {
        self.average_power
    }

    /// Returns the month with the highest forecast power.
    ///
    /// `None` only when every power value is NaN.
    pub fn peak_month(&self) -> Option<Month> {
        self.peak_month
    }

    /// Returns the month with the lowest forecast power.
    pub fn lowest_month(&self) -> Option<Month> {
        self.lowest_month
    }
}

/// The complete output of one forecast run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRun {
    river: RiverProfile,
    records: Vec<MonthlyForecastRecord>,
    summary: ForecastSummary,
}

impl ForecastRun {
    /// Creates a new run result.
    pub fn new(
        river: RiverProfile,
        records: Vec<MonthlyForecastRecord>,
        summary: ForecastSummary,
    ) -> Self {
        Self {
            river,
            records,
            summary,
        }
    }

    /// Returns the river profile the run was computed for.
    pub fn river(&self) -> &RiverProfile {
        &self.river
    }

    /// Returns the per-month records in calendar order.
    pub fn records(&self) -> &[MonthlyForecastRecord] {
        &self.records
    }

    /// Returns the run summary.
    pub fn summary(&self) -> &ForecastSummary {
        &self.summary
    }
}
