//! Per-month climate inputs and the month-keyed selection table.

use std::collections::BTreeMap;

use hydrocast_calendar::Month;
use serde::Serialize;

use crate::error::ForecastError;

/// Climate conditions for one month.
///
/// Values are taken as given: humidity outside 0..=100 or negative rainfall
/// are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyClimateInput {
    month: Month,
    rainfall_mm: f64,
    temperature_c: f64,
    humidity_pct: f64,
}

impl MonthlyClimateInput {
    /// Creates a new monthly climate input.
    ///
    /// # Arguments
    ///
    /// * `month`: Calendar month.
    /// * `rainfall_mm`: Monthly rainfall (mm).
    /// * `temperature_c`: Mean temperature (°C).
    /// * `humidity_pct`: Mean relative humidity (%).
    pub fn new(month: Month, rainfall_mm: f64, temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            month,
            rainfall_mm,
            temperature_c,
            humidity_pct,
        }
    }

    /// Returns the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Returns the rainfall (mm).
    pub fn rainfall_mm(&self) -> f64 {
        self.rainfall_mm
    }

    /// Returns the mean temperature (°C).
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    /// Returns the relative humidity (%).
    pub fn humidity_pct(&self) -> f64 {
        self.humidity_pct
    }
}

/// The months selected for one run, keyed by month.
///
/// Each month appears at most once; iteration is in calendar order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateTable {
    inner: BTreeMap<Month, MonthlyClimateInput>,
}

impl ClimateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a sequence of inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::DuplicateMonth`] on the first repeated month.
    pub fn from_inputs(
        inputs: impl IntoIterator<Item = MonthlyClimateInput>,
    ) -> Result<Self, ForecastError> {
        let mut table = Self::new();
        for input in inputs {
            table.insert(input)?;
        }
        Ok(table)
    }

    /// Adds one month.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::DuplicateMonth`] if the month is already present.
    pub fn insert(&mut self, input: MonthlyClimateInput) -> Result<(), ForecastError> {
        let month = input.month();
        if self.inner.contains_key(&month) {
            return Err(ForecastError::DuplicateMonth { month });
        }
        self.inner.insert(month, input);
        Ok(())
    }

    /// Returns the input for `month`, if selected.
    pub fn get(&self, month: Month) -> Option<&MonthlyClimateInput> {
        self.inner.get(&month)
    }

    /// Returns `true` if `month` is selected.
    pub fn contains(&self, month: Month) -> bool {
        self.inner.contains_key(&month)
    }

    /// Returns the number of selected months.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no month is selected.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the selected months in calendar order.
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.inner.keys().copied()
    }

    /// Iterates over the inputs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &MonthlyClimateInput> {
        self.inner.values()
    }
}
