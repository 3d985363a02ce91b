//! Physical constants and default model coefficients.

/// Flow response per millimetre of monthly rainfall [1/mm].
pub const RAINFALL_COEFF: f64 = 0.001;

/// Flow response per degree of mean temperature (evaporation loss) [1/°C].
pub const TEMPERATURE_COEFF: f64 = 0.01;

/// Flow response per unit humidity fraction [-].
pub const HUMIDITY_COEFF: f64 = 0.002;

/// Water density [kg/m³].
pub const WATER_DENSITY: f64 = 1000.0;

/// Gravitational acceleration [m/s²].
pub const GRAVITY: f64 = 9.81;

/// Watts per kilowatt.
pub const WATTS_PER_KW: f64 = 1000.0;

/// Average forecast flow at or above which a site is highly feasible [m³/s].
pub const HIGHLY_FEASIBLE_FLOW: f64 = 5.0;

/// Average forecast flow at or above which a site is feasible [m³/s].
pub const FEASIBLE_FLOW: f64 = 1.0;
