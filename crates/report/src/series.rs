//! Chart data series derived from a forecast run.

use hydrocast_forecast::{ForecastRun, MonthlyForecastRecord, order_by_calendar};
use serde::Serialize;

/// How a series is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// One bar per category.
    Bar,
    /// Points joined in sequence.
    Line,
}

/// A single labelled value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// A titled sequence of points with axis labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

fn month_points(
    records: &[MonthlyForecastRecord],
    value: impl Fn(&MonthlyForecastRecord) -> f64,
) -> Vec<ChartPoint> {
    records
        .iter()
        .map(|r| ChartPoint {
            label: r.month().abbrev().to_string(),
            value: value(r),
        })
        .collect()
}

/// Bar series of forecast flow per month, in record order.
pub fn flow_bar_series(run: &ForecastRun) -> ChartSeries {
    ChartSeries {
        title: "Forecast river flow".to_string(),
        kind: ChartKind::Bar,
        x_label: "Month".to_string(),
        y_label: "Flow (m³/s)".to_string(),
        points: month_points(run.records(), MonthlyForecastRecord::forecast_flow),
    }
}

/// Bar series of forecast power per month, in record order.
pub fn power_bar_series(run: &ForecastRun) -> ChartSeries {
    ChartSeries {
        title: "Hydro-power potential".to_string(),
        kind: ChartKind::Bar,
        x_label: "Month".to_string(),
        y_label: "Power (kW)".to_string(),
        points: month_points(run.records(), MonthlyForecastRecord::forecast_power),
    }
}

/// Time series of forecast power, January to December.
pub fn power_time_series(run: &ForecastRun) -> ChartSeries {
    let ordered = order_by_calendar(run.records());
    ChartSeries {
        title: "Hydro-power forecast trend".to_string(),
        kind: ChartKind::Line,
        x_label: "Month".to_string(),
        y_label: "Power (kW)".to_string(),
        points: month_points(&ordered, MonthlyForecastRecord::forecast_power),
    }
}

/// All three standard series: flow bars, power bars, power trend.
pub fn standard_series(run: &ForecastRun) -> Vec<ChartSeries> {
    vec![
        flow_bar_series(run),
        power_bar_series(run),
        power_time_series(run),
    ]
}
