//! Plain-text summary block and record table.

use std::fmt::Write;

use hydrocast_forecast::{ForecastRun, MonthlyForecastRecord};

/// Column headers of the record table.
pub const COLUMNS: [&str; 6] = [
    "Month",
    "Rainfall (mm)",
    "Temperature (°C)",
    "Humidity (%)",
    "Forecast flow (m³/s)",
    "Power (kW)",
];

fn row(record: &MonthlyForecastRecord, decimals: usize) -> [String; 6] {
    [
        record.month().name().to_string(),
        format!("{:.decimals$}", record.rainfall_mm()),
        format!("{:.decimals$}", record.temperature_c()),
        format!("{:.decimals$}", record.humidity_pct()),
        format!("{:.decimals$}", record.forecast_flow()),
        format!("{:.decimals$}", record.forecast_power()),
    ]
}

/// Renders the records as an aligned text table.
///
/// The month column is left-aligned, numeric columns right-aligned.
pub fn render_table(records: &[MonthlyForecastRecord], decimals: usize) -> String {
    let rows: Vec<[String; 6]> = records.iter().map(|r| row(r, decimals)).collect();
    let mut widths: [usize; 6] = COLUMNS.map(|h| h.chars().count());
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = COLUMNS
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (h, w))| align(h, w, i == 0))
        .collect();
    let _ = writeln!(out, "{}", header.join("  "));
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for r in &rows {
        let cells: Vec<String> = r
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (c, w))| align(c, w, i == 0))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }
    out
}

// `format!` width counts chars, which is what the column widths use.
fn align(cell: &str, width: usize, left: bool) -> String {
    if left {
        format!("{cell:<width$}")
    } else {
        format!("{cell:>width$}")
    }
}

/// Renders the run summary: river, averages, feasibility and extreme months.
pub fn render_summary(run: &ForecastRun, decimals: usize) -> String {
    let summary = run.summary();
    let verdict = summary.verdict();
    let mut out = String::new();
    let _ = writeln!(out, "River:          {}", run.river().name());
    let _ = writeln!(
        out,
        "Base flow:      {:.decimals$} m³/s, head {:.decimals$} m",
        run.river().base_flow(),
        run.river().head()
    );
    let _ = writeln!(out, "Months:         {}", run.records().len());
    let _ = writeln!(
        out,
        "Average power:  {:.decimals$} kW",
        summary.average_power()
    );
    let _ = writeln!(
        out,
        "Average flow:   {:.decimals$} m³/s",
        verdict.average_flow()
    );
    let _ = writeln!(out, "Feasibility:    {}", verdict.status());
    if let Some(m) = summary.peak_month() {
        let _ = writeln!(out, "Peak month:     {m}");
    }
    if let Some(m) = summary.lowest_month() {
        let _ = writeln!(out, "Lowest month:   {m}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrocast_calendar::Month;

    #[test]
    fn table_has_header_rule_and_rows() {
        let recs = [
            MonthlyForecastRecord::new(Month::January, 200.0, 27.0, 75.0, 4.6575, 456.90075),
            MonthlyForecastRecord::new(Month::February, 180.0, 26.5, 80.0, 4.5632, 447.65),
        ];
        let out = render_table(&recs, 2);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Month"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].starts_with("January"));
        assert!(lines[2].ends_with("456.90"));
        assert!(lines[3].contains("4.56"));
    }

    #[test]
    fn rows_share_width() {
        let recs = [
            MonthlyForecastRecord::new(Month::May, 1.0, 1.0, 1.0, 1.0, 1.0),
            MonthlyForecastRecord::new(Month::September, 1000.0, 1.0, 1.0, -12.5, -1226.25),
        ];
        let out = render_table(&recs, 1);
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn empty_table_has_only_header() {
        let out = render_table(&[], 2);
        assert_eq!(out.lines().count(), 2);
    }
}
