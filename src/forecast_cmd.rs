//! Forecast command: compute and report a monthly hydro-power forecast.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use hydrocast_forecast::run_forecast_with;
use hydrocast_report::{OutputFormat, render};

use crate::cli::ForecastArgs;
use crate::config::RunConfig;
use crate::convert;

/// Run a forecast and write the report.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();
    let report = build_report(&args)?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{report}"),
    }
    Ok(())
}

/// Load inputs, run the engine and render the report text.
fn build_report(args: &ForecastArgs) -> Result<String> {
    // 1. Load optional run file
    let mut run_cfg = match args.config {
        Some(ref path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read run file: {}", path.display()))?;
            toml::from_str::<RunConfig>(&toml_str)
                .with_context(|| format!("failed to parse run file: {}", path.display()))?
        }
        None => RunConfig::default(),
    };

    // 2. Merge CLI flags; flags override the run file
    if let Some(ref name) = args.name {
        run_cfg.river.name = name.clone();
    }
    if let Some(q) = args.base_flow {
        run_cfg.river.base_flow = q;
    }
    if let Some(h) = args.head {
        run_cfg.river.head = h;
    }
    if let Some(ref f) = args.format {
        run_cfg.report.format = f.clone();
    }
    if let Some(w) = args.chart_width {
        run_cfg.report.chart_width = w;
    }
    if args.no_charts {
        run_cfg.report.charts = false;
    }

    // 3. Build engine inputs
    let river = convert::build_river(&run_cfg.river);
    let file_table = convert::build_climate_table(&run_cfg.climate)?;
    let table = if args.months.is_empty() {
        file_table
    } else {
        let months = convert::parse_months(&args.months)?;
        convert::select_months(&months, &file_table)?
    };
    if table.is_empty() {
        bail!("no months selected: add [climate.<month>] sections to the run file or use --months");
    }
    let forecast_cfg = convert::build_forecast_config(&run_cfg.coefficients)?;
    let report_cfg = convert::build_report_config(&run_cfg.report)?;

    // 4. Forecast
    info!(
        river = %river.name(),
        n_months = table.len(),
        "running forecast"
    );
    let run = run_forecast_with(&river, &table, &forecast_cfg).context("forecast failed")?;
    info!(
        status = %run.summary().verdict().status(),
        average_flow = run.summary().verdict().average_flow(),
        "forecast complete"
    );

    // 5. Render
    let mut report = render(&run, &report_cfg).context("failed to render report")?;
    if report_cfg.format() == OutputFormat::Json && !report.ends_with('\n') {
        report.push('\n');
    }
    Ok(report)
}
