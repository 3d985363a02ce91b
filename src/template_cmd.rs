//! Template command: print an example run file.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::TemplateArgs;

/// Example run file. Coefficients shown are the reference model.
pub const TEMPLATE: &str = r#"# hydrocast run file

[river]
name = "Citarum"
base_flow = 5.0   # m³/s
head = 10.0       # m

# One section per month to forecast. Keys may be English names,
# abbreviations, numbers or Indonesian names (januari, februari, ...).
[climate.january]
rainfall_mm = 200.0
temperature_c = 27.0
humidity_pct = 75.0

[climate.february]
rainfall_mm = 180.0
temperature_c = 27.2
humidity_pct = 78.0

[climate.march]
rainfall_mm = 240.0
temperature_c = 26.8
humidity_pct = 82.0

[coefficients]
rainfall = 0.001
temperature = 0.01
humidity = 0.002
water_density = 1000.0
gravity = 9.81
highly_feasible_flow = 5.0
feasible_flow = 1.0

[report]
format = "table"
chart_width = 40
charts = true
decimals = 2
"#;

/// Print or write the example run file.
pub fn run(args: TemplateArgs) -> Result<()> {
    match args.output {
        Some(path) => {
            std::fs::write(&path, TEMPLATE)
                .with_context(|| format!("failed to write template: {}", path.display()))?;
            info!(path = %path.display(), "template written");
        }
        None => print!("{TEMPLATE}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::convert;

    #[test]
    fn template_parses_and_converts() {
        let cfg: RunConfig = toml::from_str(TEMPLATE).unwrap();
        assert_eq!(cfg.river.name, "Citarum");
        let table = convert::build_climate_table(&cfg.climate).unwrap();
        assert_eq!(table.len(), 3);
        let fc = convert::build_forecast_config(&cfg.coefficients).unwrap();
        assert_eq!(fc, hydrocast_forecast::ForecastConfig::new());
        assert!(convert::build_report_config(&cfg.report).is_ok());
    }

    #[test]
    fn template_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        run(TemplateArgs {
            output: Some(path.clone()),
        })
        .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), TEMPLATE);
    }
}
