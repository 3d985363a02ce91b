//! Report configuration.

use std::str::FromStr;

use crate::error::ReportError;

/// Widest chart accepted by [`ReportConfig`], in characters.
pub const MAX_CHART_WIDTH: usize = 1000;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Summary, record table and text charts.
    #[default]
    Table,
    /// Pretty-printed JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(ReportError::InvalidConfig {
                reason: format!("unknown output format: {other:?}"),
            }),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Output format.
    format: OutputFormat,
    /// Width of chart bars, in characters.
    chart_width: usize,
    /// Whether text output includes the charts.
    charts: bool,
    /// Decimal places for numbers in text output.
    decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            chart_width: 40,
            charts: true,
            decimals: 2,
        }
    }
}

impl ReportConfig {
    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the chart width.
    pub fn with_chart_width(mut self, width: usize) -> Self {
        self.chart_width = width;
        self
    }

    /// Enables or disables text charts.
    pub fn with_charts(mut self, charts: bool) -> Self {
        self.charts = charts;
        self
    }

    /// Sets the number of decimal places.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Returns the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the chart width.
    pub fn chart_width(&self) -> usize {
        self.chart_width
    }

    /// Returns whether text charts are rendered.
    pub fn charts(&self) -> bool {
        self.charts
    }

    /// Returns the number of decimal places.
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidConfig`] if `chart_width` is zero or
    /// above [`MAX_CHART_WIDTH`], or `decimals` exceeds 10.
    pub(crate) fn validate(&self) -> Result<(), ReportError> {
        if self.chart_width == 0 {
            return Err(ReportError::InvalidConfig {
                reason: "chart_width must be greater than 0".to_string(),
            });
        }
        if self.chart_width > MAX_CHART_WIDTH {
            return Err(ReportError::InvalidConfig {
                reason: format!(
                    "chart_width must be <= {MAX_CHART_WIDTH}, got {}",
                    self.chart_width
                ),
            });
        }
        if self.decimals > 10 {
            return Err(ReportError::InvalidConfig {
                reason: format!("decimals must be <= 10, got {}", self.decimals),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        let c = ReportConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.format(), OutputFormat::Table);
        assert_eq!(c.chart_width(), 40);
        assert!(c.charts());
        assert_eq!(c.decimals(), 2);
    }

    #[test]
    fn zero_width_fails() {
        assert!(ReportConfig::default().with_chart_width(0).validate().is_err());
    }

    #[test]
    fn width_bounds() {
        let c = ReportConfig::default().with_chart_width(MAX_CHART_WIDTH);
        assert!(c.validate().is_ok());
        let err = ReportConfig::default()
            .with_chart_width(MAX_CHART_WIDTH + 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig { .. }));
        assert!(err.to_string().contains("chart_width must be <= 1000"));
        assert!(ReportConfig::default().with_chart_width(usize::MAX).validate().is_err());
    }

    #[test]
    fn too_many_decimals_fails() {
        assert!(ReportConfig::default().with_decimals(11).validate().is_err());
    }

    #[test]
    fn parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
