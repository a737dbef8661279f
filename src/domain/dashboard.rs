// Dashboard payload handed to the rendering side
use crate::domain::error::Warning;
use crate::domain::event::EventSummary;
use crate::domain::series::{ChartSpec, SeriesPoint, TidyRow};
use serde::Serialize;
use serde_json::Value;

pub const NO_DATA_MESSAGE: &str = "No data available for the selected parameters.";

/// Terminal artifact of one pipeline run: the chart specification and series
/// for rendering, plus the tidy table and untouched raw JSON for the
/// inspection panels, and any non-fatal warnings gathered along the way.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceWeatherDashboard {
    pub event: EventSummary,
    pub chart: ChartSpec,
    pub series: Vec<SeriesPoint>,
    pub tidy: Vec<TidyRow>,
    pub raw: Vec<Value>,
    pub warnings: Vec<Warning>,
    /// Set when the series is empty; rendering is skipped in favor of this.
    pub message: Option<String>,
}
