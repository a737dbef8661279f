// Tidy rows, aggregated series and chart specification
use crate::domain::event::{EventDescriptor, EventKind};
use chrono::NaiveDate;
use serde::Serialize;

/// One normalized observation: the record's calendar date plus a numeric
/// value (1.0 for counted events, the Kp index for GST sub-readings).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TidyRow {
    pub date: NaiveDate,
    pub value: f64,
}

impl TidyRow {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// One aggregated point per distinct date, sorted ascending. Gap dates are
/// not synthesized; the series keeps them as gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Everything the rendering side needs besides the points themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub title: String,
}

impl ChartSpec {
    pub fn for_event(descriptor: &EventDescriptor) -> Self {
        let title = match descriptor.kind {
            EventKind::Gst => format!(
                "Average Kp Index of {} Over Time",
                descriptor.display_name
            ),
            _ => match descriptor.chart_kind {
                ChartKind::Line => format!("Trend of {} Over Time", descriptor.display_name),
                ChartKind::Bar => format!("Number of {} Over Time", descriptor.display_name),
            },
        };
        Self {
            kind: descriptor.chart_kind,
            x_label: "Date",
            y_label: descriptor.y_label,
            title,
        }
    }
}
