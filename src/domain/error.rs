// Error taxonomy for the dashboard pipeline
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Hard failures. The first two block the pipeline before any network call;
/// `HttpFailure` aborts it after the fetch step. No automatic retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("an API key is required to fetch space weather data")]
    MissingCredential,

    #[error("invalid date range: start {start} falls after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("unknown space weather event code: {0:?}")]
    UnknownEventKind(String),

    #[error("DONKI request failed with status {status}: {body}")]
    HttpFailure { status: u16, body: String },

    #[error("upstream request failed: {0}")]
    Transport(String),
}

/// Non-fatal conditions surfaced alongside the (possibly partial) chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    /// No date-like column could be resolved; the series will be empty.
    NoDateFieldFound,
    /// The expected date field was absent, a date-like column was guessed.
    FallbackDateField { field: String },
    /// A record was missing an expected nested list (GST `allKpIndex`).
    MissingSubfield { field: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::NoDateFieldFound => write!(f, "no suitable date field found in the data"),
            Warning::FallbackDateField { field } => {
                write!(f, "using {:?} as the date field", field)
            }
            Warning::MissingSubfield { field } => {
                write!(f, "no {:?} data available in one or more records", field)
            }
        }
    }
}
