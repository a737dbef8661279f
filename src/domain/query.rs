// Fetch query construction and validation
use crate::domain::error::DashboardError;
use crate::domain::event::EventKind;
use chrono::{Days, NaiveDate};

/// Date format DONKI expects for the request window.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default lookback window when the caller supplies no dates.
pub const DEFAULT_WINDOW_DAYS: u64 = 30;

/// A validated upstream query: event kind, inclusive date window, credential,
/// and the event-specific extra filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchQuery {
    pub kind: EventKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub api_key: String,
    pub extra: Vec<(String, String)>,
}

impl FetchQuery {
    /// Validates inputs and attaches per-event extra parameters. Fails before
    /// any network activity when the range is inverted or the key is empty.
    pub fn build(
        kind: EventKind,
        start: NaiveDate,
        end: NaiveDate,
        api_key: &str,
    ) -> Result<Self, DashboardError> {
        if api_key.trim().is_empty() {
            return Err(DashboardError::MissingCredential);
        }
        if start > end {
            return Err(DashboardError::InvalidDateRange { start, end });
        }

        let extra = match kind {
            EventKind::Cme => vec![
                ("mostAccurateOnly".to_string(), "true".to_string()),
                ("completeEntryOnly".to_string(), "true".to_string()),
                ("speed".to_string(), "500".to_string()),
                ("halfAngle".to_string(), "30".to_string()),
                ("catalog".to_string(), "ALL".to_string()),
            ],
            EventKind::Notifications => vec![("type".to_string(), "all".to_string())],
            _ => Vec::new(),
        };

        Ok(Self {
            kind,
            start,
            end,
            api_key: api_key.to_string(),
            extra,
        })
    }

    /// Full query-string pairs for the upstream GET.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("startDate".to_string(), self.start.format(DATE_FORMAT).to_string()),
            ("endDate".to_string(), self.end.format(DATE_FORMAT).to_string()),
            ("api_key".to_string(), self.api_key.clone()),
        ];
        pairs.extend(self.extra.iter().cloned());
        pairs
    }

    /// Default (start, end) window ending today: the last 30 days.
    pub fn default_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = today
            .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS))
            .unwrap_or(today);
        (start, today)
    }
}
