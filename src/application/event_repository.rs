// Repository trait for upstream event data access
use crate::domain::error::DashboardError;
use crate::domain::query::FetchQuery;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Fetch the raw event records for one validated query. One call, no
    /// retries; a non-success upstream status surfaces as
    /// `DashboardError::HttpFailure` with the body verbatim.
    async fn fetch_events(&self, query: &FetchQuery) -> Result<Vec<Value>, DashboardError>;
}
