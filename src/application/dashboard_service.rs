// Dashboard service - Use case running the whole pipeline for one request
use crate::application::aggregator::aggregate;
use crate::application::event_repository::EventRepository;
use crate::application::normalizer::normalize;
use crate::domain::dashboard::{NO_DATA_MESSAGE, SpaceWeatherDashboard};
use crate::domain::error::DashboardError;
use crate::domain::event::EventSummary;
use crate::domain::query::FetchQuery;
use crate::domain::series::ChartSpec;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn EventRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// Runs fetch -> normalize -> aggregate -> chart selection for one
    /// validated query. Warnings ride along with the payload; only input
    /// validation and the upstream call itself can fail.
    pub async fn build_dashboard(
        &self,
        query: FetchQuery,
    ) -> Result<SpaceWeatherDashboard, DashboardError> {
        let descriptor = query.kind.descriptor();
        let raw = self.repository.fetch_events(&query).await?;

        let table = normalize(&raw, descriptor);
        for warning in &table.warnings {
            tracing::warn!(event = query.kind.code(), "{warning}");
        }

        let series = aggregate(&table.rows, descriptor);
        let message = series.is_empty().then(|| NO_DATA_MESSAGE.to_string());

        Ok(SpaceWeatherDashboard {
            event: EventSummary::from(descriptor),
            chart: ChartSpec::for_event(descriptor),
            series,
            tidy: table.rows,
            raw,
            warnings: table.warnings,
            message,
        })
    }
}
