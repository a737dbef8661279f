// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    /// Used when the caller omits `apiKey` (NASA's public demo credential).
    pub default_api_key: String,
}
