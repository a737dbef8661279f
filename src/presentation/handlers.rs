// HTTP request handlers
use crate::domain::error::DashboardError;
use crate::domain::event::{EventKind, EventSummary, CATALOG};
use crate::domain::query::FetchQuery;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub api_key: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Event catalog: selector entries plus glossary text for each event kind
pub async fn list_events() -> Json<Vec<EventSummary>> {
    Json(CATALOG.iter().map(EventSummary::from).collect())
}

/// Build the dashboard payload for one event kind and date window. Missing
/// dates default to the last 30 days, a missing key to the demo credential.
pub async fn get_dashboard(
    Path(code): Path<String>,
    Query(params): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let kind = match EventKind::parse(&code) {
        Ok(kind) => kind,
        Err(e) => return error_response(e),
    };

    let (default_start, default_end) = FetchQuery::default_window(Utc::now().date_naive());
    let start = params.start_date.unwrap_or(default_start);
    let end = params.end_date.unwrap_or(default_end);
    let api_key = params
        .api_key
        .unwrap_or_else(|| state.default_api_key.clone());

    let query = match FetchQuery::build(kind, start, end, &api_key) {
        Ok(query) => query,
        Err(e) => return error_response(e),
    };

    match state.dashboard_service.build_dashboard(query).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => {
            tracing::error!(event = %code, error = %e, "dashboard pipeline failed");
            error_response(e)
        }
    }
}

fn error_response(error: DashboardError) -> Response {
    match &error {
        DashboardError::HttpFailure { status, body } => (
            StatusCode::BAD_GATEWAY,
            Json(json!({
                "error": error.to_string(),
                "upstreamStatus": status,
                "upstreamBody": body,
            })),
        )
            .into_response(),
        DashboardError::Transport(_) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": error.to_string()})),
        )
            .into_response(),
        DashboardError::MissingCredential
        | DashboardError::InvalidDateRange { .. }
        | DashboardError::UnknownEventKind(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": error.to_string()})),
        )
            .into_response(),
    }
}
