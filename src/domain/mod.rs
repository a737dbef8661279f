// Domain layer - Event catalog, queries, series and chart models
pub mod dashboard;
pub mod error;
pub mod event;
pub mod query;
pub mod series;
