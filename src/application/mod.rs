// Application layer - Pipeline use cases and the repository seam
pub mod aggregator;
pub mod dashboard_service;
pub mod event_repository;
pub mod normalizer;
