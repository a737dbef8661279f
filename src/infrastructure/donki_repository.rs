// DONKI repository implementation
use crate::application::event_repository::EventRepository;
use crate::domain::error::DashboardError;
use crate::domain::event::EventKind;
use crate::domain::query::FetchQuery;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Fetches event records from NASA's DONKI API over plain HTTPS. One GET per
/// query, no retries; identical queries within the TTL are served from an
/// in-memory memo so repeated dashboard refreshes don't hammer the upstream.
pub struct DonkiRepository {
    base_url: String,
    client: reqwest::Client,
    cache_ttl: Duration,
    cache: Mutex<HashMap<CacheKey, CacheEntry>>,
}

type CacheKey = (EventKind, NaiveDate, NaiveDate, String);

struct CacheEntry {
    fetched_at: Instant,
    records: Vec<Value>,
}

impl DonkiRepository {
    pub fn new(base_url: String, cache_ttl: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            cache_ttl,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cache_key(query: &FetchQuery) -> CacheKey {
        (query.kind, query.start, query.end, query.api_key.clone())
    }

    async fn cached(&self, key: &CacheKey) -> Option<Vec<Value>> {
        let mut cache = self.cache.lock().await;
        match cache.get(key) {
            Some(entry) if entry.fetched_at.elapsed() < self.cache_ttl => {
                Some(entry.records.clone())
            }
            Some(_) => {
                cache.remove(key);
                None
            }
            None => None,
        }
    }

    async fn store(&self, key: CacheKey, records: &[Value]) {
        let mut cache = self.cache.lock().await;
        cache.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                records: records.to_vec(),
            },
        );
    }
}

#[async_trait]
impl EventRepository for DonkiRepository {
    async fn fetch_events(&self, query: &FetchQuery) -> Result<Vec<Value>, DashboardError> {
        let key = Self::cache_key(query);
        if let Some(records) = self.cached(&key).await {
            tracing::debug!(event = query.kind.code(), "serving records from memo");
            return Ok(records);
        }

        let url = format!("{}/{}", self.base_url, query.kind.code());
        tracing::debug!(%url, "fetching DONKI events");

        let response = self
            .client
            .get(&url)
            .query(&query.to_query_pairs())
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::HttpFailure {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        // DONKI answers with a JSON array; any other shape means no data
        let records = match payload {
            Value::Array(records) => records,
            _ => Vec::new(),
        };

        // Only successful fetches are memoized
        self.store(key, &records).await;
        Ok(records)
    }
}
