//! High-level stats facade used by HTTP handlers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Duration, Utc};
use serde::Serialize;

use gallery_core::query;
use gallery_core::stats::{StatKind, StatTotals, TimePeriod};
use gallery_core::types::PromptId;

use crate::cooldown::ViewCooldown;
use crate::{CounterStore, MemoryCounterStore, RestCounterStore};

/// Totals plus whether a live backend produced them. `configured: false`
/// tells clients the numbers are placeholder zeros.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsSnapshot {
    #[serde(flatten)]
    pub totals: StatTotals,
    pub configured: bool,
}

/// Facade over an optional [`CounterStore`].
///
/// With no backend the client runs in degraded mode: reads return zeros
/// flagged `configured: false` and writes succeed as no-ops. Backend errors
/// are logged and degrade the affected call the same way; they never
/// propagate to callers.
#[derive(Clone)]
pub struct StatsClient {
    backend: Option<Arc<dyn CounterStore>>,
    cooldown: Arc<ViewCooldown>,
}

impl StatsClient {
    /// Build from `STATS_URL` and `STATS_SERVICE_KEY`. Either missing means
    /// degraded mode, announced once at startup.
    pub fn from_env() -> Self {
        match (std::env::var("STATS_URL"), std::env::var("STATS_SERVICE_KEY")) {
            (Ok(url), Ok(key)) if !url.is_empty() && !key.is_empty() => {
                tracing::info!(%url, "stats counter backend configured");
                Self::with_backend(Arc::new(RestCounterStore::new(url, key)))
            }
            _ => {
                tracing::warn!(
                    "STATS_URL / STATS_SERVICE_KEY not set; stats run in degraded mode"
                );
                Self::disabled()
            }
        }
    }

    pub fn with_backend(backend: Arc<dyn CounterStore>) -> Self {
        Self {
            backend: Some(backend),
            cooldown: Arc::new(ViewCooldown::default()),
        }
    }

    /// In-memory backend, mainly for tests and local development.
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryCounterStore::new()))
    }

    /// No backend at all; everything degrades.
    pub fn disabled() -> Self {
        Self {
            backend: None,
            cooldown: Arc::new(ViewCooldown::default()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Totals for one record, zeros when degraded.
    pub async fn totals(&self, id: &str) -> StatsSnapshot {
        let Some(backend) = &self.backend else {
            return StatsSnapshot {
                totals: StatTotals::default(),
                configured: false,
            };
        };
        match backend.totals(id).await {
            Ok(totals) => StatsSnapshot {
                totals,
                configured: true,
            },
            Err(err) => {
                tracing::warn!(%id, error = %err, "stats totals read failed");
                StatsSnapshot {
                    totals: StatTotals::default(),
                    configured: false,
                }
            }
        }
    }

    /// Totals for many records in one call. Ids without a backend row are
    /// absent; callers fill zeros. Degraded mode returns an empty map.
    pub async fn batch_totals(&self, ids: &[PromptId]) -> HashMap<PromptId, StatTotals> {
        let Some(backend) = &self.backend else {
            return HashMap::new();
        };
        match backend.batch_totals(ids).await {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(count = ids.len(), error = %err, "stats batch read failed");
                HashMap::new()
            }
        }
    }

    /// Count an event: atomic backend increment plus a fire-and-forget event
    /// row for windowed aggregation. Always succeeds from the caller's view.
    pub async fn record(&self, id: &str, kind: StatKind, visitor: &str) {
        let Some(backend) = &self.backend else {
            return;
        };

        if let Err(err) = backend.increment(id, kind).await {
            tracing::warn!(%id, ?kind, error = %err, "stats increment failed");
            return;
        }

        let backend = Arc::clone(backend);
        let id = id.to_string();
        let visitor = visitor.to_string();
        tokio::spawn(async move {
            if let Err(err) = backend.record_event(&id, kind, &visitor).await {
                tracing::warn!(%id, ?kind, error = %err, "stats event write failed");
            }
        });
    }

    /// Count a view, subject to the per-record cooldown. Returns whether the
    /// view was counted (a suppressed duplicate still reports success at the
    /// HTTP layer; the flag is for logging).
    pub async fn record_view(&self, id: &str, visitor: &str) -> bool {
        if !self.cooldown.check_and_mark(id, Instant::now()) {
            tracing::debug!(%id, "duplicate view suppressed by cooldown");
            return false;
        }
        self.record(id, StatKind::View, visitor).await;
        true
    }

    /// Per-record view counts over a trailing window, from the event log.
    /// Degraded mode (or a backend error) yields an empty map.
    pub async fn period_view_counts(&self, period: TimePeriod) -> HashMap<PromptId, u64> {
        let Some(backend) = &self.backend else {
            return HashMap::new();
        };
        let now = Utc::now();
        let since = now - Duration::days(period.days());
        match backend.events_since(since).await {
            Ok(events) => query::count_views_in_window(&events, period, now),
            Err(err) => {
                tracing::warn!(?period, error = %err, "stats window read failed");
                HashMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn degraded_reads_are_zeros_and_flagged() {
        let client = StatsClient::disabled();

        let snap = client.totals("p1").await;
        assert!(!snap.configured);
        assert_eq!(snap.totals, StatTotals::default());

        assert!(client.batch_totals(&["p1".to_string()]).await.is_empty());
        assert!(client.period_view_counts(TimePeriod::Week).await.is_empty());
    }

    #[tokio::test]
    async fn degraded_writes_are_accepted_noops() {
        let client = StatsClient::disabled();
        client.record("p1", StatKind::Copy, "anon").await;
        // Still degraded afterwards; nothing was persisted anywhere.
        assert!(!client.totals("p1").await.configured);
    }

    #[tokio::test]
    async fn record_increments_through_the_backend() {
        let client = StatsClient::in_memory();
        client.record("p1", StatKind::Like, "anon").await;
        client.record("p1", StatKind::Like, "anon").await;

        let snap = client.totals("p1").await;
        assert!(snap.configured);
        assert_eq!(snap.totals.likes, 2);
    }

    #[tokio::test]
    async fn rapid_views_are_deduplicated() {
        let client = StatsClient::in_memory();
        assert!(client.record_view("p1", "anon").await);
        assert!(!client.record_view("p1", "anon").await);

        let snap = client.totals("p1").await;
        assert_eq!(snap.totals.views, 1);
    }

    #[tokio::test]
    async fn period_counts_reflect_recorded_events() {
        let backend = Arc::new(MemoryCounterStore::new());
        let client = StatsClient::with_backend(backend.clone());

        client.record_view("p1", "anon").await;
        client.record("p2", StatKind::Copy, "anon").await;

        // The event row is written from a spawned task; give it a beat.
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let counts = client.period_view_counts(TimePeriod::Today).await;
        assert_eq!(counts.get("p1").copied(), Some(1));
        // Copies do not contribute to view windows.
        assert!(!counts.contains_key("p2"));
    }
}
