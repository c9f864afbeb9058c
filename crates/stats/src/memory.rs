//! In-process counter backend for local development and tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use gallery_core::stats::{StatEvent, StatKind, StatTotals};
use gallery_core::types::{PromptId, Timestamp};

use crate::{CounterStore, StatsError};

/// Counter backend holding everything in process memory. State is lost on
/// restart; useful where no external counter service is available.
#[derive(Default)]
pub struct MemoryCounterStore {
    totals: Mutex<HashMap<PromptId, StatTotals>>,
    events: Mutex<Vec<StatEvent>>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment(&self, id: &str, kind: StatKind) -> Result<(), StatsError> {
        let mut totals = self.totals.lock().unwrap_or_else(|e| e.into_inner());
        let entry = totals.entry(id.to_string()).or_default();
        match kind {
            StatKind::View => entry.views += 1,
            StatKind::Copy => entry.copies += 1,
            StatKind::Like => entry.likes += 1,
        }
        Ok(())
    }

    async fn totals(&self, id: &str) -> Result<StatTotals, StatsError> {
        let totals = self.totals.lock().unwrap_or_else(|e| e.into_inner());
        Ok(totals.get(id).copied().unwrap_or_default())
    }

    async fn batch_totals(
        &self,
        ids: &[PromptId],
    ) -> Result<HashMap<PromptId, StatTotals>, StatsError> {
        let totals = self.totals.lock().unwrap_or_else(|e| e.into_inner());
        Ok(ids
            .iter()
            .filter_map(|id| totals.get(id).map(|t| (id.clone(), *t)))
            .collect())
    }

    async fn record_event(
        &self,
        id: &str,
        kind: StatKind,
        visitor: &str,
    ) -> Result<(), StatsError> {
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(StatEvent {
            prompt_id: id.to_string(),
            kind,
            visitor_id: visitor.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn events_since(&self, since: Timestamp) -> Result<Vec<StatEvent>, StatsError> {
        let events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        Ok(events
            .iter()
            .filter(|e| e.created_at >= since)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn increments_accumulate_per_kind() {
        let store = MemoryCounterStore::new();
        store.increment("p1", StatKind::View).await.unwrap();
        store.increment("p1", StatKind::View).await.unwrap();
        store.increment("p1", StatKind::Copy).await.unwrap();

        let totals = store.totals("p1").await.unwrap();
        assert_eq!(totals.views, 2);
        assert_eq!(totals.copies, 1);
        assert_eq!(totals.likes, 0);
    }

    #[tokio::test]
    async fn unknown_id_reads_as_zeros() {
        let store = MemoryCounterStore::new();
        assert_eq!(store.totals("missing").await.unwrap(), StatTotals::default());
    }

    #[tokio::test]
    async fn batch_omits_ids_without_rows() {
        let store = MemoryCounterStore::new();
        store.increment("a", StatKind::Like).await.unwrap();

        let map = store
            .batch_totals(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"].likes, 1);
    }

    #[tokio::test]
    async fn events_since_filters_by_timestamp() {
        let store = MemoryCounterStore::new();
        let before = Utc::now();
        store.record_event("p1", StatKind::View, "anon").await.unwrap();

        assert_eq!(store.events_since(before).await.unwrap().len(), 1);
        let later = Utc::now() + chrono::Duration::hours(1);
        assert!(store.events_since(later).await.unwrap().is_empty());
    }
}
