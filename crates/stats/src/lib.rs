//! Engagement counters for the gallery.
//!
//! Counter state (views, copies, likes) lives in an external service behind
//! the [`CounterStore`] trait, not in the record document. [`StatsClient`]
//! wraps an optional backend: when none is configured the whole subsystem
//! degrades to zeros and no-op writes instead of failing.

pub mod cooldown;

mod client;
mod memory;
mod rest;

use std::collections::HashMap;

use async_trait::async_trait;

use gallery_core::stats::{StatEvent, StatKind, StatTotals};
use gallery_core::types::{PromptId, Timestamp};

pub use client::{StatsClient, StatsSnapshot};
pub use cooldown::{ViewCooldown, DEFAULT_COOLDOWN_CAPACITY, VIEW_COOLDOWN};
pub use memory::MemoryCounterStore;
pub use rest::RestCounterStore;

/// Errors talking to a counter backend. These never reach HTTP handlers;
/// [`StatsClient`] logs them and degrades.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("counter store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("counter store returned an unexpected payload: {0}")]
    Payload(String),
}

/// External counter service.
///
/// Increments must be atomic on the backend side (read-modify-write cycles
/// in this process are not acceptable). Totals for an id with no row yet
/// are zero, not an error.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically add one to the given counter.
    async fn increment(&self, id: &str, kind: StatKind) -> Result<(), StatsError>;

    /// Current totals for one record. Unknown id reads as all zeros.
    async fn totals(&self, id: &str) -> Result<StatTotals, StatsError>;

    /// Totals for many records in one round trip. Ids without a row are
    /// simply absent from the map.
    async fn batch_totals(
        &self,
        ids: &[PromptId],
    ) -> Result<HashMap<PromptId, StatTotals>, StatsError>;

    /// Append a timestamped event row for windowed aggregation.
    async fn record_event(
        &self,
        id: &str,
        kind: StatKind,
        visitor: &str,
    ) -> Result<(), StatsError>;

    /// Events at or after `since`, oldest first.
    async fn events_since(&self, since: Timestamp) -> Result<Vec<StatEvent>, StatsError>;
}
