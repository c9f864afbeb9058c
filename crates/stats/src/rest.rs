//! Counter backend speaking a Supabase-style PostgREST surface.
//!
//! Three remote objects are used: an `increment_stat` RPC that bumps a
//! counter atomically server-side, a `prompt_stats` table holding one totals
//! row per prompt, and a `stat_events` table appended to per increment.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use gallery_core::stats::{StatEvent, StatKind, StatTotals};
use gallery_core::types::{PromptId, Timestamp};

use crate::{CounterStore, StatsError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

fn column(kind: StatKind) -> &'static str {
    match kind {
        StatKind::View => "views",
        StatKind::Copy => "copies",
        StatKind::Like => "likes",
    }
}

fn event_name(kind: StatKind) -> &'static str {
    match kind {
        StatKind::View => "view",
        StatKind::Copy => "copy",
        StatKind::Like => "like",
    }
}

#[derive(Deserialize)]
struct TotalsRow {
    #[serde(default)]
    prompt_id: String,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    copies: u64,
    #[serde(default)]
    likes: u64,
}

impl TotalsRow {
    fn totals(&self) -> StatTotals {
        StatTotals {
            views: self.views,
            copies: self.copies,
            likes: self.likes,
        }
    }
}

#[derive(Deserialize)]
struct EventRow {
    prompt_id: String,
    event_type: String,
    #[serde(default)]
    visitor_id: String,
    created_at: Timestamp,
}

/// Remote counter store over HTTPS.
pub struct RestCounterStore {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl RestCounterStore {
    /// `base_url` is the service root (no trailing slash needed);
    /// `service_key` authenticates every request.
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }
}

#[async_trait]
impl CounterStore for RestCounterStore {
    async fn increment(&self, id: &str, kind: StatKind) -> Result<(), StatsError> {
        self.request(reqwest::Method::POST, "/rest/v1/rpc/increment_stat")
            .json(&json!({ "p_prompt_id": id, "p_stat_type": column(kind) }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn totals(&self, id: &str) -> Result<StatTotals, StatsError> {
        let rows: Vec<TotalsRow> = self
            .request(reqwest::Method::GET, "/rest/v1/prompt_stats")
            .query(&[
                ("prompt_id", format!("eq.{id}")),
                ("select", "views,copies,likes".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rows.first().map(TotalsRow::totals).unwrap_or_default())
    }

    async fn batch_totals(
        &self,
        ids: &[PromptId],
    ) -> Result<HashMap<PromptId, StatTotals>, StatsError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let filter = format!("in.({})", ids.join(","));
        let rows: Vec<TotalsRow> = self
            .request(reqwest::Method::GET, "/rest/v1/prompt_stats")
            .query(&[
                ("prompt_id", filter),
                ("select", "prompt_id,views,copies,likes".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| (row.prompt_id.clone(), row.totals()))
            .collect())
    }

    async fn record_event(
        &self,
        id: &str,
        kind: StatKind,
        visitor: &str,
    ) -> Result<(), StatsError> {
        self.request(reqwest::Method::POST, "/rest/v1/stat_events")
            .json(&json!({
                "prompt_id": id,
                "event_type": event_name(kind),
                "visitor_id": visitor,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn events_since(&self, since: Timestamp) -> Result<Vec<StatEvent>, StatsError> {
        let rows: Vec<EventRow> = self
            .request(reqwest::Method::GET, "/rest/v1/stat_events")
            .query(&[
                ("created_at", format!("gte.{}", since.to_rfc3339())),
                (
                    "select",
                    "prompt_id,event_type,visitor_id,created_at".to_string(),
                ),
                ("order", "created_at.asc".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Rows with an unrecognized event type are skipped rather than
        // failing the whole read.
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let kind = StatKind::parse(&row.event_type)?;
                Some(StatEvent {
                    prompt_id: row.prompt_id,
                    kind,
                    visitor_id: row.visitor_id,
                    created_at: row.created_at,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_columns_match_wire_names() {
        assert_eq!(column(StatKind::View), "views");
        assert_eq!(column(StatKind::Copy), "copies");
        assert_eq!(column(StatKind::Like), "likes");
        assert_eq!(event_name(StatKind::Copy), "copy");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let store = RestCounterStore::new("https://stats.example.com/", "key");
        assert_eq!(store.base_url, "https://stats.example.com");
    }
}
