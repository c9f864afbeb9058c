//! Handlers for the engagement counter endpoints.
//!
//! Everything here degrades rather than fails: with no configured backend
//! the reads return zeros with `configured: false` and the writes are
//! accepted no-ops, so galleries keep rendering without analytics.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use gallery_core::stats::{StatKind, StatTotals};
use gallery_stats::StatsSnapshot;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Visitor label attached to event rows. There is no visitor identity
/// tracking; every event is anonymous.
pub const VISITOR_ANON: &str = "anon";

#[derive(Debug, Deserialize)]
pub struct StatParams {
    pub prompt_id: String,
    /// Count a view for this request (subject to the cooldown).
    #[serde(default)]
    pub record_view: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsPayload {
    #[serde(rename = "promptId")]
    pub prompt_id: String,
    #[serde(flatten)]
    pub snapshot: StatsSnapshot,
}

/// GET /api/v1/stats?prompt_id=&record_view=
///
/// Totals for one record, optionally counting a view first.
pub async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<StatParams>,
) -> AppResult<Json<DataResponse<StatsPayload>>> {
    if params.record_view {
        state.stats.record_view(&params.prompt_id, VISITOR_ANON).await;
    }

    let snapshot = state.stats.totals(&params.prompt_id).await;
    Ok(Json(DataResponse {
        data: StatsPayload {
            prompt_id: params.prompt_id,
            snapshot,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct BatchParams {
    /// Comma-separated record ids.
    pub prompt_ids: String,
}

#[derive(Debug, Serialize)]
pub struct BatchPayload {
    /// Totals per requested id; ids without a backend row are zero-filled.
    pub stats: HashMap<String, StatTotals>,
    pub configured: bool,
}

/// GET /api/v1/stats/batch?prompt_ids=a,b,c
///
/// Totals for many records in one round trip.
pub async fn batch_stats(
    State(state): State<AppState>,
    Query(params): Query<BatchParams>,
) -> AppResult<Json<DataResponse<BatchPayload>>> {
    let ids: Vec<String> = params
        .prompt_ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let mut totals = state.stats.batch_totals(&ids).await;
    let stats: HashMap<String, StatTotals> = ids
        .into_iter()
        .map(|id| {
            let t = totals.remove(&id).unwrap_or_default();
            (id, t)
        })
        .collect();

    Ok(Json(DataResponse {
        data: BatchPayload {
            stats,
            configured: state.stats.is_configured(),
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct RecordStatRequest {
    #[serde(rename = "promptId")]
    pub prompt_id: String,
    #[serde(rename = "eventType")]
    pub event_type: String,
}

/// POST /api/v1/stats
///
/// Count one event. Views run through the cooldown; copies and likes are
/// counted unconditionally.
pub async fn record_stat(
    State(state): State<AppState>,
    Json(input): Json<RecordStatRequest>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let Some(kind) = StatKind::parse(&input.event_type) else {
        return Err(AppError::BadRequest(format!(
            "Unknown event type: {}",
            input.event_type
        )));
    };

    let counted = match kind {
        StatKind::View => state.stats.record_view(&input.prompt_id, VISITOR_ANON).await,
        _ => {
            state.stats.record(&input.prompt_id, kind, VISITOR_ANON).await;
            true
        }
    };

    Ok(Json(DataResponse {
        data: json!({
            "recorded": counted,
            "configured": state.stats.is_configured(),
        }),
    }))
}
