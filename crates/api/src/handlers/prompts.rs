//! Handlers for the public prompt surface and the gated mutations.
//!
//! Listings merge authoritative counter totals from the stats backend into
//! the records before sorting, so popularity ordering reflects live numbers
//! when a backend is configured and falls back to the stored counters when
//! it is not.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use gallery_core::error::CoreError;
use gallery_core::prompt::{CreatePrompt, Prompt, UpdatePrompt};
use gallery_core::query::{self, SortBy};
use gallery_core::stats::{StatTotals, TimePeriod};

use crate::auth::AdminSession;
use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::handlers::stats::VISITOR_ANON;
use crate::state::AppState;

/// Related records returned on the detail endpoint.
const RELATED_LIMIT: usize = 4;

/// Default number of records on the top-ranking endpoint.
const DEFAULT_TOP_LIMIT: usize = 10;

/// Overwrite stored counters with backend totals where a row exists.
fn merge_totals(prompts: &mut [Prompt], totals: &HashMap<String, StatTotals>) {
    for prompt in prompts.iter_mut() {
        if let Some(t) = totals.get(&prompt.id) {
            prompt.views = t.views;
            prompt.copies = t.copies;
            prompt.likes = t.likes;
        }
    }
}

// ---------------------------------------------------------------------------
// Public listing and detail
// ---------------------------------------------------------------------------

/// GET /api/v1/prompts
///
/// Published records, filtered (`category`, `tag`, `q`), sorted (`sort`,
/// default `latest`), and paginated (`page`, `page_size`).
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<query::Page<Prompt>>>> {
    let all = state.store.load_all().await?;

    let mut items = query::published(&all);
    if let Some(slug) = params.category.as_deref() {
        items = query::by_category(&items, slug);
    }
    if let Some(slug) = params.tag.as_deref() {
        items = query::by_tag(&items, slug);
    }
    if let Some(q) = params.q.as_deref() {
        items = query::search(&items, q);
    }

    let ids: Vec<String> = items.iter().map(|p| p.id.clone()).collect();
    let totals = state.stats.batch_totals(&ids).await;
    merge_totals(&mut items, &totals);

    let sort_by = params
        .sort
        .as_deref()
        .and_then(SortBy::parse)
        .unwrap_or(SortBy::Latest);
    let sorted = query::sort(items, sort_by, Utc::now());
    let page = query::paginate(&sorted, params.page(), params.page_size());

    Ok(Json(DataResponse { data: page }))
}

/// Detail payload: the record, its related records, and a stats snapshot.
#[derive(Debug, Serialize)]
pub struct PromptDetail {
    pub prompt: Prompt,
    pub related: Vec<Prompt>,
    pub stats: gallery_stats::StatsSnapshot,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    /// Count a view for this request (subject to the cooldown).
    #[serde(default)]
    pub record_view: bool,
}

/// GET /api/v1/prompts/{id}
///
/// Published record detail. Draft and archived records 404 here even though
/// they exist; only the admin listing exposes them.
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DetailParams>,
) -> AppResult<Json<DataResponse<PromptDetail>>> {
    let all = state.store.load_all().await?;

    let Some(found) = query::find_published(&all, &id) else {
        return Err(CoreError::NotFound {
            entity: "prompt",
            id,
        }
        .into());
    };

    if params.record_view {
        state.stats.record_view(&id, VISITOR_ANON).await;
    }

    let snapshot = state.stats.totals(&id).await;
    let mut prompt = found.clone();
    if snapshot.configured {
        prompt.views = snapshot.totals.views;
        prompt.copies = snapshot.totals.copies;
        prompt.likes = snapshot.totals.likes;
    }

    let related = query::related(&prompt, &all, RELATED_LIMIT);

    Ok(Json(DataResponse {
        data: PromptDetail {
            prompt,
            related,
            stats: snapshot,
        },
    }))
}

// ---------------------------------------------------------------------------
// Top ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TopParams {
    /// Trailing window (`today`, `week`, `month`; default `week`).
    pub period: Option<String>,
    pub limit: Option<usize>,
}

/// One entry in the top ranking: the record plus its windowed view count.
#[derive(Debug, Serialize)]
pub struct TopPrompt {
    #[serde(flatten)]
    pub prompt: Prompt,
    #[serde(rename = "periodViews")]
    pub period_views: u64,
}

/// GET /api/v1/prompts/top
///
/// Published records ranked by views within the trailing window, computed
/// from the raw event log. Degraded stats mean every count is zero and the
/// ranking falls back to document order.
pub async fn top_prompts(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> AppResult<Json<DataResponse<Vec<TopPrompt>>>> {
    let period = match params.period.as_deref() {
        None => TimePeriod::Week,
        Some(s) => TimePeriod::parse(s)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown period: {s}")))?,
    };

    let all = state.store.load_all().await?;
    let counts = state.stats.period_view_counts(period).await;

    let mut ranked: Vec<TopPrompt> = query::published(&all)
        .into_iter()
        .map(|prompt| {
            let period_views = counts.get(&prompt.id).copied().unwrap_or(0);
            TopPrompt {
                prompt,
                period_views,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.period_views.cmp(&a.period_views));
    ranked.truncate(params.limit.unwrap_or(DEFAULT_TOP_LIMIT).max(1));

    Ok(Json(DataResponse { data: ranked }))
}

// ---------------------------------------------------------------------------
// Gated mutations
// ---------------------------------------------------------------------------

/// POST /api/v1/prompts
///
/// Create a record. Identity and bookkeeping fields are assigned by the
/// store; the session gate runs before the body is touched.
pub async fn create_prompt(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreatePrompt>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let prompt = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: prompt })))
}

/// PUT /api/v1/prompts/{id}
///
/// Merge the provided fields into an existing record.
pub async fn update_prompt(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePrompt>,
) -> AppResult<Json<DataResponse<Prompt>>> {
    let updated = state
        .store
        .update(&id, input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "prompt",
            id,
        })?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/prompts/{id}
///
/// Remove a record. Deleting an id that does not exist reports
/// `deleted: false` rather than an error.
pub async fn delete_prompt(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let removed = state.store.delete(&id).await?;
    Ok(Json(DataResponse {
        data: json!({ "deleted": removed }),
    }))
}
