//! Handlers for the session-gated admin listing.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use gallery_core::prompt::{Prompt, PromptStatus};
use gallery_core::query::{self, SortBy};

use crate::auth::AdminSession;
use crate::error::AppResult;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Admin listing payload: the page plus per-status counts for dashboards.
#[derive(Debug, Serialize)]
pub struct AdminListing {
    #[serde(flatten)]
    pub page: query::Page<Prompt>,
    pub counts: StatusCounts,
}

#[derive(Debug, Serialize)]
pub struct StatusCounts {
    pub published: usize,
    pub draft: usize,
    pub archived: usize,
}

/// GET /api/v1/admin/prompts
///
/// Every record regardless of status, sorted and paginated like the public
/// listing. Counter merging is skipped; admin screens show stored counters.
pub async fn list_all_prompts(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<AdminListing>>> {
    let all = state.store.load_all().await?;

    let counts = StatusCounts {
        published: count_status(&all, PromptStatus::Published),
        draft: count_status(&all, PromptStatus::Draft),
        archived: count_status(&all, PromptStatus::Archived),
    };

    let sort_by = params
        .sort
        .as_deref()
        .and_then(SortBy::parse)
        .unwrap_or(SortBy::Latest);
    let sorted = query::sort(all, sort_by, Utc::now());
    let page = query::paginate(&sorted, params.page(), params.page_size());

    Ok(Json(DataResponse {
        data: AdminListing { page, counts },
    }))
}

fn count_status(prompts: &[Prompt], status: PromptStatus) -> usize {
    prompts.iter().filter(|p| p.status == status).count()
}
