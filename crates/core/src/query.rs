//! Pure query and aggregation functions over in-memory prompt lists.
//!
//! Nothing here performs I/O. Callers load records through the store (and
//! events through the stats client), then filter, sort, and paginate here.
//! All sorts are stable: ties keep their encountered order.

use std::collections::HashMap;

use chrono::Duration;
use serde::Serialize;

use crate::catalog;
use crate::prompt::{Prompt, PromptStatus};
use crate::stats::{StatEvent, StatKind, TimePeriod};
use crate::types::{PromptId, Timestamp};

// ---------------------------------------------------------------------------
// Visibility filters
// ---------------------------------------------------------------------------

/// All published prompts, in encountered order.
pub fn published(prompts: &[Prompt]) -> Vec<Prompt> {
    prompts
        .iter()
        .filter(|p| p.status == PromptStatus::Published)
        .cloned()
        .collect()
}

/// Find a published prompt by id. Draft and archived records are invisible.
pub fn find_published<'a>(prompts: &'a [Prompt], id: &str) -> Option<&'a Prompt> {
    prompts
        .iter()
        .find(|p| p.id == id && p.status == PromptStatus::Published)
}

/// Published prompts in the enabled category with the given slug.
///
/// Unknown or disabled slugs yield an empty result, not an error.
pub fn by_category(prompts: &[Prompt], slug: &str) -> Vec<Prompt> {
    let Some(category) = catalog::category_by_slug(slug) else {
        return Vec::new();
    };
    prompts
        .iter()
        .filter(|p| {
            p.status == PromptStatus::Published && p.category_id.as_deref() == Some(category.id)
        })
        .cloned()
        .collect()
}

/// Published prompts carrying the tag with the given slug.
pub fn by_tag(prompts: &[Prompt], slug: &str) -> Vec<Prompt> {
    let Some(tag) = catalog::tag_by_slug(slug) else {
        return Vec::new();
    };
    prompts
        .iter()
        .filter(|p| p.status == PromptStatus::Published && p.tags.iter().any(|t| t == tag.id))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive substring search over title, content, and description.
///
/// Match is boolean; ordering is left to the sort step. An empty or
/// whitespace-only query yields an empty result set, not "all records".
pub fn search(prompts: &[Prompt], query: &str) -> Vec<Prompt> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    prompts
        .iter()
        .filter(|p| {
            if p.status != PromptStatus::Published {
                return false;
            }
            p.title.to_lowercase().contains(&needle)
                || p.content.to_lowercase().contains(&needle)
                || p.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Sort mode for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Descending by `updated_at`.
    Latest,
    /// Descending by views.
    Popular,
    /// Descending by likes.
    Trending,
    /// Filter to records published within the trailing window, then sort by
    /// views descending.
    Window(TimePeriod),
}

impl SortBy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "latest" => Some(Self::Latest),
            "popular" => Some(Self::Popular),
            "trending" => Some(Self::Trending),
            other => TimePeriod::parse(other).map(Self::Window),
        }
    }
}

/// Sort (and for window modes, filter) a prompt list.
///
/// `now` anchors the trailing windows; pass `Utc::now()` outside tests.
pub fn sort(mut prompts: Vec<Prompt>, sort_by: SortBy, now: Timestamp) -> Vec<Prompt> {
    match sort_by {
        SortBy::Latest => {
            prompts.sort_by(|a, b| b.last_modified().cmp(&a.last_modified()));
        }
        SortBy::Popular => {
            prompts.sort_by(|a, b| b.views.cmp(&a.views));
        }
        SortBy::Trending => {
            prompts.sort_by(|a, b| b.likes.cmp(&a.likes));
        }
        SortBy::Window(period) => {
            let threshold = now - Duration::days(period.days());
            prompts.retain(|p| p.published_or_created() >= threshold);
            prompts.sort_by(|a, b| b.views.cmp(&a.views));
        }
    }
    prompts
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// One page of a sorted listing, with totals for client-side paging UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

/// Default page size for gallery listings.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Maximum page size accepted from callers.
pub const MAX_PAGE_SIZE: usize = 100;

/// Slice out one 1-based page. Pages past the end are empty, not errors;
/// page 0 is treated as page 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total);

    let data = if start < total {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        data,
        total,
        page,
        page_size,
        total_pages: total.div_ceil(page_size),
        has_more: page * page_size < total,
    }
}

// ---------------------------------------------------------------------------
// Relatedness
// ---------------------------------------------------------------------------

/// Top `limit` published prompts related to `source`, scored as
/// `3 x same-category + |tag intersection|`.
///
/// The sort is stable on ties and there is no minimum-score cutoff: a
/// zero-score record still fills the requested count when nothing better
/// exists.
pub fn related(source: &Prompt, prompts: &[Prompt], limit: usize) -> Vec<Prompt> {
    let mut scored: Vec<(u32, &Prompt)> = prompts
        .iter()
        .filter(|p| p.status == PromptStatus::Published && p.id != source.id)
        .map(|p| (relatedness_score(source, p), p))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, p)| p.clone())
        .collect()
}

fn relatedness_score(source: &Prompt, candidate: &Prompt) -> u32 {
    let same_category = source.category_id.is_some()
        && source.category_id == candidate.category_id;
    let shared_tags = candidate
        .tags
        .iter()
        .filter(|t| source.tags.contains(t))
        .count() as u32;

    if same_category { 3 + shared_tags } else { shared_tags }
}

// ---------------------------------------------------------------------------
// Window aggregation
// ---------------------------------------------------------------------------

/// Count `view` events per prompt id within the trailing window ending at
/// `now`. Other event kinds are ignored.
pub fn count_views_in_window(
    events: &[StatEvent],
    period: TimePeriod,
    now: Timestamp,
) -> HashMap<PromptId, u64> {
    let threshold = now - Duration::days(period.days());
    let mut counts: HashMap<PromptId, u64> = HashMap::new();

    for event in events {
        if event.kind == StatKind::View && event.created_at >= threshold {
            *counts.entry(event.prompt_id.clone()).or_default() += 1;
        }
    }

    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
