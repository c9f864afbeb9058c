//! Prompt record types and create/update DTOs.
//!
//! The serialized form uses camelCase field names and ISO-8601 timestamps;
//! this is the on-disk layout of the backing JSON document, so renames here
//! are load-bearing.

use serde::{Deserialize, Serialize};

use crate::types::{PromptId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Lifecycle status of a prompt record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStatus {
    Published,
    Draft,
    Archived,
}

/// Optional generation metadata attached to a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
}

/// A single gallery entry: image reference, prompt text, and metadata.
///
/// The view/copy/like counters stored here are a stale cache written at
/// creation time; authoritative values come from the stats counter at read
/// time. `created_at` is set once and never mutated, `updated_at` is
/// refreshed on every mutation, `published_at` is caller-controlled and
/// never auto-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Tag ids; membership-only semantics, order irrelevant. Dangling
    /// references into the catalog are tolerated, not validated.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PromptMetadata>,
    pub status: PromptStatus,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub copies: u64,
    #[serde(default)]
    pub likes: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

impl Prompt {
    /// Effective ordering timestamp for "latest" sorting.
    pub fn last_modified(&self) -> Timestamp {
        self.updated_at
    }

    /// Effective publication timestamp for window filtering: `published_at`
    /// when set, otherwise `created_at`.
    pub fn published_or_created(&self) -> Timestamp {
        self.published_at.unwrap_or(self.created_at)
    }
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a new prompt. The store assigns id, timestamps,
/// zeroed counters, and the default status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrompt {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Option<PromptMetadata>,
    #[serde(default)]
    pub status: Option<PromptStatus>,
    #[serde(default)]
    pub published_at: Option<Timestamp>,
}

impl CreatePrompt {
    /// Validate required fields before a record is created.
    pub fn validate(&self) -> Result<(), crate::error::CoreError> {
        if self.title.trim().is_empty() {
            return Err(crate::error::CoreError::Validation(
                "title must not be empty".to_string(),
            ));
        }
        if self.content.trim().is_empty() {
            return Err(crate::error::CoreError::Validation(
                "content must not be empty".to_string(),
            ));
        }
        if self.image_url.trim().is_empty() {
            return Err(crate::error::CoreError::Validation(
                "imageUrl must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for updating an existing prompt. Only mutable fields appear here;
/// the store performs the merge, preserving `id` and `created_at` and
/// stamping `updated_at`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrompt {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub metadata: Option<PromptMetadata>,
    #[serde(default)]
    pub status: Option<PromptStatus>,
    #[serde(default)]
    pub published_at: Option<Timestamp>,
}
