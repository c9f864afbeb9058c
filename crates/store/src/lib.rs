//! JSON-file backed prompt record store.
//!
//! The canonical record list is one JSON array rewritten wholesale on every
//! mutation. Writes within a process are serialized through a mutex held
//! across the full read-modify-write cycle, and each write lands via a temp
//! file plus atomic rename so readers never observe a torn document.
//! Cross-process writers still race last-writer-wins; callers needing more
//! must serialize externally.

mod seed;

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use gallery_core::prompt::{CreatePrompt, Prompt, PromptStatus, UpdatePrompt};
use gallery_core::types::PromptId;

pub use seed::seed_prompts;

/// Errors from the record store. I/O problems (permissions, missing
/// directory, disk) surface as `Unavailable`; a document that exists but
/// does not parse surfaces as `Corrupt`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("backing document unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("backing document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// File-backed store for the canonical prompt list.
pub struct PromptStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PromptStore {
    /// Create a store over the given document path. No I/O happens here;
    /// the document is bootstrapped lazily on first read.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record list.
    ///
    /// On first-ever access, when no document exists, the bundled seed list
    /// is written first. The bootstrap is idempotent: once the document
    /// exists it is never re-seeded, even if emptied.
    pub async fn load_all(&self) -> Result<Vec<Prompt>, StoreError> {
        self.ensure_document().await?;
        self.read_document().await
    }

    /// Insert or replace a record by id, rewriting the whole document.
    ///
    /// An existing record is replaced in place (position preserved) and its
    /// original `created_at` is re-attached regardless of what the caller
    /// supplied. A new record is inserted at the front of the list.
    pub async fn upsert(&self, mut prompt: Prompt) -> Result<Prompt, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut prompts = self.load_unlocked().await?;

        match prompts.iter().position(|p| p.id == prompt.id) {
            Some(index) => {
                prompt.created_at = prompts[index].created_at;
                prompts[index] = prompt.clone();
            }
            None => prompts.insert(0, prompt.clone()),
        }

        self.persist(&prompts).await?;
        Ok(prompt)
    }

    /// Create a new record from the mutable fields, assigning identity and
    /// bookkeeping: fresh UUID id, created/updated stamped now, zeroed
    /// counters, default status `published`.
    pub async fn create(&self, input: CreatePrompt) -> Result<Prompt, StoreError> {
        let now = Utc::now();
        let prompt = Prompt {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            content: input.content,
            description: input.description,
            image_url: input.image_url,
            category_id: input.category_id,
            tags: input.tags,
            metadata: input.metadata,
            status: input.status.unwrap_or(PromptStatus::Published),
            views: 0,
            copies: 0,
            likes: 0,
            created_at: now,
            updated_at: now,
            published_at: input.published_at,
        };

        let _guard = self.write_lock.lock().await;
        let mut prompts = self.load_unlocked().await?;
        prompts.insert(0, prompt.clone());
        self.persist(&prompts).await?;

        tracing::info!(id = %prompt.id, title = %prompt.title, "prompt created");
        Ok(prompt)
    }

    /// Merge an update into an existing record: `id` and `created_at` are
    /// preserved, provided fields overwrite, `updated_at` is stamped now.
    ///
    /// Returns `None` if no record has the given id.
    pub async fn update(
        &self,
        id: &str,
        input: UpdatePrompt,
    ) -> Result<Option<Prompt>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut prompts = self.load_unlocked().await?;

        let Some(existing) = prompts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = input.title {
            existing.title = title;
        }
        if let Some(content) = input.content {
            existing.content = content;
        }
        if let Some(description) = input.description {
            existing.description = Some(description);
        }
        if let Some(image_url) = input.image_url {
            existing.image_url = image_url;
        }
        if let Some(category_id) = input.category_id {
            existing.category_id = Some(category_id);
        }
        if let Some(tags) = input.tags {
            existing.tags = tags;
        }
        if let Some(metadata) = input.metadata {
            existing.metadata = Some(metadata);
        }
        if let Some(status) = input.status {
            existing.status = status;
        }
        if let Some(published_at) = input.published_at {
            existing.published_at = Some(published_at);
        }
        existing.updated_at = Utc::now();

        let updated = existing.clone();
        self.persist(&prompts).await?;

        tracing::info!(id = %updated.id, "prompt updated");
        Ok(Some(updated))
    }

    /// Remove a record by id, rewriting the remaining list. Removing an
    /// absent id is a no-op, not an error; returns whether a record was
    /// actually removed.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut prompts = self.load_unlocked().await?;

        let before = prompts.len();
        prompts.retain(|p| p.id != id);
        let removed = prompts.len() != before;

        if removed {
            self.persist(&prompts).await?;
            tracing::info!(%id, "prompt deleted");
        }
        Ok(removed)
    }

    /// Find a single record by id, any status.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, StoreError> {
        Ok(self.load_all().await?.into_iter().find(|p| p.id == id))
    }

    // -- internals -----------------------------------------------------------

    /// Load inside an already-held write lock (bootstrap included).
    async fn load_unlocked(&self) -> Result<Vec<Prompt>, StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            self.read_document().await
        } else {
            let seeded = seed::seed_prompts();
            self.persist(&seeded).await?;
            tracing::info!(path = %self.path.display(), count = seeded.len(), "seeded backing document");
            Ok(seeded)
        }
    }

    async fn ensure_document(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        // Take the write lock so two first readers do not both seed.
        let _guard = self.write_lock.lock().await;
        if !tokio::fs::try_exists(&self.path).await? {
            let seeded = seed::seed_prompts();
            self.persist(&seeded).await?;
            tracing::info!(path = %self.path.display(), count = seeded.len(), "seeded backing document");
        }
        Ok(())
    }

    async fn read_document(&self) -> Result<Vec<Prompt>, StoreError> {
        let raw = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Rewrite the whole document: serialize, write a sibling temp file,
    /// atomically rename over the target.
    async fn persist(&self, prompts: &[Prompt]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(prompts)?;
        let tmp = self
            .path
            .with_extension(format!("tmp-{}", Uuid::new_v4()));
        tokio::fs::write(&tmp, &body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
