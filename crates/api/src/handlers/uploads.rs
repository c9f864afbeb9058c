//! Handler for admin image uploads.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AdminSession;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public URL of the stored file, served by the static file layer.
    pub url: String,
}

/// POST /api/v1/uploads
///
/// Accept a multipart `file` field and write it under the upload directory
/// with a fresh UUID name, keeping the original extension. No content-type
/// or size validation happens here.
pub async fn upload_image(
    _session: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<UploadResponse>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().map(ToString::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

        let filename = unique_filename(original_name.as_deref());
        let dir = &state.config.upload_dir;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create upload dir: {e}")))?;
        tokio::fs::write(dir.join(&filename), &bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store upload: {e}")))?;

        tracing::info!(file = %filename, size = bytes.len(), "Image uploaded");

        return Ok(Json(DataResponse {
            data: UploadResponse {
                url: format!("/uploads/{filename}"),
            },
        }));
    }

    Err(AppError::BadRequest("Missing multipart field 'file'".into()))
}

/// A UUID filename with the original extension, if any, carried over.
fn unique_filename(original: Option<&str>) -> String {
    let ext = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|e| e.to_str());

    match ext {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_keeps_original_extension() {
        let name = unique_filename(Some("photo.png"));
        assert!(name.ends_with(".png"));
        assert_ne!(name, "photo.png");
    }

    #[test]
    fn filename_without_extension_is_bare_uuid() {
        let name = unique_filename(Some("README"));
        assert!(!name.contains('.'));

        let name = unique_filename(None);
        assert!(!name.contains('.'));
    }
}
