//! Handlers for the fixed category and tag catalog.

use axum::Json;

use gallery_core::catalog::{self, Category, Tag};

use crate::response::DataResponse;

/// GET /api/v1/categories
///
/// Enabled categories in display order.
pub async fn list_categories() -> Json<DataResponse<Vec<&'static Category>>> {
    Json(DataResponse {
        data: catalog::all_categories(),
    })
}

/// GET /api/v1/tags
pub async fn list_tags() -> Json<DataResponse<&'static [Tag]>> {
    Json(DataResponse {
        data: catalog::all_tags(),
    })
}
