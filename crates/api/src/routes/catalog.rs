//! Route definitions for the fixed catalog (merged at the `/api/v1` root).
//!
//! ```text
//! GET /categories  -> list_categories
//! GET /tags        -> list_tags
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/tags", get(catalog::list_tags))
}
