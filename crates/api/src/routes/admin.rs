//! Route definitions for gated admin endpoints, mounted at `/admin`.
//!
//! ```text
//! GET /prompts  -> list_all_prompts (all statuses)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/prompts", get(admin::list_all_prompts))
}
