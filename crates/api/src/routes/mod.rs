pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod prompts;
pub mod stats;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login              login (public)
/// /auth/logout             logout (public)
///
/// /prompts                 list (GET, public), create (POST, gated)
/// /prompts/top             windowed top ranking (GET, public)
/// /prompts/{id}            detail (GET, public), update (PUT) and
///                          delete (DELETE) gated
///
/// /admin/prompts           all-status listing (GET, gated)
///
/// /categories              catalog (GET, public)
/// /tags                    catalog (GET, public)
///
/// /stats                   totals (GET), record event (POST)
/// /stats/batch             bulk totals (GET)
///
/// /uploads                 image upload (POST, gated)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/prompts", prompts::router())
        .nest("/admin", admin::router())
        .merge(catalog::router())
        .nest("/stats", stats::router())
        .nest("/uploads", uploads::router())
}
