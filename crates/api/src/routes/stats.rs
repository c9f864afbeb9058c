//! Route definitions for engagement counters, mounted at `/stats`.
//!
//! ```text
//! GET  /        -> get_stats
//! POST /        -> record_stat
//! GET  /batch   -> batch_stats
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stats::get_stats).post(stats::record_stat))
        .route("/batch", get(stats::batch_stats))
}
