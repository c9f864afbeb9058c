//! Route definition for image uploads, mounted at `/uploads`.
//!
//! ```text
//! POST / -> upload_image (gated)
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(uploads::upload_image))
}
