//! Route definitions for the prompt surface, mounted at `/prompts`.
//!
//! ```text
//! GET    /        -> list_prompts (public)
//! POST   /        -> create_prompt (gated)
//! GET    /top     -> top_prompts (public)
//! GET    /{id}    -> get_prompt (public)
//! PUT    /{id}    -> update_prompt (gated)
//! DELETE /{id}    -> delete_prompt (gated)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(prompts::list_prompts).post(prompts::create_prompt),
        )
        .route("/top", get(prompts::top_prompts))
        .route(
            "/{id}",
            get(prompts::get_prompt)
                .put(prompts::update_prompt)
                .delete(prompts::delete_prompt),
        )
}
