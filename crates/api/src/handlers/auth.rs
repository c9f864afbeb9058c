//! Handlers for admin login and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use gallery_core::error::CoreError;

use crate::auth::session::{self, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// POST /api/v1/auth/login
///
/// Compare the submitted credentials against the configured admin account
/// and, on success, set a signed `admin_session` cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let admin = &state.config.admin;
    if input.username != admin.username || input.password != admin.password {
        tracing::warn!(username = %input.username, "Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = session::issue_token(&state.config.session, Utc::now());
    let max_age = state.config.session.ttl_hours * 3600;
    let cookie =
        format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");

    tracing::info!("Admin login succeeded");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(DataResponse {
            data: SessionStatus {
                authenticated: true,
            },
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Clear the session cookie. Tokens are stateless so there is nothing to
/// revoke server-side; expiry handles stragglers.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(DataResponse {
            data: SessionStatus {
                authenticated: false,
            },
        }),
    )
}
