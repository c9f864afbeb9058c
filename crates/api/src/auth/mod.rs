//! Admin session gate.
//!
//! Authentication is a single shared admin identity: login issues a signed
//! session cookie and [`AdminSession`] rejects any request whose cookie is
//! missing, malformed, forged, or expired. There are no per-user accounts
//! or roles.

pub mod session;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use chrono::Utc;

use gallery_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Verified admin session extracted from the `admin_session` cookie.
///
/// Use this as an extractor parameter in any handler that mutates records.
/// Extraction runs before the handler body, so rejected requests produce
/// no side effects:
///
/// ```ignore
/// async fn delete_prompt(_session: AdminSession, ...) -> AppResult<...> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
            })?;

        let token = cookie_value(cookie_header, session::SESSION_COOKIE).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;

        if !session::verify_token(&state.config.session, token, Utc::now()) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid or expired session".into(),
            )));
        }

        Ok(AdminSession)
    }
}

/// Pull one cookie's value out of a `Cookie` header.
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_named_cookie() {
        let header = "theme=dark; admin_session=abc.123.def; other=1";
        assert_eq!(cookie_value(header, "admin_session"), Some("abc.123.def"));
        assert_eq!(cookie_value(header, "theme"), Some("dark"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn cookie_value_ignores_name_substrings() {
        let header = "not_admin_session=evil";
        assert_eq!(cookie_value(header, "admin_session"), None);
    }
}
