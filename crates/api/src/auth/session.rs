//! Signed admin session tokens.
//!
//! A token is `"<session-id>.<issued-at>.<mac>"`: a random session id, the
//! issue time as a Unix timestamp, and an HMAC-SHA256 hex digest over the
//! first two parts. Nothing is stored server-side; possession of a token
//! with a valid signature inside its lifetime is the whole session.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::config::SessionConfig;

type HmacSha256 = Hmac<Sha256>;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "admin_session";

/// Issue a fresh signed session token.
pub fn issue_token(config: &SessionConfig, now: DateTime<Utc>) -> String {
    let payload = format!("{}.{}", Uuid::new_v4().simple(), now.timestamp());
    let mac = sign(&config.secret, &payload);
    format!("{payload}.{mac}")
}

/// Validate a token's shape, signature, and lifetime.
pub fn verify_token(config: &SessionConfig, token: &str, now: DateTime<Utc>) -> bool {
    let mut parts = token.splitn(3, '.');
    let (Some(session_id), Some(issued_at), Some(mac)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let Ok(issued_at_ts) = issued_at.parse::<i64>() else {
        return false;
    };

    let payload = format!("{session_id}.{issued_at}");
    if sign(&config.secret, &payload) != mac {
        return false;
    }

    let age_secs = now.timestamp() - issued_at_ts;
    (0..config.ttl_hours * 3600).contains(&age_secs)
}

fn sign(secret: &str, payload: &str) -> String {
    // HMAC accepts keys of any length, so this cannot fail.
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC key of any length is valid");
    mac.update(payload.as_bytes());
    format!("{:x}", mac.finalize().into_bytes())
}
