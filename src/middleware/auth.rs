// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session extraction middleware.
//!
//! Tokens are not verified here; the Run Duel backend rejects bad ones and
//! that rejection is surfaced as 401 by the handlers.

use crate::error::AppError;
use crate::services::Session;
use axum::{extract::Request, http::header, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;

/// Cookie holding the access token issued at sign-in.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Cookie holding the refresh token issued at sign-in.
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Middleware that requires a bearer credential and exposes it as a `Session`.
pub async fn require_session(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let token = match jar.get(ACCESS_TOKEN_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => cookie.value().to_string(),
        _ => {
            let auth_header = request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok());

            bearer_token(auth_header)
                .ok_or(AppError::Unauthorized)?
                .to_string()
        }
    };

    let session = match jar.get(REFRESH_TOKEN_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => {
            Session::new(token).with_refresh_token(cookie.value())
        }
        _ => Session::new(token),
    };
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Token part of an `Authorization: Bearer <token>` header value.
fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    header_value
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
