// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sign-up, sign-in and logout.
//!
//! Credentials are forwarded to the Run Duel backend; the tokens returned at
//! sign-in are handed back to the browser as HttpOnly cookies.

use crate::error::{AppError, Result};
use crate::middleware::auth::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::services::{
    ApiError, Session, SignInRequest, SignInResponse, SignUpRequest, SignUpResponse,
};
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;

/// Auth routes (no session required).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in))
        .route("/auth/logout", post(logout))
}

/// Create an account on the backend. The caller signs in separately.
async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>)> {
    if request.email.trim().is_empty()
        || request.password.is_empty()
        || request.nickname.trim().is_empty()
    {
        return Err(AppError::BadRequest(
            "email, password and nickname are required".to_string(),
        ));
    }

    let account = match state.run_duel.sign_up(&request).await {
        Ok(account) => account,
        // Duplicate email, weak password, ...: pass the backend's reason on
        Err(ApiError::Status { status, message }) if status.is_client_error() => {
            tracing::info!(status = status.as_u16(), error = %message, "Sign-up rejected");
            return Err(AppError::BadRequest(message));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(user_id = account.id, "Sign-up succeeded");
    Ok((StatusCode::CREATED, Json(account)))
}

/// Forward credentials to the backend and set the session cookies.
async fn sign_in(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<SignInRequest>,
) -> Result<(CookieJar, Json<SignInResponse>)> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let tokens = match state.run_duel.sign_in(&request).await {
        Ok(tokens) => tokens,
        Err(ApiError::Status { status, message }) if status.is_client_error() => {
            tracing::info!(status = status.as_u16(), error = %message, "Sign-in rejected");
            return Err(AppError::Unauthorized);
        }
        Err(err) => return Err(err.into()),
    };

    let session = Session::from(tokens.clone());
    let jar = add_session_cookies(jar, &session, state.config.cookie_secure);

    tracing::info!("Sign-in succeeded");
    Ok((jar, Json(tokens)))
}

/// Drop the session cookies.
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar
        .remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
        .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}

fn add_session_cookies(jar: CookieJar, session: &Session, secure: bool) -> CookieJar {
    let cookie = |name: &'static str, value: &str| {
        Cookie::build((name, value.to_string()))
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Lax)
    };

    let jar = jar.add(cookie(ACCESS_TOKEN_COOKIE, session.access_token()));
    match session.refresh_token() {
        Some(refresh) => jar.add(cookie(REFRESH_TOKEN_COOKIE, refresh)),
        None => jar,
    }
}
