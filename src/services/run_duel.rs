// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run Duel backend client.
//!
//! Handles:
//! - Sign-up and sign-in (email/password -> bearer tokens)
//! - Listing the signed-in athlete's running records
//! - Extracting the backend's error message from failed responses

use crate::models::RunningRecord;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Bearer credential for one signed-in athlete.
///
/// Passed explicitly to every authenticated call; nothing is stored in
/// the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    refresh_token: Option<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl From<SignInResponse> for Session {
    fn from(response: SignInResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }
}

/// Credentials for `POST /auth/signin`.
#[derive(Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New account for `POST /auth/signup`.
#[derive(Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("nickname", &self.nickname)
            .finish()
    }
}

/// Account created by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub id: u64,
    pub email: String,
    pub nickname: String,
}

/// Tokens issued by the backend on sign-in.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Error body returned by the backend on failures.
#[derive(Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Errors talking to the Run Duel backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Backend answered with a non-success status.
    #[error("Backend returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// Request never got a response (connect, timeout, TLS).
    #[error("Backend request failed: {0}")]
    Transport(String),

    /// Response body was not what we expected.
    #[error("Unexpected backend response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend rejected the credential.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// Run Duel REST API client.
#[derive(Clone)]
pub struct RunDuelClient {
    http: reqwest::Client,
    base_url: String,
}

impl RunDuelClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an account. Does not sign in.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, ApiError> {
        self.post_json("/auth/signup", request).await
    }

    /// Exchange email/password for tokens.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ApiError> {
        self.post_json("/auth/signin", request).await
    }

    /// List all running records of the session's athlete, most recent first.
    pub async fn list_my_runnings(
        &self,
        session: &Session,
    ) -> Result<Vec<RunningRecord>, ApiError> {
        let url = format!("{}/api/v1/runnings/me", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(session.access_token())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = check_response(response).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let records: Vec<RunningRecord> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        tracing::debug!(count = records.len(), "Fetched running records");
        Ok(records)
    }

    /// Unauthenticated JSON POST with a JSON response.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Pass successful responses through; turn failures into `ApiError::Status`.
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: error_message(status, &body),
    })
}

/// Pick the backend's `message` field if the body carries one.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<BackendErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed (status {})", status.as_u16()))
}
