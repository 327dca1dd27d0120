// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for signed-in athletes.

use crate::error::{AppError, Result};
use crate::models::RunningSummary;
use crate::services::{aggregate, ApiError, Session};
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

/// API routes (require a session).
/// The session middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/running/summary", get(get_running_summary))
}

/// Monthly stats, personal bests and history for the running page.
///
/// If the backend answers with an error other than an auth rejection, the
/// empty summary is returned so the page still renders.
async fn get_running_summary(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Json<RunningSummary>> {
    let records = match state.run_duel.list_my_runnings(&session).await {
        Ok(records) => records,
        Err(err) if err.is_auth_error() => return Err(AppError::Unauthorized),
        Err(ApiError::Status { status, message }) => {
            tracing::warn!(
                status = status.as_u16(),
                error = %message,
                "Running history unavailable, serving empty summary"
            );
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };

    let summary = aggregate(&records);
    tracing::info!(
        runs = summary.history.len(),
        months = summary.monthly_stats.len(),
        "Running summary built"
    );

    Ok(Json(summary))
}
