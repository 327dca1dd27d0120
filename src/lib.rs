// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run Duel: running summaries for the Run Duel web app
//!
//! This crate fetches an athlete's running history from the Run Duel
//! backend and turns it into the monthly stats, personal bests and history
//! list shown on the running page.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::RunDuelClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub run_duel: RunDuelClient,
}

impl AppState {
    /// Build state from configuration.
    pub fn from_config(config: Config) -> Result<Self, services::ApiError> {
        let run_duel = RunDuelClient::new(&config.api_base_url, config.upstream_timeout)?;
        Ok(Self { config, run_duel })
    }
}
