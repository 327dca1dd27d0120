// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Running record as returned by the Run Duel backend.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::time_utils;

/// One completed run, as listed by `GET /api/v1/runnings/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningRecord {
    /// Backend running ID
    pub running_id: u64,
    /// Owner user ID
    #[serde(default)]
    pub user_id: Option<u64>,
    /// Crew the run was counted for
    #[serde(default)]
    pub crew_id: Option<u64>,
    /// Distance in meters
    pub distance: u64,
    /// Duration in seconds
    pub duration: u64,
    #[serde(default)]
    pub avg_heartrate: Option<f64>,
    /// Seconds per km; null when the backend could not compute it
    #[serde(default)]
    pub pace: Option<i64>,
    /// Local start time, e.g. "2024-11-24T00:00:00"
    #[serde(with = "time_utils::started_at")]
    pub started_at: NaiveDateTime,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RunningRecord {
    /// Pace in seconds per km, if present and strictly positive.
    pub fn valid_pace(&self) -> Option<u64> {
        self.pace.filter(|p| *p > 0).map(|p| p as u64)
    }
}
