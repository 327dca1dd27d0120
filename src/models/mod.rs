// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod running;
pub mod summary;

pub use running::RunningRecord;
pub use summary::{BestEntry, BestRecord, HistoryEntry, MonthlySummary, RunningSummary, PLACEHOLDER};
