// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display-ready running summary returned to the frontend.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Placeholder shown when a value or date is not available.
pub const PLACEHOLDER: &str = "-";

/// Monthly stats, personal bests and history for one athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RunningSummary {
    pub monthly_stats: Vec<MonthlySummary>,
    pub best_record: BestRecord,
    pub history: Vec<HistoryEntry>,
}

impl RunningSummary {
    /// Summary of an athlete with no runs.
    pub fn empty() -> Self {
        Self {
            monthly_stats: Vec::new(),
            best_record: BestRecord::default(),
            history: Vec::new(),
        }
    }
}

/// Runs bucketed by month of year.
///
/// The year is not part of the key, so the same month of different years
/// shares a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MonthlySummary {
    /// Month of year (1-12)
    pub month: u32,
    /// Total distance in km, one decimal
    pub distance: String,
    /// Number of runs
    pub count: u32,
}

impl MonthlySummary {
    /// Label as shown on the month card, e.g. "11월".
    pub fn month_label(&self) -> String {
        format!("{}월", self.month)
    }

    /// Distance with unit, e.g. "12.5km".
    pub fn distance_label(&self) -> String {
        format!("{}km", self.distance)
    }

    /// Run count with unit, e.g. "3회".
    pub fn count_label(&self) -> String {
        format!("{}회", self.count)
    }
}

/// Personal bests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BestRecord {
    /// Longest single run (km, one decimal)
    pub max_dist: BestEntry,
    /// Fastest valid pace (m:ss)
    pub best_pace: BestEntry,
}

impl Default for BestRecord {
    fn default() -> Self {
        Self {
            max_dist: BestEntry::new("0", PLACEHOLDER),
            best_pace: BestEntry::placeholder(),
        }
    }
}

/// A personal best value with the date it was set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BestEntry {
    pub value: String,
    pub date: String,
}

impl BestEntry {
    pub fn new(value: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            date: date.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER, PLACEHOLDER)
    }
}

/// One row of the running history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistoryEntry {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    /// YYYY.MM.DD
    pub date: String,
    /// km, two decimals
    pub distance: String,
    /// m:ss
    pub time: String,
    /// m'ss" or "-"
    pub pace: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_summary_json_shape() {
        let value = serde_json::to_value(RunningSummary::empty()).unwrap();

        assert_eq!(
            value,
            json!({
                "monthlyStats": [],
                "bestRecord": {
                    "maxDist": { "value": "0", "date": "-" },
                    "bestPace": { "value": "-", "date": "-" }
                },
                "history": []
            })
        );
    }

    #[test]
    fn test_month_card_labels() {
        let stat = MonthlySummary {
            month: 11,
            distance: "12.5".to_string(),
            count: 3,
        };

        assert_eq!(stat.month_label(), "11월");
        assert_eq!(stat.distance_label(), "12.5km");
        assert_eq!(stat.count_label(), "3회");
    }
}
