// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Running summary aggregation.
//!
//! Turns the backend's running history (most recent first) into the three
//! views of the running page:
//! - per-month distance and run count
//! - personal bests (longest run, fastest pace)
//! - a formatted history list
//!
//! Everything here is a pure function of the input slice.

use chrono::Datelike;

use crate::models::{
    BestEntry, BestRecord, HistoryEntry, MonthlySummary, RunningRecord, RunningSummary,
    PLACEHOLDER,
};
use crate::time_utils::format_display_date;

/// Aggregate running records into a display-ready summary.
///
/// Input order is kept as-is for the history list and decides tie-breaks
/// (the first record encountered wins).
pub fn aggregate(records: &[RunningRecord]) -> RunningSummary {
    if records.is_empty() {
        return RunningSummary::empty();
    }

    RunningSummary {
        monthly_stats: monthly_stats(records),
        best_record: BestRecord {
            max_dist: longest_run(records),
            best_pace: fastest_pace(records),
        },
        history: records.iter().map(history_entry).collect(),
    }
}

fn history_entry(record: &RunningRecord) -> HistoryEntry {
    HistoryEntry {
        id: record.running_id,
        date: format_display_date(&record.started_at),
        distance: format_km(record.distance, 2),
        time: format_clock(record.duration),
        pace: format_pace(record.pace),
    }
}

/// Bucket runs by month of year, in first-seen order.
fn monthly_stats(records: &[RunningRecord]) -> Vec<MonthlySummary> {
    // (month, meters, count); at most 12 entries
    let mut buckets: Vec<(u32, u64, u32)> = Vec::new();

    for record in records {
        let month = record.started_at.month();
        match buckets.iter_mut().find(|(m, _, _)| *m == month) {
            Some((_, meters, count)) => {
                *meters += record.distance;
                *count += 1;
            }
            None => buckets.push((month, record.distance, 1)),
        }
    }

    buckets
        .into_iter()
        .map(|(month, meters, count)| MonthlySummary {
            month,
            distance: format_km(meters, 1),
            count,
        })
        .collect()
}

fn longest_run(records: &[RunningRecord]) -> BestEntry {
    let longest = records.iter().reduce(|best, curr| {
        if curr.distance > best.distance {
            curr
        } else {
            best
        }
    });

    match longest {
        Some(r) => BestEntry::new(format_km(r.distance, 1), format_display_date(&r.started_at)),
        None => BestRecord::default().max_dist,
    }
}

fn fastest_pace(records: &[RunningRecord]) -> BestEntry {
    let fastest = records
        .iter()
        .filter_map(|r| r.valid_pace().map(|pace| (pace, r)))
        .reduce(|best, curr| if curr.0 < best.0 { curr } else { best });

    match fastest {
        Some((pace, r)) => BestEntry::new(format_clock(pace), format_display_date(&r.started_at)),
        None => BestEntry::placeholder(),
    }
}

/// Meters as kilometers with a fixed number of decimals (at most 3).
///
/// Rounds half up on the exact meter value, so 1005 m is "1.01".
pub fn format_km(meters: u64, decimals: u32) -> String {
    let decimals = decimals.min(3);
    let step = 10u64.pow(3 - decimals);
    let scaled = (meters + step / 2) / step;

    if decimals == 0 {
        return scaled.to_string();
    }

    let unit = 10u64.pow(decimals);
    format!(
        "{}.{:0width$}",
        scaled / unit,
        scaled % unit,
        width = decimals as usize
    )
}

/// Seconds as "m:ss". Minutes are not folded into hours.
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Pace in seconds per km as `m'ss"`, or "-" when absent or non-positive.
pub fn format_pace(pace: Option<i64>) -> String {
    match pace.filter(|p| *p > 0) {
        Some(p) => format!("{}'{:02}\"", p / 60, p % 60),
        None => PLACEHOLDER.to_string(),
    }
}
