use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use run_duel::models::RunningRecord;
use run_duel::services::aggregate;

/// A year of daily runs, most recent first, with every tenth pace missing.
fn year_of_runs() -> Vec<RunningRecord> {
    let last_day = NaiveDate::from_ymd_opt(2024, 12, 31)
        .and_then(|d| d.and_hms_opt(6, 30, 0))
        .expect("valid date");

    (0..365u64)
        .map(|i| {
            let distance = 3000 + (i * 137) % 12000;
            let duration = distance * 3 / 10 + (i % 60);
            RunningRecord {
                running_id: 365 - i,
                user_id: Some(1),
                crew_id: Some(1),
                distance,
                duration,
                avg_heartrate: None,
                pace: if i % 10 == 0 {
                    None
                } else {
                    Some((duration * 1000 / distance) as i64)
                },
                started_at: last_day - Duration::days(i as i64),
                created_at: None,
            }
        })
        .collect()
}

fn benchmark_aggregate(c: &mut Criterion) {
    let records = year_of_runs();
    let empty: Vec<RunningRecord> = Vec::new();

    let mut group = c.benchmark_group("running_summary");

    group.bench_function("year_of_daily_runs", |b| {
        b.iter(|| aggregate(black_box(&records)))
    });

    group.bench_function("empty_history", |b| b.iter(|| aggregate(black_box(&empty))));

    group.finish();
}

criterion_group!(benches, benchmark_aggregate);
criterion_main!(benches);
