//! Aggregation engine behind the dashboard widgets.
//!
//! Every function here is pure and synchronous: it consumes one fetched page
//! of [`SaleRow`]s and produces derived view-model values. Input rows are
//! never mutated, nothing is cached between calls, and the only ambient
//! dependency — today's date for the 7-day window — comes in through an
//! explicit [`Clock`].

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use shared::clock::Clock;
use shared::ordered_map::OrderedMap;

use crate::models::analytics::{KpiMetrics, PerformancePoint, StatusSlice, TopPerformer};
use crate::models::sale_row::{SaleRow, SaleStatus};

/// Number of calendar days in the performance window, today inclusive.
const PERFORMANCE_WINDOW_DAYS: i64 = 7;

/// Leaderboard cutoff.
const TOP_PERFORMER_LIMIT: usize = 5;

/// Doughnut-chart color for a status; unknown statuses fall back to gray.
pub fn chart_color(status: &str) -> &'static str {
    match status {
        "success" => "#10b981",
        "failed" => "#ef4444",
        "duplicate" => "#f59e0b",
        "pending" => "#3b82f6",
        _ => "#6b7280",
    }
}

/// Computes the KPI snapshot for one page.
///
/// `total` is the server-reported record count across all pages and is
/// passed through untouched; the per-status counts and the amount sum cover
/// only the given page. An empty page yields all zeros.
pub fn kpi_metrics(rows: &[SaleRow], total: i64) -> KpiMetrics {
    let mut metrics = KpiMetrics {
        total_records: total,
        ..Default::default()
    };

    for row in rows {
        match row.status {
            SaleStatus::Success => metrics.success_count += 1,
            SaleStatus::Failed => metrics.failed_count += 1,
            SaleStatus::Duplicate => metrics.duplicate_count += 1,
            SaleStatus::Pending => metrics.pending_count += 1,
            SaleStatus::Other(_) => {}
        }
        metrics.total_amount += row.amount;
    }

    tracing::debug!(
        rows = rows.len(),
        total,
        total_amount = metrics.total_amount,
        "computed KPI metrics"
    );
    metrics
}

/// Groups rows by status for the distribution chart.
///
/// Statuses group by their raw string value, so out-of-enum values form
/// their own buckets. Slices come back in first-seen order; statuses absent
/// from the page produce no slice at all.
pub fn status_distribution(rows: &[SaleRow]) -> Vec<StatusSlice> {
    let mut counts: OrderedMap<&str, i64> = OrderedMap::new();
    for row in rows {
        *counts.get_or_insert_with(row.status.as_str(), || 0) += 1;
    }

    counts
        .into_iter()
        .map(|(status, count)| StatusSlice {
            color: chart_color(status).to_string(),
            status: status.to_string(),
            count,
        })
        .collect()
}

/// The 7 calendar dates ending at `clock.today()`, ascending.
pub fn last_7_days(clock: &dyn Clock) -> Vec<NaiveDate> {
    let today = clock.today();
    (0..PERFORMANCE_WINDOW_DAYS)
        .rev()
        .map(|back| today - Duration::days(back))
        .collect()
}

/// Buckets success/failure counts per day over the last 7 days.
///
/// Each row contributes to the UTC calendar date of its `created_at`, and
/// only `success` and `failed` rows count; every other status is ignored for
/// this metric. Days inside the window always appear (zero-filled), days
/// outside it are dropped even when rows exist for them.
pub fn performance_over_time(rows: &[SaleRow], clock: &dyn Clock) -> Vec<PerformancePoint> {
    let mut by_date: HashMap<NaiveDate, (i64, i64)> = HashMap::new();
    for row in rows {
        let date = row.created_at.date_naive();
        match row.status {
            SaleStatus::Success => by_date.entry(date).or_default().0 += 1,
            SaleStatus::Failed => by_date.entry(date).or_default().1 += 1,
            _ => {}
        }
    }

    last_7_days(clock)
        .into_iter()
        .map(|date| {
            let (success_count, failed_count) = by_date.get(&date).copied().unwrap_or((0, 0));
            PerformancePoint {
                date,
                success_count,
                failed_count,
            }
        })
        .collect()
}

#[derive(Default)]
struct PerformerTotals {
    transaction_count: i64,
    total_amount: f64,
}

/// Ranks the top 5 performers by total amount.
///
/// Performers accumulate in first-seen order and the descending sort is
/// stable, so exact ties keep their input order. Ranks are positional
/// (1..len): two equal totals still receive distinct adjacent ranks.
pub fn top_performers(rows: &[SaleRow]) -> Vec<TopPerformer> {
    let mut totals: OrderedMap<&str, PerformerTotals> = OrderedMap::new();
    for row in rows {
        let entry = totals.get_or_insert_with(row.sale_name.as_str(), PerformerTotals::default);
        entry.transaction_count += 1;
        entry.total_amount += row.amount;
    }

    let mut performers: Vec<(&str, PerformerTotals)> = totals.into_iter().collect();
    performers.sort_by(|a, b| {
        b.1.total_amount
            .partial_cmp(&a.1.total_amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    performers.truncate(TOP_PERFORMER_LIMIT);

    performers
        .into_iter()
        .enumerate()
        .map(|(position, (name, totals))| TopPerformer {
            rank: position as i64 + 1,
            name: name.to_string(),
            transaction_count: totals.transaction_count,
            total_amount: totals.total_amount,
        })
        .collect()
}

/// Share of `count` in `total` as a percentage, 0 when the total is 0.
pub fn percentage(count: i64, total: i64) -> f64 {
    if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}
