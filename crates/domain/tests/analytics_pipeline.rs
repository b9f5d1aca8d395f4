//! Integration tests for the page aggregation pipeline.
//!
//! Runs one fetched page through every aggregation the dashboard consumes
//! (KPI cards, status doughnut, 7-day performance chart, leaderboard) and
//! checks the cross-cutting invariants that hold between them. The clock is
//! pinned so the 7-day window is deterministic.

use chrono::{NaiveDate, TimeZone, Utc};
use domain::models::{SaleRow, SaleStatus, SalesPage};
use domain::services::{
    kpi_metrics, performance_over_time, status_distribution, top_performers,
};
use fake::faker::name::en::Name;
use fake::Fake;
use shared::clock::FixedClock;

// ============================================================================
// Helpers
// ============================================================================

fn pinned_clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
}

fn row(status: &str, amount: f64, sale_name: &str, day: u32) -> SaleRow {
    SaleRow {
        id: format!("r-{day}-{sale_name}"),
        status: SaleStatus::from(status.to_string()),
        sale_name: sale_name.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        amount,
        customer_name: String::new(),
        phone: String::new(),
        source: String::new(),
        extra: serde_json::Map::new(),
    }
}

/// A page with a realistic mix: all four canonical statuses, one stray
/// status, three performers, rows inside and outside the 7-day window.
fn sample_page() -> SalesPage {
    SalesPage {
        data: vec![
            row("success", 500_000.0, "Lan", 10),
            row("failed", 120_000.0, "Minh", 9),
            row("success", 80_000.0, "Minh", 9),
            row("pending", 40_000.0, "Lan", 8),
            row("duplicate", 0.0, "Quang", 7),
            row("archived", 15_000.0, "Quang", 6),
            // Outside the window ending 2024-03-10.
            row("success", 1_000_000.0, "Lan", 1),
        ],
        total: 420,
    }
}

// ============================================================================
// Cross-aggregation invariants
// ============================================================================

#[test]
fn test_kpi_and_distribution_agree_on_page_counts() {
    let page = sample_page();

    let metrics = kpi_metrics(&page.data, page.total);
    let slices = status_distribution(&page.data);

    // The distribution covers every row, including the stray status the KPI
    // buckets ignore.
    let slice_sum: i64 = slices.iter().map(|s| s.count).sum();
    assert_eq!(slice_sum, page.data.len() as i64);

    let kpi_sum = metrics.success_count
        + metrics.failed_count
        + metrics.duplicate_count
        + metrics.pending_count;
    let stray: i64 = slices
        .iter()
        .filter(|s| {
            !["success", "failed", "duplicate", "pending"].contains(&s.status.as_str())
        })
        .map(|s| s.count)
        .sum();
    assert_eq!(kpi_sum + stray, page.data.len() as i64);

    // The server total is reported as-is, independent of the page.
    assert_eq!(metrics.total_records, 420);
}

#[test]
fn test_amount_sum_covers_every_row() {
    let page = sample_page();
    let metrics = kpi_metrics(&page.data, page.total);
    let expected: f64 = page.data.iter().map(|r| r.amount).sum();
    assert_eq!(metrics.total_amount, expected);
}

#[test]
fn test_performance_window_is_exactly_seven_ascending_days() {
    let page = sample_page();
    let points = performance_over_time(&page.data, &pinned_clock());

    assert_eq!(points.len(), 7);
    assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    assert_eq!(points[6].date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    assert!(points.windows(2).all(|w| w[0].date < w[1].date));

    // The March 1 success lies outside the window and is dropped.
    let success_total: i64 = points.iter().map(|p| p.success_count).sum();
    assert_eq!(success_total, 2);
    let failed_total: i64 = points.iter().map(|p| p.failed_count).sum();
    assert_eq!(failed_total, 1);
}

#[test]
fn test_leaderboard_ranks_follow_amount_order() {
    let page = sample_page();
    let performers = top_performers(&page.data);

    // Lan: 1.54M over 3 rows, Minh: 200k over 2, Quang: 15k over 2.
    let names: Vec<&str> = performers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Lan", "Minh", "Quang"]);
    assert_eq!(performers[0].transaction_count, 3);
    assert_eq!(performers[0].total_amount, 1_540_000.0);

    let ranks: Vec<i64> = performers.iter().map(|p| p.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

// ============================================================================
// Generated pages
// ============================================================================

#[test]
fn test_invariants_hold_for_generated_pages() {
    let statuses = ["success", "failed", "duplicate", "pending"];

    let rows: Vec<SaleRow> = (0..200)
        .map(|_| {
            let status = statuses[(0..statuses.len()).fake::<usize>()];
            let name: String = Name().fake();
            let day: u32 = (4..=10).fake();
            row(status, (10_000.0..900_000.0).fake::<f64>(), &name, day)
        })
        .map(|mut r| {
            // Thin the performer space so grouping actually accumulates.
            if (0..3).fake::<u8>() == 0 {
                r.sale_name = "Chung".to_string();
            }
            r
        })
        .collect();

    let metrics = kpi_metrics(&rows, rows.len() as i64);
    let bucket_sum = metrics.success_count
        + metrics.failed_count
        + metrics.duplicate_count
        + metrics.pending_count;
    assert_eq!(bucket_sum, rows.len() as i64);

    let expected_amount: f64 = rows.iter().map(|r| r.amount).sum();
    assert!((metrics.total_amount - expected_amount).abs() < 1e-6);

    let slices = status_distribution(&rows);
    assert_eq!(
        slices.iter().map(|s| s.count).sum::<i64>(),
        rows.len() as i64
    );
    assert!(slices.iter().all(|s| s.count > 0));

    let points = performance_over_time(&rows, &pinned_clock());
    assert_eq!(points.len(), 7);
    assert!(points.windows(2).all(|w| w[0].date < w[1].date));

    let performers = top_performers(&rows);
    assert!(performers.len() <= 5);
    assert!(performers
        .windows(2)
        .all(|w| w[0].total_amount >= w[1].total_amount));
    let ranks: Vec<i64> = performers.iter().map(|p| p.rank).collect();
    let expected_ranks: Vec<i64> = (1..=performers.len() as i64).collect();
    assert_eq!(ranks, expected_ranks);
}
