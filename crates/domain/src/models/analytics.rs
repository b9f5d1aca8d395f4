//! Aggregated view models produced by the analytics services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// KPI snapshot over one fetched page.
///
/// `total_records` is the server-reported total across all pages, so the
/// per-status counts (which only cover the current page) need not sum to it.
/// That discrepancy is part of the contract, not a bug.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetrics {
    pub total_records: i64,
    pub success_count: i64,
    pub failed_count: i64,
    pub duplicate_count: i64,
    pub pending_count: i64,
    pub total_amount: f64,
}

/// One slice of the status doughnut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: String,
    pub count: i64,
    pub color: String,
}

/// Success/failure counts for one calendar day of the 7-day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub success_count: i64,
    pub failed_count: i64,
}

/// One row of the top-performer leaderboard.
///
/// Rank is positional in the amount-sorted order; equal totals still get
/// distinct adjacent ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub rank: i64,
    pub name: String,
    pub transaction_count: i64,
    pub total_amount: f64,
}
