//! Aggregate statistics over revenue period buckets.

use crate::models::revenue::{RevenuePeriod, RevenueStats};

/// Sums revenue, customer, and order counts over the fetched buckets and
/// derives the average revenue per customer (0 when there are no customers).
pub fn revenue_stats(periods: &[RevenuePeriod]) -> RevenueStats {
    let total_revenue: f64 = periods.iter().map(|p| p.revenue).sum();
    let total_customers: i64 = periods.iter().map(|p| p.customer_count).sum();
    let total_orders: i64 = periods.iter().map(|p| p.order_count).sum();

    let avg_revenue_per_customer = if total_customers > 0 {
        total_revenue / total_customers as f64
    } else {
        0.0
    };

    tracing::debug!(
        periods = periods.len(),
        total_revenue,
        total_customers,
        "computed revenue stats"
    );

    RevenueStats {
        total_revenue,
        total_customers,
        total_orders,
        avg_revenue_per_customer,
    }
}
