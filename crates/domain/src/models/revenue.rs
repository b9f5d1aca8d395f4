//! Revenue aggregate models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grouping period for revenue statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Day,
    Week,
    Month,
    Quarter,
}

impl Default for GroupBy {
    fn default() -> Self {
        Self::Week
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Quarter => write!(f, "quarter"),
        }
    }
}

/// Error type for [`GroupBy`] parsing.
#[derive(Debug, Error)]
#[error("Invalid groupBy value: {0}")]
pub struct ParseGroupByError(String);

impl std::str::FromStr for GroupBy {
    type Err = ParseGroupByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            other => Err(ParseGroupByError(other.to_string())),
        }
    }
}

/// Revenue totals for one period bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePeriod {
    pub period: String,
    pub revenue: f64,
    pub customer_count: i64,
    pub order_count: i64,
}

/// Revenue response: period buckets plus the grouping that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePage {
    pub data: Vec<RevenuePeriod>,
    pub group_by: GroupBy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
}

/// Aggregate statistics derived from a set of revenue buckets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStats {
    pub total_revenue: f64,
    pub total_customers: i64,
    pub total_orders: i64,
    pub avg_revenue_per_customer: f64,
}

/// Query parameters for fetching revenue statistics.
#[derive(Debug, Clone, Default)]
pub struct RevenueQuery {
    pub group_by: GroupBy,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl RevenueQuery {
    /// Builds the request query; date bounds are omitted when unset.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("groupBy", self.group_by.to_string())];

        if let Some(from) = self.from_date {
            pairs.push(("fromDate", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to_date {
            pairs.push(("toDate", to.format("%Y-%m-%d").to_string()));
        }

        pairs
    }
}
