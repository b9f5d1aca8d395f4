//! Sale row domain model: one observation from the deduplicated sales feed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Processing status of a sale row.
///
/// The backend contract names four statuses, but rows occasionally arrive
/// with values outside that set. Those round-trip through [`SaleStatus::Other`]
/// instead of failing deserialization, and downstream grouping treats them
/// as ordinary buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SaleStatus {
    Success,
    Failed,
    Duplicate,
    Pending,
    Other(String),
}

impl SaleStatus {
    /// The wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Duplicate => "duplicate",
            Self::Pending => "pending",
            Self::Other(raw) => raw,
        }
    }

    /// Vietnamese display label; unknown statuses echo their raw value.
    pub fn label_vi(&self) -> &str {
        match self {
            Self::Success => "Thành công",
            Self::Failed => "Thất bại",
            Self::Duplicate => "Trùng lặp",
            Self::Pending => "Đang chờ",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SaleStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "success" => Self::Success,
            "failed" => Self::Failed,
            "duplicate" => Self::Duplicate,
            "pending" => Self::Pending,
            _ => Self::Other(raw),
        }
    }
}

impl From<SaleStatus> for String {
    fn from(status: SaleStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One sale/order observation as fetched from the backend page.
///
/// Rows are immutable once received; the aggregation services never mutate
/// them. Fields the model does not name are preserved in `extra` so the
/// dynamic table columns can still render them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRow {
    #[serde(default)]
    pub id: String,
    pub status: SaleStatus,
    #[serde(default)]
    pub sale_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub source: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One page of sale rows plus the server-side total across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPage {
    pub data: Vec<SaleRow>,
    pub total: i64,
}

/// Status filter selection: everything, or a single status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SaleStatus),
}

impl StatusFilter {
    /// Vietnamese display label for the filter dropdown.
    pub fn label_vi(&self) -> &str {
        match self {
            Self::All => "Tất cả",
            Self::Only(status) => status.label_vi(),
        }
    }
}

/// Query parameters for fetching a page of sale rows.
#[derive(Debug, Clone, Default, Validate)]
pub struct FilterParams {
    pub status: StatusFilter,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub limit: u64,
    pub offset: u64,
}

impl FilterParams {
    /// Builds the request query. `limit` and `offset` are always sent;
    /// the status is omitted when the filter is `All`, and date bounds are
    /// omitted when unset.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];

        if let StatusFilter::Only(status) = &self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(from) = self.from_date {
            pairs.push(("fromDate", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to_date {
            pairs.push(("toDate", to.format("%Y-%m-%d").to_string()));
        }

        pairs
    }
}
