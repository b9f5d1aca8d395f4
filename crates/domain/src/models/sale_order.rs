//! Sale order domain model (the editable orders table).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Care-pipeline status a salesperson assigns to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    #[default]
    New,
    Closed,
    Reference,
    Nurturing,
}

impl NoteStatus {
    /// The wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Closed => "closed",
            Self::Reference => "reference",
            Self::Nurturing => "nurturing",
        }
    }
}

impl std::fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Cod,
}

/// One order row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOrder {
    pub id: String,
    pub order_code: String,
    pub customer_name: String,
    pub phone: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// `unit_price * quantity`, precomputed by the backend.
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    /// Raw status string from the source sheet.
    pub sale_status: String,
    /// Sale decision status.
    pub note_status: NoteStatus,
}

/// One page of orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOrderPage {
    pub data: Vec<SaleOrder>,
    pub total: i64,
    pub page: u64,
    pub limit: u64,
}

/// Query parameters for fetching orders.
#[derive(Debug, Clone, Default, Validate)]
pub struct SaleOrderFilter {
    pub page: u64,
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub limit: u64,
    pub search: Option<String>,
    pub status: Option<String>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl SaleOrderFilter {
    /// Builds the request query; optional filters are omitted when unset.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];

        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
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
