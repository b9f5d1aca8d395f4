//! Customer domain model (the dedup list and phone lookup).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::sale_order::NoteStatus;

/// One deduplicated customer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub product: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub sale_note_status: NoteStatus,
}

/// One page of customers with its paging echo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPage {
    pub data: Vec<Customer>,
    pub total: i64,
    pub limit: u64,
    pub offset: u64,
}

/// Result of a phone-number lookup; `None` when no customer matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerLookup {
    pub data: Option<Customer>,
}

/// Query parameters for fetching the customer list.
#[derive(Debug, Clone)]
pub struct CustomerQuery {
    pub limit: u64,
    pub offset: u64,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl Default for CustomerQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            offset: 0,
            from_date: None,
            to_date: None,
        }
    }
}

impl CustomerQuery {
    /// Builds the request query; date bounds are omitted when unset.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];

        if let Some(from) = self.from_date {
            pairs.push(("fromDate", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to_date {
            pairs.push(("toDate", to.format("%Y-%m-%d").to_string()));
        }

        pairs
    }
}
