//! Field mapping between the Vietnamese API schema and the model schema.
//!
//! The upstream sheet API labels columns in Vietnamese ("Tên khách hàng",
//! "Số lượng", ...). The forward direction fills defaults for anything the
//! payload omits, so it never fails; the reverse direction emits only the
//! fields present in a patch, producing partial-update payloads.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::sale_order::NoteStatus;

const K_ID: &str = "id";
const K_CUSTOMER_NAME: &str = "Tên khách hàng";
const K_PHONE: &str = "Số điện thoại khách hàng";
const K_PRODUCT: &str = "Sản phẩm";
const K_QUANTITY: &str = "Số lượng";
const K_UNIT_PRICE: &str = "Đơn giá";
const K_CREATED_AT: &str = "Ngày tạo";
const K_SALE_STATUS: &str = "Trạng thái chăm sóc";

/// Status assigned to records the API sends without a care status.
const DEFAULT_SALE_STATUS: &str = "Khách mới";

/// Badge color for statuses missing from the option table.
const DEFAULT_STATUS_COLOR: &str = "#9E9E9E";

lazy_static! {
    /// Vietnamese API key → model key.
    pub static ref API_TO_MODEL: HashMap<&'static str, &'static str> = HashMap::from([
        (K_ID, "id"),
        (K_CUSTOMER_NAME, "customerName"),
        (K_PHONE, "phone"),
        (K_PRODUCT, "product"),
        (K_QUANTITY, "quantity"),
        (K_UNIT_PRICE, "unitPrice"),
        (K_CREATED_AT, "createdAt"),
        (K_SALE_STATUS, "saleStatus"),
    ]);

    /// Model key → Vietnamese API key.
    pub static ref MODEL_TO_API: HashMap<&'static str, &'static str> =
        API_TO_MODEL.iter().map(|(api, model)| (*model, *api)).collect();
}

/// Looks up the model key for a Vietnamese API key.
pub fn model_key_for(api_key: &str) -> Option<&'static str> {
    API_TO_MODEL.get(api_key).copied()
}

/// Looks up the Vietnamese API key for a model key.
pub fn api_key_for(model_key: &str) -> Option<&'static str> {
    MODEL_TO_API.get(model_key).copied()
}

/// A sale record in model-key space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: Option<i64>,
    pub customer_name: String,
    pub phone: String,
    pub product: String,
    pub quantity: i64,
    pub unit_price: f64,
    /// `quantity * unit_price`, derived locally; the API has no such column.
    pub total_price: f64,
    pub created_at: String,
    pub sale_status: String,
}

/// Partial sale update; only the populated fields reach the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePatch {
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub created_at: Option<String>,
    pub sale_status: Option<String>,
}

impl From<Sale> for SalePatch {
    fn from(sale: Sale) -> Self {
        Self {
            customer_name: Some(sale.customer_name),
            phone: Some(sale.phone),
            product: Some(sale.product),
            quantity: Some(sale.quantity),
            unit_price: Some(sale.unit_price),
            created_at: Some(sale.created_at),
            sale_status: Some(sale.sale_status),
        }
    }
}

/// Maps a raw API object (Vietnamese keys) to a [`Sale`].
///
/// Missing or mistyped fields fall back to empty strings and zeros; the care
/// status defaults to "Khách mới". Never fails.
pub fn api_to_model(api: &Map<String, Value>) -> Sale {
    let quantity = api.get(K_QUANTITY).and_then(Value::as_i64).unwrap_or(0);
    let unit_price = api.get(K_UNIT_PRICE).and_then(Value::as_f64).unwrap_or(0.0);

    Sale {
        id: api.get(K_ID).and_then(Value::as_i64),
        customer_name: str_field(api, K_CUSTOMER_NAME),
        phone: str_field(api, K_PHONE),
        product: str_field(api, K_PRODUCT),
        quantity,
        unit_price,
        total_price: quantity as f64 * unit_price,
        created_at: str_field(api, K_CREATED_AT),
        sale_status: api
            .get(K_SALE_STATUS)
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_SALE_STATUS)
            .to_string(),
    }
}

/// Maps a [`SalePatch`] to an API object (Vietnamese keys).
///
/// Only populated fields are emitted, so the result is safe to send as a
/// partial update. The record id travels in the URL, never in the body.
pub fn model_to_api(patch: &SalePatch) -> Map<String, Value> {
    let mut api = Map::new();

    if let Some(customer_name) = &patch.customer_name {
        api.insert(K_CUSTOMER_NAME.to_string(), Value::from(customer_name.clone()));
    }
    if let Some(phone) = &patch.phone {
        api.insert(K_PHONE.to_string(), Value::from(phone.clone()));
    }
    if let Some(product) = &patch.product {
        api.insert(K_PRODUCT.to_string(), Value::from(product.clone()));
    }
    if let Some(quantity) = patch.quantity {
        api.insert(K_QUANTITY.to_string(), Value::from(quantity));
    }
    if let Some(unit_price) = patch.unit_price {
        api.insert(K_UNIT_PRICE.to_string(), Value::from(unit_price));
    }
    if let Some(created_at) = &patch.created_at {
        api.insert(K_CREATED_AT.to_string(), Value::from(created_at.clone()));
    }
    if let Some(sale_status) = &patch.sale_status {
        api.insert(K_SALE_STATUS.to_string(), Value::from(sale_status.clone()));
    }

    api
}

fn str_field(api: &Map<String, Value>, key: &str) -> String {
    api.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// One entry of the care-status option table.
#[derive(Debug, Clone, Copy)]
pub struct NoteStatusOption {
    pub value: NoteStatus,
    pub label: &'static str,
    pub api_value: &'static str,
    pub color: &'static str,
}

/// Care-status options with their Vietnamese labels and badge colors.
pub const NOTE_STATUS_OPTIONS: [NoteStatusOption; 4] = [
    NoteStatusOption {
        value: NoteStatus::New,
        label: "Khách mới",
        api_value: "Khách mới",
        color: "#9E9E9E",
    },
    NoteStatusOption {
        value: NoteStatus::Closed,
        label: "Đã chốt",
        api_value: "Đã chốt",
        color: "#4CAF50",
    },
    NoteStatusOption {
        value: NoteStatus::Reference,
        label: "Tham khảo",
        api_value: "Tham khảo",
        color: "#2196F3",
    },
    NoteStatusOption {
        value: NoteStatus::Nurturing,
        label: "Chăm sóc",
        api_value: "Chăm sóc",
        color: "#FF9800",
    },
];

fn find_option(value: &str) -> Option<&'static NoteStatusOption> {
    NOTE_STATUS_OPTIONS
        .iter()
        .find(|o| o.value.as_str() == value || o.api_value == value)
}

/// Vietnamese label for a status value or API value; unknown values echo
/// the input.
pub fn note_status_label(value: &str) -> &str {
    find_option(value).map(|o| o.label).unwrap_or(value)
}

/// Internal status for an API value; unknown values fall back to `New`.
pub fn note_status_from_api(api_value: &str) -> NoteStatus {
    NOTE_STATUS_OPTIONS
        .iter()
        .find(|o| o.api_value == api_value)
        .map(|o| o.value)
        .unwrap_or_default()
}

/// API value for an internal status.
pub fn note_status_api_value(status: NoteStatus) -> &'static str {
    NOTE_STATUS_OPTIONS
        .iter()
        .find(|o| o.value == status)
        .map(|o| o.api_value)
        .unwrap_or(DEFAULT_SALE_STATUS)
}

/// Badge color for a status value or API value; unknown values fall back
/// to gray.
pub fn note_status_color(value: &str) -> &'static str {
    find_option(value)
        .map(|o| o.color)
        .unwrap_or(DEFAULT_STATUS_COLOR)
}
