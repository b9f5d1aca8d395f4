//! Domain services for the sales analytics dashboard.
//!
//! Services contain the pure aggregation logic that turns fetched pages
//! into the values the dashboard widgets render.

pub mod analytics;
pub mod field_mapper;
pub mod revenue;

pub use analytics::{
    chart_color, kpi_metrics, last_7_days, percentage, performance_over_time,
    status_distribution, top_performers,
};

pub use field_mapper::{
    api_key_for, api_to_model, model_key_for, model_to_api, note_status_api_value,
    note_status_color, note_status_from_api, note_status_label, Sale, SalePatch,
    NOTE_STATUS_OPTIONS,
};

pub use revenue::revenue_stats;
