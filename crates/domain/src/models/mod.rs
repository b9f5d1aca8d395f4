//! Domain models for the sales analytics dashboard.

pub mod analytics;
pub mod customer;
pub mod revenue;
pub mod sale_order;
pub mod sale_row;

pub use analytics::{KpiMetrics, PerformancePoint, StatusSlice, TopPerformer};
pub use customer::{Customer, CustomerLookup, CustomerPage, CustomerQuery};
pub use revenue::{GroupBy, RevenuePage, RevenuePeriod, RevenueQuery, RevenueStats};
pub use sale_order::{NoteStatus, PaymentMethod, SaleOrder, SaleOrderFilter, SaleOrderPage};
pub use sale_row::{FilterParams, SaleRow, SaleStatus, SalesPage, StatusFilter};
