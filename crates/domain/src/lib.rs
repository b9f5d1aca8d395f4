//! Domain layer for the sales analytics dashboard.
//!
//! This crate contains:
//! - Domain models (sale rows, orders, customers, revenue buckets)
//! - The pure aggregation services behind the dashboard widgets
//! - Field mapping between the Vietnamese API schema and the model schema

pub mod models;
pub mod services;
