//! Shared utilities and common types for the sales dashboard backend-for-frontend.
//!
//! This crate provides common functionality used across all other crates:
//! - Clock abstraction for "today"-relative calculations
//! - Insertion-order-preserving accumulation map
//! - Offset pagination arithmetic
//! - Vietnamese locale formatting (currency, dates)
//! - Common validation logic

pub mod clock;
pub mod format;
pub mod ordered_map;
pub mod pagination;
pub mod validation;
