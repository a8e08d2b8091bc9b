//! Shared types and models for StockLedger
//!
//! This crate contains the plain data records and common types used across
//! the backend. It holds no I/O beyond the sqlx derives on the records.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
