//! Database models for StockLedger
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
