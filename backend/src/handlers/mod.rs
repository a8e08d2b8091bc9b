//! HTTP handlers for StockLedger

pub mod admin;
pub mod auth;
pub mod expense;
pub mod health;
pub mod product;
pub mod reporting;
pub mod sale;

pub use admin::*;
pub use auth::*;
pub use expense::*;
pub use health::*;
pub use product::*;
pub use reporting::*;
pub use sale::*;
