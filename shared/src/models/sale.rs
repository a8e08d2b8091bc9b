//! Sale models
//!
//! A sale is immutable once recorded. Cost and unit prices are snapshotted
//! at sale time so historical profit reporting stays correct when product
//! prices change later.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder product name used when a sale's product was deleted
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// A recorded sale transaction
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sale {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub cost_price: Decimal,
    pub unit_price: Decimal,
    /// Always `quantity * unit_price` at creation time
    pub total_price: Decimal,
    pub customer_name: Option<String>,
    pub payment_type: String,
    pub comments: Option<String>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Sale joined with its product and recording user for display (JOIN result)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SaleWithDetails {
    pub id: Uuid,
    pub product_id: Uuid,
    /// Falls back to [`UNKNOWN_PRODUCT`] when the product was deleted
    pub product_name: String,
    pub quantity: i32,
    pub cost_price: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub customer_name: Option<String>,
    pub payment_type: String,
    pub comments: Option<String>,
    pub recorded_by: Option<String>,
    pub created_at: DateTime<Utc>,
}
