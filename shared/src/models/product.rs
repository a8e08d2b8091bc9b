//! Product model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stocked item
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Units on hand; never negative
    pub quantity: i32,
    /// Unit sale price
    pub price: Decimal,
    /// Unit cost price, fixed at creation
    pub cost_price: Decimal,
    pub created_at: DateTime<Utc>,
}
