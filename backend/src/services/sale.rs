//! Sales service
//!
//! Recording a sale is the one multi-step mutation in the system: the stock
//! check, the stock decrement, and the sale insert run inside a single
//! transaction with the product row locked, so concurrent sales can never
//! oversell.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{Product, Sale, SaleWithDetails, UNKNOWN_PRODUCT};
use shared::validation;

/// Sales service
#[derive(Clone)]
pub struct SaleService {
    db: PgPool,
}

/// Input for recording a sale
#[derive(Debug, Deserialize)]
pub struct RecordSaleInput {
    pub product_id: Uuid,
    pub quantity: i32,
    pub cost_price: Decimal,
    pub unit_price: Decimal,
    pub customer_name: Option<String>,
    #[serde(default = "default_payment_type")]
    pub payment_type: String,
    pub comments: Option<String>,
}

fn default_payment_type() -> String {
    "Cash".to_string()
}

/// A sale with its product detail, rendered right after recording
#[derive(Debug, Serialize)]
pub struct Receipt {
    pub sale: Sale,
    /// Absent when the product has since been deleted
    pub product: Option<Product>,
    /// Product name at render time, or a placeholder for orphaned sales
    pub product_name: String,
}

/// Compute the total price of a sale line
pub fn compute_total(quantity: i32, unit_price: Decimal) -> Decimal {
    unit_price * Decimal::from(quantity)
}

impl SaleService {
    /// Create a new SaleService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record a sale, decrementing the product's stock.
    ///
    /// The product row is locked for the duration of the transaction; the
    /// whole operation either commits (stock decremented and sale inserted)
    /// or leaves no trace.
    pub async fn record_sale(&self, acting_user: Uuid, input: RecordSaleInput) -> AppResult<Sale> {
        validation::validate_sale_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;
        validation::validate_amount(input.cost_price).map_err(|msg| AppError::Validation {
            field: "cost_price".to_string(),
            message: msg.to_string(),
        })?;
        validation::validate_amount(input.unit_price).map_err(|msg| AppError::Validation {
            field: "unit_price".to_string(),
            message: msg.to_string(),
        })?;

        let customer_name = normalize_optional(input.customer_name);
        let comments = normalize_optional(input.comments);
        let payment_type = if input.payment_type.trim().is_empty() {
            default_payment_type()
        } else {
            input.payment_type
        };

        let mut tx = self.db.begin().await?;

        // Lock the product row so the stock check and decrement are atomic
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price, cost_price, created_at
            FROM products
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(input.product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        if product.quantity < input.quantity {
            return Err(AppError::InsufficientStock {
                requested: input.quantity,
                available: product.quantity,
            });
        }

        sqlx::query("UPDATE products SET quantity = quantity - $2 WHERE id = $1")
            .bind(product.id)
            .bind(input.quantity)
            .execute(&mut *tx)
            .await?;

        let total_price = compute_total(input.quantity, input.unit_price);

        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (product_id, quantity, cost_price, unit_price, total_price,
                               customer_name, payment_type, comments, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, product_id, quantity, cost_price, unit_price, total_price,
                      customer_name, payment_type, comments, user_id, created_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.cost_price)
        .bind(input.unit_price)
        .bind(total_price)
        .bind(&customer_name)
        .bind(&payment_type)
        .bind(&comments)
        .bind(acting_user)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            sale_id = %sale.id,
            product_id = %sale.product_id,
            quantity = sale.quantity,
            "Recorded sale"
        );

        Ok(sale)
    }

    /// List sales newest-first, optionally filtered by product name substring.
    ///
    /// Sales whose product was deleted still appear, labelled with the
    /// placeholder name.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<SaleWithDetails>> {
        let base = r#"
            SELECT s.id,
                   s.product_id,
                   COALESCE(p.name, $1) AS product_name,
                   s.quantity,
                   s.cost_price,
                   s.unit_price,
                   s.total_price,
                   s.customer_name,
                   s.payment_type,
                   s.comments,
                   u.username AS recorded_by,
                   s.created_at
            FROM sales s
            LEFT JOIN products p ON p.id = s.product_id
            LEFT JOIN users u ON u.id = s.user_id
        "#;

        let sales = match search.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => {
                let query = format!(
                    "{base} WHERE p.name ILIKE '%' || $2 || '%' ORDER BY s.created_at DESC"
                );
                sqlx::query_as::<_, SaleWithDetails>(&query)
                    .bind(UNKNOWN_PRODUCT)
                    .bind(q)
                    .fetch_all(&self.db)
                    .await?
            }
            None => {
                let query = format!("{base} ORDER BY s.created_at DESC");
                sqlx::query_as::<_, SaleWithDetails>(&query)
                    .bind(UNKNOWN_PRODUCT)
                    .fetch_all(&self.db)
                    .await?
            }
        };

        Ok(sales)
    }

    /// Fetch a sale and its product for the receipt view
    pub async fn get_receipt(&self, sale_id: Uuid) -> AppResult<Receipt> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, product_id, quantity, cost_price, unit_price, total_price,
                   customer_name, payment_type, comments, user_id, created_at
            FROM sales
            WHERE id = $1
            "#,
        )
        .bind(sale_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price, cost_price, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(sale.product_id)
        .fetch_optional(&self.db)
        .await?;

        let product_name = product
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());

        Ok(Receipt {
            sale,
            product,
            product_name,
        })
    }
}

/// Trim an optional free-text field, mapping empty input to None
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_compute_total() {
        assert_eq!(compute_total(3, dec("5.0")), dec("15.0"));
        assert_eq!(compute_total(1, dec("9.99")), dec("9.99"));
        assert_eq!(compute_total(0, dec("100.0")), Decimal::ZERO);
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("".to_string())), None);
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some("  Alice ".to_string())),
            Some("Alice".to_string())
        );
    }

    #[test]
    fn test_default_payment_type() {
        assert_eq!(default_payment_type(), "Cash");
    }
}
