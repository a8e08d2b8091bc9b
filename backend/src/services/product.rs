//! Inventory service for the product catalog
//!
//! Stock decrements happen in the sale service; everything here is plain
//! catalog maintenance.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::Product;
use shared::validation;

/// Product catalog service
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub quantity: i32,
    pub cost_price: Decimal,
    pub price: Decimal,
}

/// Input for editing a product.
///
/// `cost_price` is intentionally absent: it is fixed at creation time.
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// Input for restocking a product
#[derive(Debug, Deserialize)]
pub struct RestockInput {
    pub additional_quantity: i32,
    pub new_price: Decimal,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Add a product to the catalog
    pub async fn create(&self, input: CreateProductInput) -> AppResult<Product> {
        validation::validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validation::validate_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;
        validation::validate_amount(input.cost_price).map_err(|msg| AppError::Validation {
            field: "cost_price".to_string(),
            message: msg.to_string(),
        })?;
        validation::validate_amount(input.price).map_err(|msg| AppError::Validation {
            field: "price".to_string(),
            message: msg.to_string(),
        })?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, quantity, price, cost_price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, quantity, price, cost_price, created_at
            "#,
        )
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.price)
        .bind(input.cost_price)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }

    /// List products, optionally filtered by a case-insensitive name substring
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Product>> {
        let products = match search.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, quantity, price, cost_price, created_at
                    FROM products
                    WHERE name ILIKE '%' || $1 || '%'
                    ORDER BY name ASC
                    "#,
                )
                .bind(q)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT id, name, quantity, price, cost_price, created_at
                    FROM products
                    ORDER BY name ASC
                    "#,
                )
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(products)
    }

    /// Get a single product
    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price, cost_price, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product)
    }

    /// Overwrite name, quantity and sale price; cost price stays untouched
    pub async fn update(&self, id: Uuid, input: UpdateProductInput) -> AppResult<Product> {
        validation::validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validation::validate_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;
        validation::validate_amount(input.price).map_err(|msg| AppError::Validation {
            field: "price".to_string(),
            message: msg.to_string(),
        })?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $2, quantity = $3, price = $4
            WHERE id = $1
            RETURNING id, name, quantity, price, cost_price, created_at
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.price)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product)
    }

    /// Remove a product.
    ///
    /// Historical sales keep their reference; reporting substitutes a
    /// placeholder name for them.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }

    /// Increase stock and overwrite the sale price; cost price stays untouched
    pub async fn restock(&self, id: Uuid, input: RestockInput) -> AppResult<Product> {
        validation::validate_quantity(input.additional_quantity).map_err(|msg| {
            AppError::Validation {
                field: "additional_quantity".to_string(),
                message: msg.to_string(),
            }
        })?;
        validation::validate_amount(input.new_price).map_err(|msg| AppError::Validation {
            field: "new_price".to_string(),
            message: msg.to_string(),
        })?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET quantity = quantity + $2, price = $3
            WHERE id = $1
            RETURNING id, name, quantity, price, cost_price, created_at
            "#,
        )
        .bind(id)
        .bind(input.additional_quantity)
        .bind(input.new_price)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(product)
    }
}
