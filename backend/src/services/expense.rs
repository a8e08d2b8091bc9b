//! Expense service
//!
//! Plain CRUD over operating cost entries.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::Expense;
use shared::validation;

/// Expense service
#[derive(Clone)]
pub struct ExpenseService {
    db: PgPool,
}

/// Input for creating or editing an expense
#[derive(Debug, Deserialize)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: Decimal,
}

impl ExpenseService {
    /// Create a new ExpenseService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate(input: &ExpenseInput) -> AppResult<()> {
        validation::validate_name(&input.description).map_err(|msg| AppError::Validation {
            field: "description".to_string(),
            message: msg.to_string(),
        })?;
        validation::validate_amount(input.amount).map_err(|msg| AppError::Validation {
            field: "amount".to_string(),
            message: msg.to_string(),
        })?;
        Ok(())
    }

    /// Record an expense
    pub async fn create(&self, input: ExpenseInput) -> AppResult<Expense> {
        Self::validate(&input)?;

        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (description, amount)
            VALUES ($1, $2)
            RETURNING id, description, amount, created_at
            "#,
        )
        .bind(&input.description)
        .bind(input.amount)
        .fetch_one(&self.db)
        .await?;

        Ok(expense)
    }

    /// List all expenses, newest first
    pub async fn list(&self) -> AppResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, description, amount, created_at
            FROM expenses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(expenses)
    }

    /// Edit an expense
    pub async fn update(&self, id: Uuid, input: ExpenseInput) -> AppResult<Expense> {
        Self::validate(&input)?;

        let expense = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses
            SET description = $2, amount = $3
            WHERE id = $1
            RETURNING id, description, amount, created_at
            "#,
        )
        .bind(id)
        .bind(&input.description)
        .bind(input.amount)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Expense".to_string()))?;

        Ok(expense)
    }

    /// Delete an expense
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Expense".to_string()));
        }

        Ok(())
    }
}
