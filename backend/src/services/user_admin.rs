//! User administration service
//!
//! Approval workflow for new registrations plus direct role editing.
//! Role gating happens in the handlers; this service only mutates state.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::User;
use shared::Role;

/// User administration service
#[derive(Clone)]
pub struct UserAdminService {
    db: PgPool,
}

/// Input for overwriting a user's role and approval flag (admin only)
#[derive(Debug, Deserialize)]
pub struct EditUserInput {
    pub role: Role,
    pub is_approved: bool,
}

const USER_COLUMNS: &str = "id, username, full_name, email, phone_number, password_hash, \
                            role, is_approved, created_at, last_login_at";

impl UserAdminService {
    /// Create a new UserAdminService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List accounts still waiting for approval
    pub async fn list_pending(&self) -> AppResult<Vec<User>> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE is_approved = false ORDER BY created_at ASC"
        );
        let users = sqlx::query_as::<_, User>(&query).fetch_all(&self.db).await?;

        Ok(users)
    }

    /// List every account
    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY username ASC");
        let users = sqlx::query_as::<_, User>(&query).fetch_all(&self.db).await?;

        Ok(users)
    }

    /// Approve a pending registration
    pub async fn approve(&self, id: Uuid) -> AppResult<User> {
        let query = format!(
            "UPDATE users SET is_approved = true WHERE id = $1 RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        tracing::info!(user_id = %user.id, username = %user.username, "Approved user");

        Ok(user)
    }

    /// Reject a registration by deleting the account
    pub async fn reject(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User".to_string()));
        }

        tracing::info!(user_id = %id, "Rejected user");

        Ok(())
    }

    /// Overwrite a user's role and approval flag
    pub async fn edit(&self, id: Uuid, input: EditUserInput) -> AppResult<User> {
        let query = format!(
            "UPDATE users SET role = $2, is_approved = $3 WHERE id = $1 RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.role)
            .bind(input.is_approved)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        tracing::info!(
            user_id = %user.id,
            role = user.role.as_str(),
            is_approved = user.is_approved,
            "Edited user"
        );

        Ok(user)
    }
}
