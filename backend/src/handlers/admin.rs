//! HTTP handlers for user administration endpoints
//!
//! Approver capability covers the approval workflow; editing roles is
//! admin only.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_role, CurrentUser};
use crate::services::user_admin::EditUserInput;
use crate::services::UserAdminService;
use crate::models::User;
use crate::AppState;
use shared::Role;

/// List accounts pending approval
pub async fn list_pending_users(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<User>>> {
    require_role(&current_user.0, Role::Approver)?;

    let service = UserAdminService::new(state.db);
    let users = service.list_pending().await?;
    Ok(Json(users))
}

/// Approve a pending registration
pub async fn approve_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<User>> {
    require_role(&current_user.0, Role::Approver)?;

    let service = UserAdminService::new(state.db);
    let user = service.approve(user_id).await?;
    Ok(Json(user))
}

/// Reject a registration, deleting the account
pub async fn reject_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    require_role(&current_user.0, Role::Approver)?;

    let service = UserAdminService::new(state.db);
    service.reject(user_id).await?;
    Ok(Json(()))
}

/// List every account
pub async fn list_users(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<User>>> {
    require_role(&current_user.0, Role::Approver)?;

    let service = UserAdminService::new(state.db);
    let users = service.list_all().await?;
    Ok(Json(users))
}

/// Overwrite a user's role and approval flag
pub async fn edit_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<Uuid>,
    Json(input): Json<EditUserInput>,
) -> AppResult<Json<User>> {
    require_role(&current_user.0, Role::Admin)?;

    let service = UserAdminService::new(state.db);
    let user = service.edit(user_id, input).await?;
    Ok(Json(user))
}
