//! HTTP handlers for expense endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::expense::ExpenseInput;
use crate::services::ExpenseService;
use crate::models::Expense;
use crate::AppState;

/// Record an expense
pub async fn record_expense(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Json(input): Json<ExpenseInput>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let service = ExpenseService::new(state.db);
    let expense = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// List all expenses
pub async fn list_expenses(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<Json<Vec<Expense>>> {
    let service = ExpenseService::new(state.db);
    let expenses = service.list().await?;
    Ok(Json(expenses))
}

/// Edit an expense
pub async fn edit_expense(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(expense_id): Path<Uuid>,
    Json(input): Json<ExpenseInput>,
) -> AppResult<Json<Expense>> {
    let service = ExpenseService::new(state.db);
    let expense = service.update(expense_id, input).await?;
    Ok(Json(expense))
}

/// Delete an expense
pub async fn delete_expense(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(expense_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ExpenseService::new(state.db);
    service.delete(expense_id).await?;
    Ok(Json(()))
}
