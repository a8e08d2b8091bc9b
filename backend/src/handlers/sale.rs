//! HTTP handlers for sales endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::sale::{Receipt, RecordSaleInput};
use crate::services::SaleService;
use crate::models::{Sale, SaleWithDetails};
use crate::AppState;

/// Query parameters for sale search
#[derive(Debug, Deserialize)]
pub struct SaleQuery {
    pub q: Option<String>,
}

/// Record a sale against a product, decrementing its stock
pub async fn record_sale(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordSaleInput>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let service = SaleService::new(state.db);
    let sale = service.record_sale(current_user.0.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// List sales newest-first, optionally filtered by product name substring
pub async fn list_sales(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(params): Query<SaleQuery>,
) -> AppResult<Json<Vec<SaleWithDetails>>> {
    let service = SaleService::new(state.db);
    let sales = service.list(params.q.as_deref()).await?;
    Ok(Json(sales))
}

/// View the receipt for a sale
pub async fn view_receipt(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(sale_id): Path<Uuid>,
) -> AppResult<Json<Receipt>> {
    let service = SaleService::new(state.db);
    let receipt = service.get_receipt(sale_id).await?;
    Ok(Json(receipt))
}
