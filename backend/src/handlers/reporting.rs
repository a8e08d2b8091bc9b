//! HTTP handlers for reporting and export endpoints

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::reporting::{parse_date_param, DashboardSummary};
use crate::services::ReportingService;
use crate::models::SaleWithDetails;
use crate::AppState;

/// Optional date-range query parameters.
///
/// Values that fail to parse as `YYYY-MM-DD` silently drop the filter.
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Aggregate totals for the dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<Json<DashboardSummary>> {
    let service = ReportingService::new(state.db);
    let summary = service.dashboard_summary().await?;
    Ok(Json(summary))
}

/// Date-filtered sales report
pub async fn sales_report(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(params): Query<DateRangeQuery>,
) -> AppResult<Json<Vec<SaleWithDetails>>> {
    let start = parse_date_param(params.start_date.as_deref());
    let end = parse_date_param(params.end_date.as_deref());

    let service = ReportingService::new(state.db);
    let sales = service.sales_report(start, end).await?;
    Ok(Json(sales))
}

/// Download the sales extract as CSV
pub async fn export_sales(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(params): Query<DateRangeQuery>,
) -> AppResult<impl IntoResponse> {
    let start = parse_date_param(params.start_date.as_deref());
    let end = parse_date_param(params.end_date.as_deref());

    let service = ReportingService::new(state.db);
    let csv = service.export_sales(start, end).await?;

    Ok(csv_download("sales.csv", csv))
}

/// Download the product extract as CSV
pub async fn export_products(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> AppResult<impl IntoResponse> {
    let service = ReportingService::new(state.db);
    let csv = service.export_products().await?;

    Ok(csv_download("products.csv", csv))
}

/// Wrap CSV text in attachment-download headers
fn csv_download(filename: &str, csv: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    )
}
