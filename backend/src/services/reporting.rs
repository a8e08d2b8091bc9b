//! Financial reporting service
//!
//! Dashboard aggregates and tabular exports. Every sum collapses to zero
//! over an empty set, and malformed date filters degrade to "no filter"
//! rather than erroring.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use crate::error::AppResult;
use shared::models::{SaleWithDetails, UNKNOWN_PRODUCT};

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    db: PgPool,
}

/// Aggregate totals for the dashboard
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub total_sales: Decimal,
    pub total_expenses: Decimal,
    pub total_stock: i64,
    pub total_cogs: Decimal,
    pub profit: Decimal,
}

/// One sale row of the CSV export
#[derive(Debug, Serialize)]
pub struct SaleExportRow {
    pub id: uuid::Uuid,
    pub product: String,
    pub quantity: i32,
    pub cost_price: Decimal,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub customer: Option<String>,
    pub date: String,
}

/// One product row of the CSV export
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ProductExportRow {
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// Parse an optional `YYYY-MM-DD` query value.
///
/// Malformed input is treated the same as absent input: the filter is
/// dropped, never surfaced as an error.
pub fn parse_date_param(value: Option<&str>) -> Option<NaiveDate> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Timestamp bounds for a date-range filter.
///
/// The end bound is exclusive but covers the whole end day.
pub fn date_filter_bounds(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start.unwrap_or(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    let end = end.unwrap_or(NaiveDate::from_ymd_opt(2100, 12, 31).unwrap());
    let end = end.checked_add_days(Days::new(1)).unwrap_or(end);

    (
        Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0).unwrap()),
        Utc.from_utc_datetime(&end.and_hms_opt(0, 0, 0).unwrap()),
    )
}

/// Profit identity over snapshotted costs
pub fn compute_profit(
    total_sales: Decimal,
    total_cogs: Decimal,
    total_expenses: Decimal,
) -> Decimal {
    total_sales - total_cogs - total_expenses
}

impl ReportingService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Aggregate totals for the dashboard
    pub async fn dashboard_summary(&self) -> AppResult<DashboardSummary> {
        let total_sales: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(total_price), 0) FROM sales")
                .fetch_one(&self.db)
                .await?;

        let total_expenses: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0) FROM expenses")
                .fetch_one(&self.db)
                .await?;

        let total_stock: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(quantity), 0) FROM products")
                .fetch_one(&self.db)
                .await?;

        let total_cogs: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(cost_price * quantity), 0) FROM sales")
                .fetch_one(&self.db)
                .await?;

        let profit = compute_profit(total_sales, total_cogs, total_expenses);

        Ok(DashboardSummary {
            total_sales,
            total_expenses,
            total_stock,
            total_cogs,
            profit,
        })
    }

    /// Date-filtered sale rows for the on-screen report
    pub async fn sales_report(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<Vec<SaleWithDetails>> {
        let (from, until) = date_filter_bounds(start, end);

        let sales = sqlx::query_as::<_, SaleWithDetails>(
            r#"
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
            WHERE s.created_at >= $2 AND s.created_at < $3
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(UNKNOWN_PRODUCT)
        .bind(from)
        .bind(until)
        .fetch_all(&self.db)
        .await?;

        Ok(sales)
    }

    /// Sales extract for CSV download
    pub async fn export_sales(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> AppResult<String> {
        let sales = self.sales_report(start, end).await?;

        let rows: Vec<SaleExportRow> = sales
            .into_iter()
            .map(|s| SaleExportRow {
                id: s.id,
                product: s.product_name,
                quantity: s.quantity,
                cost_price: s.cost_price,
                unit_price: s.unit_price,
                total: s.total_price,
                customer: s.customer_name,
                date: s.created_at.format("%Y-%m-%d").to_string(),
            })
            .collect();

        Self::export_to_csv(&rows)
    }

    /// Product extract for CSV download
    pub async fn export_products(&self) -> AppResult<String> {
        let rows = sqlx::query_as::<_, ProductExportRow>(
            "SELECT name, quantity, price FROM products ORDER BY name ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Self::export_to_csv(&rows)
    }

    /// Export report data as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record).map_err(|e| {
                crate::error::AppError::Internal(format!("CSV serialization error: {}", e))
            })?;
        }
        let csv_data = String::from_utf8(wtr.into_inner().map_err(|e| {
            crate::error::AppError::Internal(format!("CSV writer error: {}", e))
        })?)
        .map_err(|e| crate::error::AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
