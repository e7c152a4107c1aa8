use axum::{http::StatusCode, Json};
use contracts::dashboards::d001_sales_report::SalesReportRow;

use crate::dashboards::d001_sales_report::repository;
use crate::shared::data::db::get_connection;

/// GET /api/sales
pub async fn list_sales() -> Result<Json<Vec<SalesReportRow>>, StatusCode> {
    match repository::list_sales(get_connection()).await {
        Ok(rows) => {
            tracing::info!("D001 Sales report: returning {} rows", rows.len());
            Ok(Json(rows))
        }
        Err(e) => {
            tracing::error!("D001 Sales report: failed to load sales: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
