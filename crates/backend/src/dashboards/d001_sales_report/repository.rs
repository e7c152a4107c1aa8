use chrono::NaiveDate;
use contracts::dashboards::d001_sales_report::SalesReportRow;
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};

/// Raw join result from SQL query
#[derive(Debug, Clone, FromQueryResult)]
struct SalesReportRecord {
    date: NaiveDate,
    name: String,
    quantity: i32,
    category: String,
}

impl From<SalesReportRecord> for SalesReportRow {
    fn from(r: SalesReportRecord) -> Self {
        Self {
            date: r.date,
            name: r.name,
            quantity: r.quantity,
            category: r.category,
        }
    }
}

/// Все строки продаж, развернутые через sale / product / category.
/// Порядок: дата, id продажи, id строки.
pub async fn list_sales<C: ConnectionTrait>(conn: &C) -> Result<Vec<SalesReportRow>, DbErr> {
    let sql = r#"
        SELECT
            s.date AS date,
            p.name AS name,
            se.quantity AS quantity,
            c.name AS category
        FROM sale_entry se
        JOIN sale s ON se.sale_id = s.id
        JOIN product p ON se.product_id = p.id
        JOIN category c ON p.category_id = c.id
        ORDER BY s.date, s.id, se.id
    "#;

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    let records = SalesReportRecord::find_by_statement(stmt).all(conn).await?;

    Ok(records.into_iter().map(SalesReportRow::from).collect())
}
