use contracts::usecases::u001_import_spreadsheet::ImportSummary;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::path::Path;
use tracing::Instrument;
use uuid::Uuid;

use super::context::ImportContext;
use super::error::ImportError;
use super::format_validator::check_format;
use super::importers::{import_categories, import_products, import_sales};
use super::upload::UploadedSpreadsheet;
use super::workbook::Workbook;

/// Импортирует книгу целиком: либо все строки всех листов, либо ничего.
///
/// Состояния: Received -> Validating -> Rejected | Importing -> Committed | Failed.
pub async fn import_workbook(
    db: &DatabaseConnection,
    workbook: &Workbook,
) -> Result<ImportSummary, ImportError> {
    let import_id = Uuid::new_v4();
    let span = tracing::info_span!("import", %import_id);
    import_in_transaction(db, workbook).instrument(span).await
}

async fn import_in_transaction(
    db: &DatabaseConnection,
    workbook: &Workbook,
) -> Result<ImportSummary, ImportError> {
    let started_at = std::time::Instant::now();
    tracing::info!("Received workbook with sheets: {:?}", workbook.sheet_names());

    let txn = db.begin().await?;
    match run_import(&txn, workbook).await {
        Ok(summary) => {
            txn.commit().await?;
            tracing::info!(
                "Committed: categories={}, products={}, sales={}, sale_entries={}, elapsed_ms={}",
                summary.categories,
                summary.products,
                summary.sales,
                summary.sale_entries,
                started_at.elapsed().as_millis()
            );
            Ok(summary)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Rollback failed: {}", rollback_err);
            }
            if e.is_rejection() {
                tracing::warn!("Rejected: {}", e);
            } else {
                tracing::error!("Failed: {}", e);
            }
            Err(e)
        }
    }
}

async fn run_import(
    txn: &DatabaseTransaction,
    workbook: &Workbook,
) -> Result<ImportSummary, ImportError> {
    tracing::info!("Validating");
    let sheets = check_format(workbook)?;

    tracing::info!("Importing");
    let mut ctx = ImportContext::new(txn);
    import_categories(&mut ctx, sheets.categories).await?;
    import_products(&mut ctx, sheets.products).await?;
    import_sales(&mut ctx, sheets.sales).await?;
    ctx.flush().await
}

pub async fn import_file(
    db: &DatabaseConnection,
    path: &Path,
) -> Result<ImportSummary, ImportError> {
    let path = path.to_path_buf();
    let workbook = read_blocking(move || Workbook::open(&path)).await?;
    import_workbook(db, &workbook).await
}

/// Сохраняет загруженный файл во временный каталог и импортирует его.
/// Временный файл удаляется сразу после чтения книги, при любом исходе.
pub async fn import_upload(
    db: &DatabaseConnection,
    upload_dir: &Path,
    file_name: Option<&str>,
    bytes: &[u8],
) -> Result<ImportSummary, ImportError> {
    let upload_dir = upload_dir.to_path_buf();
    let file_name = file_name.map(str::to_string);
    let bytes = bytes.to_vec();

    let workbook = read_blocking(move || {
        let upload = UploadedSpreadsheet::store(&upload_dir, file_name.as_deref(), &bytes)?;
        Workbook::open(upload.path())
    })
    .await?;
    import_workbook(db, &workbook).await
}

/// Запись файла и разбор calamine выполняются вне потоков tokio
async fn read_blocking<F>(read: F) -> Result<Workbook, ImportError>
where
    F: FnOnce() -> Result<Workbook, ImportError> + Send + 'static,
{
    tokio::task::spawn_blocking(read)
        .await
        .map_err(|e| ImportError::Workbook(format!("reader task failed: {}", e)))?
}
