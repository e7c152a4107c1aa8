use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::shared::config::{get_config, get_upload_dir};
use crate::shared::data::db::get_connection;
use crate::usecases::u001_import_spreadsheet::import_upload;

const FILE_FIELD: &str = "file";

/// Файл из формы загрузки
struct UploadedFile {
    file_name: Option<String>,
    bytes: Vec<u8>,
}

/// GET /spreadsheet/new
pub async fn new_form() -> Html<&'static str> {
    Html(include_str!("../../templates/spreadsheet_form.html"))
}

/// POST /spreadsheet/new
pub async fn upload(mut multipart: Multipart) -> Response {
    let file = match read_file_field(&mut multipart).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            tracing::warn!("U001 Import: request without '{}' field", FILE_FIELD);
            return (
                StatusCode::BAD_REQUEST,
                format!("Missing file field '{}'.", FILE_FIELD),
            )
                .into_response();
        }
        Err(e) => {
            // 413 для превышения лимита тела, 400 для прочих ошибок разбора
            tracing::warn!("U001 Import: invalid multipart request: {}", e);
            return (
                e.status(),
                format!("Invalid multipart request: {}", e.body_text()),
            )
                .into_response();
        }
    };

    tracing::info!(
        "U001 Import: received {:?} ({} bytes)",
        file.file_name.as_deref().unwrap_or("<unnamed>"),
        file.bytes.len()
    );

    let upload_dir = get_upload_dir(get_config());
    match import_upload(
        get_connection(),
        &upload_dir,
        file.file_name.as_deref(),
        &file.bytes,
    )
    .await
    {
        Ok(summary) => {
            tracing::info!(
                "U001 Import: imported {} categories, {} products, {} sales",
                summary.categories,
                summary.products,
                summary.sales
            );
            Redirect::to("/").into_response()
        }
        Err(e) if e.is_rejection() => (
            e.status_code(),
            format!("Spreadsheet does not meet the expected format.\n{}", e),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("U001 Import: failed: {}", e);
            (e.status_code(), format!("Import failed: {}", e)).into_response()
        }
    }
}

/// Первое непустое поле `file`; остальные поля формы игнорируются
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            continue;
        }
        return Ok(Some(UploadedFile {
            file_name,
            bytes: bytes.to_vec(),
        }));
    }
    Ok(None)
}
