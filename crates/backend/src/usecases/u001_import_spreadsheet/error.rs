use axum::http::StatusCode;
use chrono::NaiveDate;
use sea_orm::DbErr;
use thiserror::Error;

/// Книга не соответствует ожидаемому формату. Пользователь получает 406 с текстом ошибки.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(
        "Cannot find all required worksheets.\nExpected: {}.\nActual: {}.",
        .expected.join(", "),
        .actual.join(", ")
    )]
    MissingSheets {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error(
        "Cannot find all required columns on sheet '{sheet}'.\nExpected: {}.\nActual: {}.",
        .expected.join(", "),
        .actual.join(", ")
    )]
    MissingColumns {
        sheet: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Invalid value '{value}' on sheet '{sheet}', row {row}, column '{column}': {reason}.")]
    InvalidCell {
        sheet: String,
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error(
        "Sale {sale_id} has date {found} on sheet 'sales', row {row}, but an earlier row of the same sale has {expected}."
    )]
    ConflictingSaleDate {
        sale_id: i32,
        row: usize,
        expected: NaiveDate,
        found: NaiveDate,
    },

    #[error("Duplicate {entity} id {id} on sheet '{sheet}', row {row}.")]
    DuplicateId {
        sheet: String,
        row: usize,
        entity: &'static str,
        id: i32,
    },

    #[error("Unsupported file type '{0}'. Expected one of: xlsx, xlsm, xlsb, xls, ods.")]
    UnsupportedFile(String),
}

/// Ошибка импорта. Любой вариант приводит к откату транзакции.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Referential integrity violation on sheet '{sheet}', row {row}: {entity} {id} does not exist.")]
    ReferentialIntegrity {
        sheet: String,
        row: usize,
        entity: &'static str,
        id: i32,
    },

    #[error("Cannot read spreadsheet: {0}")]
    Workbook(String),

    #[error("Upload file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ImportError {
    /// Ошибка формата книги - отказ, а не сбой сервера
    pub fn is_rejection(&self) -> bool {
        matches!(self, ImportError::Format(_))
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_rejection() {
            StatusCode::NOT_ACCEPTABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sheets_message_lists_expected_and_actual() {
        let err = FormatError::MissingSheets {
            expected: vec!["categories".into(), "products".into(), "sales".into()],
            actual: vec!["categories".into(), "Sheet1".into()],
        };
        assert_eq!(
            err.to_string(),
            "Cannot find all required worksheets.\nExpected: categories, products, sales.\nActual: categories, Sheet1."
        );
    }

    #[test]
    fn test_only_format_errors_are_rejections() {
        let format: ImportError = FormatError::UnsupportedFile("csv".into()).into();
        assert!(format.is_rejection());
        assert_eq!(format.status_code(), StatusCode::NOT_ACCEPTABLE);

        let referential = ImportError::ReferentialIntegrity {
            sheet: "products".into(),
            row: 2,
            entity: "category",
            id: 2,
        };
        assert!(!referential.is_rejection());
        assert_eq!(referential.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            referential.to_string(),
            "Referential integrity violation on sheet 'products', row 2: category 2 does not exist."
        );
    }
}
