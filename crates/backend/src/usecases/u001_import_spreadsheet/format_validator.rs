use contracts::usecases::u001_import_spreadsheet::{
    CATEGORIES_SHEET, PRODUCTS_SHEET, SALES_SHEET, SPREADSHEET_FORMAT,
};

use super::error::FormatError;
use super::headers::HeaderMap;
use super::workbook::{Workbook, Worksheet};

/// Обязательные листы книги, уже прошедшие проверку формата
#[derive(Debug, Clone, Copy)]
pub struct RequiredSheets<'a> {
    pub categories: &'a Worksheet,
    pub products: &'a Worksheet,
    pub sales: &'a Worksheet,
}

/// Проверяет наличие обязательных листов и колонок. Строки данных не читаются.
pub fn check_format(workbook: &Workbook) -> Result<RequiredSheets<'_>, FormatError> {
    let expected_sheets: Vec<&str> = SPREADSHEET_FORMAT.iter().map(|(name, _)| *name).collect();
    let actual_sheets = workbook.sheet_names();

    if expected_sheets
        .iter()
        .any(|name| workbook.sheet(name).is_none())
    {
        return Err(FormatError::MissingSheets {
            expected: to_strings(&expected_sheets),
            actual: to_strings(&actual_sheets),
        });
    }

    for (sheet_name, required_columns) in SPREADSHEET_FORMAT {
        let Some(sheet) = workbook.sheet(sheet_name) else {
            continue;
        };
        let headers = HeaderMap::resolve(sheet);
        if !headers.missing(required_columns).is_empty() {
            return Err(FormatError::MissingColumns {
                sheet: sheet_name.to_string(),
                expected: to_strings(required_columns),
                actual: to_strings(&headers.names()),
            });
        }
    }

    let require = |name: &str| {
        workbook.sheet(name).ok_or_else(|| FormatError::MissingSheets {
            expected: to_strings(&expected_sheets),
            actual: to_strings(&actual_sheets),
        })
    };

    Ok(RequiredSheets {
        categories: require(CATEGORIES_SHEET)?,
        products: require(PRODUCTS_SHEET)?,
        sales: require(SALES_SHEET)?,
    })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
