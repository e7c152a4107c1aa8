//! Импорт книги (categories / products / sales) в хранилище одной транзакцией.

pub mod context;
pub mod error;
pub mod executor;
pub mod format_validator;
pub mod headers;
pub mod importers;
pub mod row;
pub mod upload;
pub mod workbook;

pub use error::{FormatError, ImportError};
pub use executor::{import_file, import_upload, import_workbook};
pub use workbook::{Cell, Workbook, Worksheet};

#[cfg(test)]
pub(crate) mod test_support;
