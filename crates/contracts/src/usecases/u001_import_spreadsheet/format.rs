//! Ожидаемая структура книги для импорта.
//!
//! Имена листов и колонок сравниваются без учета регистра.

pub const CATEGORIES_SHEET: &str = "categories";
pub const PRODUCTS_SHEET: &str = "products";
pub const SALES_SHEET: &str = "sales";

pub const CATEGORY_ID: &str = "category_id";
pub const CATEGORY_NAME: &str = "category_name";
pub const PRODUCT_ID: &str = "product_id";
pub const PRODUCT_NAME: &str = "product_name";
pub const PRICE: &str = "price";
pub const SALE_ID: &str = "sale_id";
pub const QUANTITY: &str = "quantity";
pub const SALE_DATE: &str = "sale_date";

/// Обязательные листы и их колонки, в порядке импорта
pub const SPREADSHEET_FORMAT: &[(&str, &[&str])] = &[
    (CATEGORIES_SHEET, &[CATEGORY_ID, CATEGORY_NAME]),
    (PRODUCTS_SHEET, &[PRODUCT_ID, PRODUCT_NAME, CATEGORY_ID, PRICE]),
    (SALES_SHEET, &[SALE_ID, PRODUCT_ID, QUANTITY, SALE_DATE]),
];

/// Расширения файлов, которые умеет читать backend
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
