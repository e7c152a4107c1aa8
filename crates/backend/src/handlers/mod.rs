pub mod d001_sales_report;
pub mod pages;
pub mod u001_import_spreadsheet;
