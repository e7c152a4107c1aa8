pub mod d001_sales_report;
