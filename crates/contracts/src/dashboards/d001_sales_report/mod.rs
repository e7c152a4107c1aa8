pub mod dto;

pub use dto::SalesReportRow;
