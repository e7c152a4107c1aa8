pub mod format;
pub mod response;

pub use format::*;
pub use response::ImportSummary;
