use serde::{Deserialize, Serialize};

/// Итог успешного импорта
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub categories: usize,
    pub products: usize,
    pub sales: usize,
    pub sale_entries: usize,
}
