use serde::{Deserialize, Serialize};

/// Категория товаров. Идентификатор приходит из внешнего источника (таблицы импорта).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
