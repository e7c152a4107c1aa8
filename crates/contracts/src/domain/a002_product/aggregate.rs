use serde::{Deserialize, Serialize};

/// Товар
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Ссылка на `Category::id`, категория должна существовать на момент импорта
    pub category_id: i32,
    /// Цена в минимальных единицах валюты (копейки, центы)
    pub price: i32,
}
