use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Продажа (чек). Владеет своими строками `entries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i32,
    pub date: NaiveDate,
    pub entries: Vec<SaleEntry>,
}

/// Строка продажи.
///
/// `sale_id` - обратная ссылка на продажу-владельца, строка ею не владеет.
/// `id` назначается хранилищем при записи.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleEntry {
    pub id: Option<i32>,
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl Sale {
    pub fn new(id: i32, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            entries: Vec::new(),
        }
    }

    /// Добавляет строку и проставляет в ней обратную ссылку на эту продажу
    pub fn add_entry(&mut self, product_id: i32, quantity: i32) -> &SaleEntry {
        self.entries.push(SaleEntry {
            id: None,
            sale_id: self.id,
            product_id,
            quantity,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| i64::from(e.quantity)).sum()
    }
}
