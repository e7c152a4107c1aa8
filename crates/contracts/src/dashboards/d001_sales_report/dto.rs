use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Одна строка отчета: строка продажи, развёрнутая через sale/product/category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReportRow {
    /// Дата продажи, сериализуется как "YYYY-MM-DD"
    pub date: NaiveDate,
    /// Название товара
    pub name: String,
    pub quantity: i32,
    /// Название категории
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_non_ascii_literally() {
        let row = SalesReportRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            name: "Круассан".to_string(),
            quantity: 3,
            category: "Café".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-01-02","name":"Круассан","quantity":3,"category":"Café"}"#
        );
    }
}
