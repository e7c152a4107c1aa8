use chrono::NaiveDate;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_sale::aggregate::Sale;
use contracts::usecases::u001_import_spreadsheet::{
    ImportSummary, CATEGORIES_SHEET, PRODUCTS_SHEET,
};
use sea_orm::ConnectionTrait;
use std::collections::{BTreeMap, HashMap, HashSet};

use super::error::{FormatError, ImportError};
use crate::domain::{a001_category, a002_product, a003_sale};

/// Контекст одного импорта поверх открытой транзакции.
///
/// Импортеры только подготавливают записи (staging); в хранилище они уходят
/// одним `flush` в конце. Проверки ссылок смотрят сначала на подготовленные
/// записи, затем на уже сохраненные в этой же транзакции.
pub struct ImportContext<'a, C: ConnectionTrait> {
    conn: &'a C,
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
    sales: Vec<Sale>,
    sale_positions: HashMap<i32, usize>,
    stored_categories: HashSet<i32>,
    stored_products: HashSet<i32>,
}

impl<'a, C: ConnectionTrait> ImportContext<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self {
            conn,
            categories: BTreeMap::new(),
            products: BTreeMap::new(),
            sales: Vec::new(),
            sale_positions: HashMap::new(),
            stored_categories: HashSet::new(),
            stored_products: HashSet::new(),
        }
    }

    pub fn stage_category(&mut self, row: usize, category: Category) -> Result<(), FormatError> {
        if self.categories.contains_key(&category.id) {
            return Err(FormatError::DuplicateId {
                sheet: CATEGORIES_SHEET.to_string(),
                row,
                entity: "category",
                id: category.id,
            });
        }
        self.categories.insert(category.id, category);
        Ok(())
    }

    pub fn stage_product(&mut self, row: usize, product: Product) -> Result<(), FormatError> {
        if self.products.contains_key(&product.id) {
            return Err(FormatError::DuplicateId {
                sheet: PRODUCTS_SHEET.to_string(),
                row,
                entity: "product",
                id: product.id,
            });
        }
        self.products.insert(product.id, product);
        Ok(())
    }

    pub async fn require_category(
        &mut self,
        sheet: &str,
        row: usize,
        id: i32,
    ) -> Result<(), ImportError> {
        if self.categories.contains_key(&id) || self.stored_categories.contains(&id) {
            return Ok(());
        }
        if a001_category::repository::find_by_id(self.conn, id)
            .await?
            .is_some()
        {
            self.stored_categories.insert(id);
            return Ok(());
        }
        Err(ImportError::ReferentialIntegrity {
            sheet: sheet.to_string(),
            row,
            entity: "category",
            id,
        })
    }

    pub async fn require_product(
        &mut self,
        sheet: &str,
        row: usize,
        id: i32,
    ) -> Result<(), ImportError> {
        if self.products.contains_key(&id) || self.stored_products.contains(&id) {
            return Ok(());
        }
        if a002_product::repository::find_by_id(self.conn, id)
            .await?
            .is_some()
        {
            self.stored_products.insert(id);
            return Ok(());
        }
        Err(ImportError::ReferentialIntegrity {
            sheet: sheet.to_string(),
            row,
            entity: "product",
            id,
        })
    }

    /// Продажа с данным id: найденная среди подготовленных или новая.
    /// Строки одной продажи группируются по ключу, а не по соседству в файле.
    pub fn sale_mut(
        &mut self,
        row: usize,
        sale_id: i32,
        date: NaiveDate,
    ) -> Result<&mut Sale, FormatError> {
        let position = match self.sale_positions.get(&sale_id) {
            Some(&position) => {
                let expected = self.sales[position].date;
                if expected != date {
                    return Err(FormatError::ConflictingSaleDate {
                        sale_id,
                        row,
                        expected,
                        found: date,
                    });
                }
                position
            }
            None => {
                self.sales.push(Sale::new(sale_id, date));
                let position = self.sales.len() - 1;
                self.sale_positions.insert(sale_id, position);
                position
            }
        };
        Ok(&mut self.sales[position])
    }

    pub fn staged_sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Отправляет подготовленные записи в хранилище в порядке зависимостей
    pub async fn flush(self) -> Result<ImportSummary, ImportError> {
        let mut summary = ImportSummary::default();

        for category in self.categories.values() {
            a001_category::repository::insert(self.conn, category).await?;
            summary.categories += 1;
        }
        for product in self.products.values() {
            a002_product::repository::insert(self.conn, product).await?;
            summary.products += 1;
        }
        for sale in &self.sales {
            summary.sale_entries += a003_sale::repository::insert(self.conn, sale).await?;
            summary.sales += 1;
        }

        tracing::debug!(
            "Flushed {} categories, {} products, {} sales, {} sale entries",
            summary.categories,
            summary.products,
            summary.sales,
            summary.sale_entries
        );
        Ok(summary)
    }
}
