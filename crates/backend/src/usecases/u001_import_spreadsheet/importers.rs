//! Построчные импортеры листов. Порядок вызова важен: categories -> products -> sales.

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::usecases::u001_import_spreadsheet::{
    CATEGORY_ID, CATEGORY_NAME, PRICE, PRODUCT_ID, PRODUCT_NAME, QUANTITY, SALE_DATE, SALE_ID,
};
use sea_orm::ConnectionTrait;

use super::context::ImportContext;
use super::error::ImportError;
use super::headers::HeaderMap;
use super::row::rows;
use super::workbook::Worksheet;

pub async fn import_categories<C: ConnectionTrait>(
    ctx: &mut ImportContext<'_, C>,
    sheet: &Worksheet,
) -> Result<usize, ImportError> {
    let headers = HeaderMap::resolve(sheet);
    let mut count = 0;
    for row in rows(sheet, &headers) {
        let id = row.integer(CATEGORY_ID)?;
        let name = row.text(CATEGORY_NAME)?;
        ctx.stage_category(row.number(), Category::new(id, name))?;
        count += 1;
    }
    tracing::info!("Staged {} categories", count);
    Ok(count)
}

pub async fn import_products<C: ConnectionTrait>(
    ctx: &mut ImportContext<'_, C>,
    sheet: &Worksheet,
) -> Result<usize, ImportError> {
    let headers = HeaderMap::resolve(sheet);
    let mut count = 0;
    for row in rows(sheet, &headers) {
        let product = Product {
            id: row.integer(PRODUCT_ID)?,
            name: row.text(PRODUCT_NAME)?,
            category_id: row.integer(CATEGORY_ID)?,
            price: row.integer(PRICE)?,
        };
        ctx.require_category(row.sheet(), row.number(), product.category_id)
            .await?;
        ctx.stage_product(row.number(), product)?;
        count += 1;
    }
    tracing::info!("Staged {} products", count);
    Ok(count)
}

/// Каждая строка листа - одна строка продажи; продажи собираются по `sale_id`
pub async fn import_sales<C: ConnectionTrait>(
    ctx: &mut ImportContext<'_, C>,
    sheet: &Worksheet,
) -> Result<usize, ImportError> {
    let headers = HeaderMap::resolve(sheet);
    let mut entries = 0;
    for row in rows(sheet, &headers) {
        let sale_id = row.integer(SALE_ID)?;
        let product_id = row.integer(PRODUCT_ID)?;
        let quantity = row.positive_integer(QUANTITY)?;
        let date = row.date(SALE_DATE)?;

        ctx.require_product(row.sheet(), row.number(), product_id)
            .await?;
        ctx.sale_mut(row.number(), sale_id, date)?
            .add_entry(product_id, quantity);
        entries += 1;
    }
    tracing::info!(
        "Staged {} sales with {} entries",
        ctx.staged_sales().len(),
        entries
    );
    Ok(entries)
}
