use contracts::domain::a003_sale::aggregate::SaleEntry;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

/// Строки продаж (`sale_entry`), `id` выдает SQLite
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sale_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SaleEntry {
    fn from(m: Model) -> Self {
        SaleEntry {
            id: Some(m.id),
            sale_id: m.sale_id,
            product_id: m.product_id,
            quantity: m.quantity,
        }
    }
}
