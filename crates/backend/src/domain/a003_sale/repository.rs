use chrono::NaiveDate;
use contracts::domain::a003_sale::aggregate::Sale;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use super::entry_model;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sale")]
pub struct Model {
    // Колонка в БД автоинкрементная, но при импорте id задается явно
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Записывает продажу вместе со всеми её строками.
/// Возвращает количество записанных строк.
pub async fn insert<C: ConnectionTrait>(conn: &C, sale: &Sale) -> Result<usize, DbErr> {
    let active = ActiveModel {
        id: Set(sale.id),
        date: Set(sale.date),
    };
    Entity::insert(active).exec(conn).await?;

    for entry in &sale.entries {
        let active_entry = entry_model::ActiveModel {
            id: NotSet,
            sale_id: Set(sale.id),
            product_id: Set(entry.product_id),
            quantity: Set(entry.quantity),
        };
        entry_model::Entity::insert(active_entry).exec(conn).await?;
    }

    Ok(sale.entries.len())
}

/// Загружает продажу с её строками
pub async fn get_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Sale>, DbErr> {
    let Some(model) = Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };
    let entries = entry_model::Entity::find()
        .filter(entry_model::Column::SaleId.eq(id))
        .order_by_asc(entry_model::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Some(Sale {
        id: model.id,
        date: model.date,
        entries,
    }))
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
    Entity::find().count(conn).await
}

pub async fn count_entries<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
    entry_model::Entity::find().count(conn).await
}
