use contracts::domain::a001_category::aggregate::Category;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            id: m.id,
            name: m.name,
        }
    }
}

pub async fn insert<C: ConnectionTrait>(conn: &C, category: &Category) -> Result<(), DbErr> {
    let active = ActiveModel {
        id: Set(category.id),
        name: Set(category.name.clone()),
    };
    Entity::insert(active).exec(conn).await?;
    Ok(())
}

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Category>, DbErr> {
    let result = Entity::find_by_id(id).one(conn).await?;
    Ok(result.map(Into::into))
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
    Entity::find().count(conn).await
}
