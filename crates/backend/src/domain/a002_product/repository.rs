use contracts::domain::a002_product::aggregate::Product;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            category_id: m.category_id,
            price: m.price,
        }
    }
}

pub async fn insert<C: ConnectionTrait>(conn: &C, product: &Product) -> Result<(), DbErr> {
    let active = ActiveModel {
        id: Set(product.id),
        category_id: Set(product.category_id),
        name: Set(product.name.clone()),
        price: Set(product.price),
    };
    Entity::insert(active).exec(conn).await?;
    Ok(())
}

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Product>, DbErr> {
    let result = Entity::find_by_id(id).one(conn).await?;
    Ok(result.map(Into::into))
}

pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
    Entity::find().count(conn).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a001_category::aggregate::Category;

    fn product(id: i32, name: &str, category_id: i32) -> Product {
        Product {
            id,
            name: name.to_string(),
            category_id,
            price: 100,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let db = connect_in_memory().await;
        a001_category::repository::insert(&db, &Category::new(1, "Drinks")).await.unwrap();
        insert(&db, &product(10, "Tea", 1)).await.unwrap();
        insert(&db, &product(11, "Coffee", 1)).await.unwrap();

        assert_eq!(find_by_id(&db, 11).await.unwrap(), Some(product(11, "Coffee", 1)));
        assert_eq!(find_by_id(&db, 12).await.unwrap(), None);
        assert_eq!(count(&db).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_category_violates_foreign_key() {
        let db = connect_in_memory().await;
        assert!(insert(&db, &product(10, "Tea", 7)).await.is_err());
    }
}
