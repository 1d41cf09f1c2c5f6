use chrono::Utc;
use entity::json::StringList;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::server::model::input::NewLiquor;

pub struct LiquorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LiquorRepository<'a, C> {
    /// Creates a new instance of [`LiquorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_many(
        &self,
        collection_id: Uuid,
        liquors: &[NewLiquor],
    ) -> Result<Vec<entity::liquor::Model>, DbErr> {
        if liquors.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();

        let liquors = liquors.iter().map(|liquor| entity::liquor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            collection_id: ActiveValue::Set(collection_id),
            category: ActiveValue::Set(liquor.category.clone()),
            starting_price: ActiveValue::Set(liquor.starting_price),
            brand_names: ActiveValue::Set(StringList(liquor.brand_names.clone())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        });

        entity::prelude::Liquor::insert_many(liquors)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_collection(
        &self,
        collection_id: Uuid,
    ) -> Result<Vec<entity::liquor::Model>, DbErr> {
        entity::prelude::Liquor::find()
            .filter(entity::liquor::Column::CollectionId.eq(collection_id))
            .order_by_asc(entity::liquor::Column::Category)
            .all(self.db)
            .await
    }
}
