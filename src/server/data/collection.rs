use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::input::NewCollection;

pub struct CollectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectionRepository<'a, C> {
    /// Creates a new instance of [`CollectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the collection row, liquors are stored by [`super::liquor::LiquorRepository`]
    pub async fn create(
        &self,
        collection: &NewCollection,
    ) -> Result<entity::collection::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Collection::insert(entity::collection::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            tier: ActiveValue::Set(collection.tier),
            pegs_per_day: ActiveValue::Set(collection.pegs_per_day),
            label_one: ActiveValue::Set(collection.label_one.clone()),
            label_two: ActiveValue::Set(collection.label_two.clone()),
            start_date: ActiveValue::Set(collection.start_date),
            end_date: ActiveValue::Set(collection.end_date),
            booking_price: ActiveValue::Set(collection.booking_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        collection_id: Uuid,
    ) -> Result<Option<entity::collection::Model>, DbErr> {
        entity::prelude::Collection::find_by_id(collection_id)
            .one(self.db)
            .await
    }
}
