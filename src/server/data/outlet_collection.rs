use chrono::Utc;
use entity::sea_orm_active_enums::CollectionTier;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct OutletCollectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OutletCollectionRepository<'a, C> {
    /// Creates a new instance of [`OutletCollectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Assigns a collection to an outlet's tier
    ///
    /// Fails with a unique constraint violation if the tier is already filled.
    pub async fn create(
        &self,
        outlet_id: Uuid,
        tier: CollectionTier,
        collection_id: Uuid,
    ) -> Result<entity::outlet_collection::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::OutletCollection::insert(entity::outlet_collection::ActiveModel {
            outlet_id: ActiveValue::Set(outlet_id),
            tier: ActiveValue::Set(tier),
            collection_id: ActiveValue::Set(collection_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        outlet_id: Uuid,
        tier: CollectionTier,
    ) -> Result<Option<entity::outlet_collection::Model>, DbErr> {
        entity::prelude::OutletCollection::find_by_id((outlet_id, tier))
            .one(self.db)
            .await
    }

    pub async fn find_by_outlet(
        &self,
        outlet_id: Uuid,
    ) -> Result<Vec<entity::outlet_collection::Model>, DbErr> {
        entity::prelude::OutletCollection::find()
            .filter(entity::outlet_collection::Column::OutletId.eq(outlet_id))
            .all(self.db)
            .await
    }
}
