use chrono::Utc;
use entity::{json::StringList, sea_orm_active_enums::CollectionTier};
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, fixtures::factory::date, TestContext};

impl TestContext {
    pub fn collection(&self) -> CollectionFixtures<'_> {
        CollectionFixtures { setup: self }
    }
}

pub struct CollectionFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CollectionFixtures<'a> {
    /// Insert a collection of the given tier holding a single whisky liquor.
    pub async fn insert_collection(
        &self,
        tier: CollectionTier,
    ) -> Result<(entity::collection::Model, entity::liquor::Model), TestError> {
        let now = Utc::now().naive_utc();

        let collection = entity::prelude::Collection::insert(entity::collection::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            tier: ActiveValue::Set(tier),
            pegs_per_day: ActiveValue::Set(2),
            label_one: ActiveValue::Set(None),
            label_two: ActiveValue::Set(None),
            start_date: ActiveValue::Set(date(2026, 1, 1)),
            end_date: ActiveValue::Set(date(2026, 12, 31)),
            booking_price: ActiveValue::Set(499),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        let liquor = entity::prelude::Liquor::insert(entity::liquor::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            collection_id: ActiveValue::Set(collection.id),
            category: ActiveValue::Set("Whisky".to_string()),
            starting_price: ActiveValue::Set(250),
            brand_names: ActiveValue::Set(StringList(vec!["Brand A".to_string()])),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        Ok((collection, liquor))
    }

    /// Attach an existing collection to an outlet under the given tier.
    pub async fn assign(
        &self,
        outlet_id: Uuid,
        tier: CollectionTier,
        collection_id: Uuid,
    ) -> Result<entity::outlet_collection::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::OutletCollection::insert(entity::outlet_collection::ActiveModel {
                outlet_id: ActiveValue::Set(outlet_id),
                tier: ActiveValue::Set(tier),
                collection_id: ActiveValue::Set(collection_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
