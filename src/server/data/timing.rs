use chrono::Utc;
use entity::sea_orm_active_enums::EstablishmentType;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

pub struct TimingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimingRepository<'a, C> {
    /// Creates a new instance of [`TimingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the schedule header, slots are stored separately
    pub async fn create(
        &self,
        establishment_type: EstablishmentType,
        hotel_stay: bool,
        event_space: bool,
    ) -> Result<entity::outlet_timing::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::OutletTiming::insert(entity::outlet_timing::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            establishment_type: ActiveValue::Set(establishment_type),
            hotel_stay: ActiveValue::Set(hotel_stay),
            event_space: ActiveValue::Set(event_space),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        timing_id: Uuid,
    ) -> Result<Option<entity::outlet_timing::Model>, DbErr> {
        entity::prelude::OutletTiming::find_by_id(timing_id)
            .one(self.db)
            .await
    }
}
