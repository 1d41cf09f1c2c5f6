use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::input::{NewTimingSlot, TimingSlotChanges};

pub struct TimingSlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimingSlotRepository<'a, C> {
    /// Creates a new instance of [`TimingSlotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn active_model(
        timing_id: Uuid,
        slot: &NewTimingSlot,
    ) -> entity::outlet_timing_slot::ActiveModel {
        let now = Utc::now().naive_utc();

        entity::outlet_timing_slot::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            outlet_timing_id: ActiveValue::Set(timing_id),
            day: ActiveValue::Set(slot.day),
            opening_time: ActiveValue::Set(slot.opening_time),
            closing_time: ActiveValue::Set(slot.closing_time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
    }

    pub async fn create(
        &self,
        timing_id: Uuid,
        slot: &NewTimingSlot,
    ) -> Result<entity::outlet_timing_slot::Model, DbErr> {
        entity::prelude::OutletTimingSlot::insert(Self::active_model(timing_id, slot))
            .exec_with_returning(self.db)
            .await
    }

    /// Inserts every slot for a timing in a single statement
    pub async fn create_many(
        &self,
        timing_id: Uuid,
        slots: &[NewTimingSlot],
    ) -> Result<Vec<entity::outlet_timing_slot::Model>, DbErr> {
        if slots.is_empty() {
            return Ok(Vec::new());
        }

        let slots = slots
            .iter()
            .map(|slot| Self::active_model(timing_id, slot));

        entity::prelude::OutletTimingSlot::insert_many(slots)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(
        &self,
        slot_id: Uuid,
    ) -> Result<Option<entity::outlet_timing_slot::Model>, DbErr> {
        entity::prelude::OutletTimingSlot::find_by_id(slot_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_timing(
        &self,
        timing_id: Uuid,
    ) -> Result<Vec<entity::outlet_timing_slot::Model>, DbErr> {
        entity::prelude::OutletTimingSlot::find()
            .filter(entity::outlet_timing_slot::Column::OutletTimingId.eq(timing_id))
            .order_by_asc(entity::outlet_timing_slot::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Overwrites the provided fields of a slot
    ///
    /// Returns `Ok(None)` if the slot does not exist.
    pub async fn update(
        &self,
        slot_id: Uuid,
        changes: &TimingSlotChanges,
    ) -> Result<Option<entity::outlet_timing_slot::Model>, DbErr> {
        let slot = match entity::prelude::OutletTimingSlot::find_by_id(slot_id)
            .one(self.db)
            .await?
        {
            Some(slot) => slot,
            None => return Ok(None),
        };

        let mut slot_am = slot.into_active_model();
        if let Some(day) = changes.day {
            slot_am.day = ActiveValue::Set(day);
        }
        if let Some(opening_time) = changes.opening_time {
            slot_am.opening_time = ActiveValue::Set(opening_time);
        }
        if let Some(closing_time) = changes.closing_time {
            slot_am.closing_time = ActiveValue::Set(closing_time);
        }
        slot_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let slot = slot_am.update(self.db).await?;

        Ok(Some(slot))
    }
}
