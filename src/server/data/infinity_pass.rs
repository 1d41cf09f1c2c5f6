use chrono::Utc;
use entity::json::DayList;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::input::NewInfinityPass;

pub struct InfinityPassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InfinityPassRepository<'a, C> {
    /// Creates a new instance of [`InfinityPassRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        pass: &NewInfinityPass,
    ) -> Result<entity::infinity_pass::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::InfinityPass::insert(entity::infinity_pass::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            start_time: ActiveValue::Set(pass.start_time),
            end_time: ActiveValue::Set(pass.end_time),
            days: ActiveValue::Set(DayList(pass.days.clone())),
            price: ActiveValue::Set(pass.price),
            commission: ActiveValue::Set(pass.commission),
            cuisine: ActiveValue::Set(pass.cuisine.clone()),
            liquor_type: ActiveValue::Set(pass.liquor_type.clone()),
            special_offer: ActiveValue::Set(pass.special_offer.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        infinity_pass_id: Uuid,
    ) -> Result<Option<entity::infinity_pass::Model>, DbErr> {
        entity::prelude::InfinityPass::find_by_id(infinity_pass_id)
            .one(self.db)
            .await
    }
}
