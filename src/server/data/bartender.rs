use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::model::outlet::CreateBartenderDto;

pub struct BartenderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BartenderRepository<'a, C> {
    /// Creates a new instance of [`BartenderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        bartender: &CreateBartenderDto,
    ) -> Result<entity::outlet_bartender::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::OutletBartender::insert(entity::outlet_bartender::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(bartender.name.clone()),
            contact_number: ActiveValue::Set(bartender.contact_number.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        bartender_id: Uuid,
    ) -> Result<Option<entity::outlet_bartender::Model>, DbErr> {
        entity::prelude::OutletBartender::find_by_id(bartender_id)
            .one(self.db)
            .await
    }
}
