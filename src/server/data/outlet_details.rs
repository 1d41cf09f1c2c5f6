use chrono::Utc;
use entity::json::StringList;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::model::outlet::CreateOutletDetailsDto;

pub struct OutletDetailsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OutletDetailsRepository<'a, C> {
    /// Creates a new instance of [`OutletDetailsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        details: &CreateOutletDetailsDto,
    ) -> Result<entity::outlet_details::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::OutletDetails::insert(entity::outlet_details::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(details.name.clone()),
            address: ActiveValue::Set(details.address.clone()),
            contact_number: ActiveValue::Set(details.contact_number.clone()),
            latitude: ActiveValue::Set(details.latitude),
            longitude: ActiveValue::Set(details.longitude),
            country: ActiveValue::Set(details.country.clone()),
            pincode: ActiveValue::Set(details.pincode.clone()),
            image_urls: ActiveValue::Set(StringList(details.image_urls.clone())),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        details_id: Uuid,
    ) -> Result<Option<entity::outlet_details::Model>, DbErr> {
        entity::prelude::OutletDetails::find_by_id(details_id)
            .one(self.db)
            .await
    }
}
