use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn owner(&self) -> OwnerFixtures<'_> {
        OwnerFixtures { setup: self }
    }
}

pub struct OwnerFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> OwnerFixtures<'a> {
    pub async fn insert_owner(
        &self,
        mobile_number: &str,
    ) -> Result<entity::owner::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Owner::insert(entity::owner::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(Some("Test Owner".to_string())),
                email: ActiveValue::Set(None),
                mobile_number: ActiveValue::Set(mobile_number.to_string()),
                isd_code: ActiveValue::Set("+91".to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
