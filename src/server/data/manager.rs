use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::model::outlet::CreateManagerDto;

pub struct ManagerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ManagerRepository<'a, C> {
    /// Creates a new instance of [`ManagerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        manager: &CreateManagerDto,
    ) -> Result<entity::outlet_manager::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::OutletManager::insert(entity::outlet_manager::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(manager.name.clone()),
            contact_number: ActiveValue::Set(manager.contact_number.clone()),
            email: ActiveValue::Set(manager.email.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(
        &self,
        manager_id: Uuid,
    ) -> Result<Option<entity::outlet_manager::Model>, DbErr> {
        entity::prelude::OutletManager::find_by_id(manager_id)
            .one(self.db)
            .await
    }
}
