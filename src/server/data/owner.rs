use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

pub struct OwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new owner with no profile details
    pub async fn create(
        &self,
        mobile_number: &str,
        isd_code: &str,
    ) -> Result<entity::owner::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Owner::insert(entity::owner::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            mobile_number: ActiveValue::Set(mobile_number.to_string()),
            isd_code: ActiveValue::Set(isd_code.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, owner_id: Uuid) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find_by_id(owner_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .filter(entity::owner::Column::MobileNumber.eq(mobile_number))
            .one(self.db)
            .await
    }

    /// Updates the owner's name and email
    ///
    /// Fields passed as `None` keep their stored value. Returns `Ok(None)` if the owner
    /// does not exist.
    pub async fn update_profile(
        &self,
        owner_id: Uuid,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        let owner = match entity::prelude::Owner::find_by_id(owner_id)
            .one(self.db)
            .await?
        {
            Some(owner) => owner,
            None => return Ok(None),
        };

        let mut owner_am = owner.into_active_model();
        if let Some(name) = name {
            owner_am.name = ActiveValue::Set(Some(name));
        }
        if let Some(email) = email {
            owner_am.email = ActiveValue::Set(Some(email));
        }
        owner_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let owner = owner_am.update(self.db).await?;

        Ok(Some(owner))
    }
}
