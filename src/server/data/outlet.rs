use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::input::NewOutlet;

pub struct OutletRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OutletRepository<'a, C> {
    /// Creates a new instance of [`OutletRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new unverified outlet without an infinity pass
    pub async fn create(&self, outlet: NewOutlet) -> Result<entity::outlet::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Outlet::insert(entity::outlet::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(outlet.name),
            owner_id: ActiveValue::Set(outlet.owner_id),
            is_verified: ActiveValue::Set(false),
            details_id: ActiveValue::Set(outlet.details_id),
            legal_document_id: ActiveValue::Set(outlet.legal_document_id),
            manager_id: ActiveValue::Set(outlet.manager_id),
            timing_id: ActiveValue::Set(outlet.timing_id),
            bartender_id: ActiveValue::Set(outlet.bartender_id),
            infinity_pass_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get(&self, outlet_id: Uuid) -> Result<Option<entity::outlet::Model>, DbErr> {
        entity::prelude::Outlet::find_by_id(outlet_id)
            .one(self.db)
            .await
    }

    /// Outlets of an owner, oldest first
    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<entity::outlet::Model>, DbErr> {
        entity::prelude::Outlet::find()
            .filter(entity::outlet::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::outlet::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Sets the verification flag of an outlet
    ///
    /// Returns the number of rows affected, 0 if the outlet does not exist.
    pub async fn set_verified(&self, outlet_id: Uuid, is_verified: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Outlet::update_many()
            .col_expr(entity::outlet::Column::IsVerified, Expr::value(is_verified))
            .col_expr(
                entity::outlet::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::outlet::Column::Id.eq(outlet_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Points an outlet at an infinity pass if it does not already have one
    ///
    /// The update only matches while `infinity_pass_id` is still null, so two concurrent
    /// attaches can never both succeed. Returns the number of rows affected, 0 if the outlet
    /// does not exist or already has a pass.
    pub async fn attach_infinity_pass(
        &self,
        outlet_id: Uuid,
        infinity_pass_id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Outlet::update_many()
            .col_expr(
                entity::outlet::Column::InfinityPassId,
                Expr::value(Some(infinity_pass_id)),
            )
            .col_expr(
                entity::outlet::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::outlet::Column::Id.eq(outlet_id))
            .filter(entity::outlet::Column::InfinityPassId.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
