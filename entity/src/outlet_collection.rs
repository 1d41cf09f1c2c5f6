//! Tier assignments of collections to outlets.
//!
//! The composite primary key `(outlet_id, tier)` lets the database itself enforce that an
//! outlet holds at most one collection per tier.

use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::CollectionTier;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "outlet_collection")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub outlet_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tier: CollectionTier,
    pub collection_id: Uuid,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::outlet::Entity",
        from = "Column::OutletId",
        to = "super::outlet::Column::Id"
    )]
    Outlet,
    #[sea_orm(
        belongs_to = "super::collection::Entity",
        from = "Column::CollectionId",
        to = "super::collection::Column::Id"
    )]
    Collection,
}

impl Related<super::outlet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outlet.def()
    }
}

impl Related<super::collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
