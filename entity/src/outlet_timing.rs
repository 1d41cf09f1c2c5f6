use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::EstablishmentType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "outlet_timing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub establishment_type: EstablishmentType,
    pub hotel_stay: bool,
    pub event_space: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::outlet_timing_slot::Entity")]
    OutletTimingSlot,
    #[sea_orm(has_one = "super::outlet::Entity")]
    Outlet,
}

impl Related<super::outlet_timing_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletTimingSlot.def()
    }
}

impl Related<super::outlet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outlet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
