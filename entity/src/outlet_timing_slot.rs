use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::DayOfWeek;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "outlet_timing_slot")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique_key = "outlet_timing_id-day")]
    pub outlet_timing_id: Uuid,
    #[sea_orm(unique_key = "outlet_timing_id-day")]
    pub day: DayOfWeek,
    pub opening_time: Time,
    pub closing_time: Time,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::outlet_timing::Entity",
        from = "Column::OutletTimingId",
        to = "super::outlet_timing::Column::Id"
    )]
    OutletTiming,
}

impl Related<super::outlet_timing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletTiming.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
