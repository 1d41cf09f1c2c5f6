use sea_orm::entity::prelude::*;

use crate::json::DayList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "infinity_pass")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub start_time: Time,
    pub end_time: Time,
    #[sea_orm(column_type = "JsonBinary")]
    pub days: DayList,
    pub price: i32,
    pub commission: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub cuisine: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub liquor_type: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub special_offer: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::outlet::Entity")]
    Outlet,
}

impl Related<super::outlet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outlet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
