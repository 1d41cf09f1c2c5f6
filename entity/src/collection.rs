use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::CollectionTier;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collection")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tier: CollectionTier,
    pub pegs_per_day: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub label_one: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub label_two: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    pub booking_price: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::liquor::Entity")]
    Liquor,
    #[sea_orm(has_many = "super::outlet_collection::Entity")]
    OutletCollection,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::liquor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Liquor.def()
    }
}

impl Related<super::outlet_collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletCollection.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
