use sea_orm::entity::prelude::*;

use crate::json::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "outlet_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub contact_number: String,
    pub latitude: f64,
    pub longitude: f64,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub country: String,
    #[sea_orm(column_type = "String(StringLen::N(6))")]
    pub pincode: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub image_urls: StringList,
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
