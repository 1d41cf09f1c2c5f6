use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::BankAccountType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "outlet_legal_document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(14))")]
    pub fssai_number: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub fssai_url: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub pan_card_number: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pan_card_url: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub gst_number: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub on_shop_license_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub off_shop_license_url: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(30))", nullable)]
    pub bank_account_number: Option<String>,
    pub bank_account_type: BankAccountType,
    #[sea_orm(column_type = "String(StringLen::N(11))", nullable)]
    pub bank_ifsc_code: Option<String>,
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
