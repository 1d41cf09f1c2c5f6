use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "outlet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: Option<String>,
    pub owner_id: Uuid,
    pub is_verified: bool,
    #[sea_orm(unique)]
    pub details_id: Uuid,
    #[sea_orm(unique)]
    pub legal_document_id: Uuid,
    #[sea_orm(unique)]
    pub manager_id: Uuid,
    #[sea_orm(unique)]
    pub timing_id: Uuid,
    #[sea_orm(unique)]
    pub bartender_id: Option<Uuid>,
    #[sea_orm(unique)]
    pub infinity_pass_id: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::outlet_details::Entity",
        from = "Column::DetailsId",
        to = "super::outlet_details::Column::Id"
    )]
    OutletDetails,
    #[sea_orm(
        belongs_to = "super::outlet_legal_document::Entity",
        from = "Column::LegalDocumentId",
        to = "super::outlet_legal_document::Column::Id"
    )]
    OutletLegalDocument,
    #[sea_orm(
        belongs_to = "super::outlet_manager::Entity",
        from = "Column::ManagerId",
        to = "super::outlet_manager::Column::Id"
    )]
    OutletManager,
    #[sea_orm(
        belongs_to = "super::outlet_timing::Entity",
        from = "Column::TimingId",
        to = "super::outlet_timing::Column::Id"
    )]
    OutletTiming,
    #[sea_orm(
        belongs_to = "super::outlet_bartender::Entity",
        from = "Column::BartenderId",
        to = "super::outlet_bartender::Column::Id"
    )]
    OutletBartender,
    #[sea_orm(
        belongs_to = "super::infinity_pass::Entity",
        from = "Column::InfinityPassId",
        to = "super::infinity_pass::Column::Id"
    )]
    InfinityPass,
    #[sea_orm(has_many = "super::outlet_collection::Entity")]
    OutletCollection,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::outlet_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletDetails.def()
    }
}

impl Related<super::outlet_legal_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletLegalDocument.def()
    }
}

impl Related<super::outlet_manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletManager.def()
    }
}

impl Related<super::outlet_timing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletTiming.def()
    }
}

impl Related<super::outlet_bartender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletBartender.def()
    }
}

impl Related<super::infinity_pass::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InfinityPass.def()
    }
}

impl Related<super::outlet_collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OutletCollection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
