use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261018_000001_owner::Owner, m20261018_000002_outlet_details::OutletDetails,
    m20261018_000003_outlet_legal_document::OutletLegalDocument,
    m20261018_000004_outlet_manager::OutletManager,
    m20261018_000005_outlet_bartender::OutletBartender,
    m20261018_000006_outlet_timing::OutletTiming, m20261018_000008_infinity_pass::InfinityPass,
};

static IDX_OUTLET_OWNER_ID: &str = "idx-outlet-owner_id";
static IDX_OUTLET_BARTENDER_ID: &str = "idx-outlet-bartender_id";
static IDX_OUTLET_INFINITY_PASS_ID: &str = "idx-outlet-infinity_pass_id";
static FK_OUTLET_OWNER_ID: &str = "fk-outlet-owner_id";
static FK_OUTLET_DETAILS_ID: &str = "fk-outlet-details_id";
static FK_OUTLET_LEGAL_DOCUMENT_ID: &str = "fk-outlet-legal_document_id";
static FK_OUTLET_MANAGER_ID: &str = "fk-outlet-manager_id";
static FK_OUTLET_TIMING_ID: &str = "fk-outlet-timing_id";
static FK_OUTLET_BARTENDER_ID: &str = "fk-outlet-bartender_id";
static FK_OUTLET_INFINITY_PASS_ID: &str = "fk-outlet-infinity_pass_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

fn foreign_keys() -> Vec<ForeignKeyCreateStatement> {
    vec![
        ForeignKey::create()
            .name(FK_OUTLET_OWNER_ID)
            .from_tbl(Outlet::Table)
            .from_col(Outlet::OwnerId)
            .to_tbl(Owner::Table)
            .to_col(Owner::Id)
            .to_owned(),
        ForeignKey::create()
            .name(FK_OUTLET_DETAILS_ID)
            .from_tbl(Outlet::Table)
            .from_col(Outlet::DetailsId)
            .to_tbl(OutletDetails::Table)
            .to_col(OutletDetails::Id)
            .to_owned(),
        ForeignKey::create()
            .name(FK_OUTLET_LEGAL_DOCUMENT_ID)
            .from_tbl(Outlet::Table)
            .from_col(Outlet::LegalDocumentId)
            .to_tbl(OutletLegalDocument::Table)
            .to_col(OutletLegalDocument::Id)
            .to_owned(),
        ForeignKey::create()
            .name(FK_OUTLET_MANAGER_ID)
            .from_tbl(Outlet::Table)
            .from_col(Outlet::ManagerId)
            .to_tbl(OutletManager::Table)
            .to_col(OutletManager::Id)
            .to_owned(),
        ForeignKey::create()
            .name(FK_OUTLET_TIMING_ID)
            .from_tbl(Outlet::Table)
            .from_col(Outlet::TimingId)
            .to_tbl(OutletTiming::Table)
            .to_col(OutletTiming::Id)
            .to_owned(),
        ForeignKey::create()
            .name(FK_OUTLET_BARTENDER_ID)
            .from_tbl(Outlet::Table)
            .from_col(Outlet::BartenderId)
            .to_tbl(OutletBartender::Table)
            .to_col(OutletBartender::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .to_owned(),
        ForeignKey::create()
            .name(FK_OUTLET_INFINITY_PASS_ID)
            .from_tbl(Outlet::Table)
            .from_col(Outlet::InfinityPassId)
            .to_tbl(InfinityPass::Table)
            .to_col(InfinityPass::Id)
            .on_delete(ForeignKeyAction::SetNull)
            .to_owned(),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outlet::Table)
                    .if_not_exists()
                    .col(pk_uuid(Outlet::Id))
                    .col(string_null(Outlet::Name))
                    .col(uuid(Outlet::OwnerId))
                    .col(boolean(Outlet::IsVerified).default(false))
                    .col(uuid_uniq(Outlet::DetailsId))
                    .col(uuid_uniq(Outlet::LegalDocumentId))
                    .col(uuid_uniq(Outlet::ManagerId))
                    .col(uuid_uniq(Outlet::TimingId))
                    .col(uuid_null(Outlet::BartenderId))
                    .col(uuid_null(Outlet::InfinityPassId))
                    .col(timestamp(Outlet::CreatedAt))
                    .col(timestamp(Outlet::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OUTLET_OWNER_ID)
                    .table(Outlet::Table)
                    .col(Outlet::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OUTLET_BARTENDER_ID)
                    .table(Outlet::Table)
                    .col(Outlet::BartenderId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OUTLET_INFINITY_PASS_ID)
                    .table(Outlet::Table)
                    .col(Outlet::InfinityPassId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        for foreign_key in foreign_keys() {
            manager.create_foreign_key(foreign_key).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_OUTLET_INFINITY_PASS_ID,
            FK_OUTLET_BARTENDER_ID,
            FK_OUTLET_TIMING_ID,
            FK_OUTLET_MANAGER_ID,
            FK_OUTLET_LEGAL_DOCUMENT_ID,
            FK_OUTLET_DETAILS_ID,
            FK_OUTLET_OWNER_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(name).table(Outlet::Table).to_owned())
                .await?;
        }

        for name in [
            IDX_OUTLET_INFINITY_PASS_ID,
            IDX_OUTLET_BARTENDER_ID,
            IDX_OUTLET_OWNER_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Outlet::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Outlet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Outlet {
    Table,
    Id,
    Name,
    OwnerId,
    IsVerified,
    DetailsId,
    LegalDocumentId,
    ManagerId,
    TimingId,
    BartenderId,
    InfinityPassId,
    CreatedAt,
    UpdatedAt,
}
