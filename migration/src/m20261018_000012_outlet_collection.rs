use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261018_000009_outlet::Outlet, m20261018_000010_collection::Collection};

static PK_OUTLET_COLLECTION: &str = "pk-outlet_collection";
static IDX_OUTLET_COLLECTION_COLLECTION_ID: &str = "idx-outlet_collection-collection_id";
static FK_OUTLET_COLLECTION_OUTLET_ID: &str = "fk-outlet_collection-outlet_id";
static FK_OUTLET_COLLECTION_COLLECTION_ID: &str = "fk-outlet_collection-collection_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutletCollection::Table)
                    .if_not_exists()
                    .col(uuid(OutletCollection::OutletId))
                    .col(string_len(OutletCollection::Tier, 16))
                    .col(uuid(OutletCollection::CollectionId))
                    .col(timestamp(OutletCollection::CreatedAt))
                    .col(timestamp(OutletCollection::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_OUTLET_COLLECTION)
                            .col(OutletCollection::OutletId)
                            .col(OutletCollection::Tier),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OUTLET_COLLECTION_COLLECTION_ID)
                    .table(OutletCollection::Table)
                    .col(OutletCollection::CollectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OUTLET_COLLECTION_OUTLET_ID)
                    .from_tbl(OutletCollection::Table)
                    .from_col(OutletCollection::OutletId)
                    .to_tbl(Outlet::Table)
                    .to_col(Outlet::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OUTLET_COLLECTION_COLLECTION_ID)
                    .from_tbl(OutletCollection::Table)
                    .from_col(OutletCollection::CollectionId)
                    .to_tbl(Collection::Table)
                    .to_col(Collection::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OUTLET_COLLECTION_COLLECTION_ID)
                    .table(OutletCollection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OUTLET_COLLECTION_OUTLET_ID)
                    .table(OutletCollection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OUTLET_COLLECTION_COLLECTION_ID)
                    .table(OutletCollection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OutletCollection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OutletCollection {
    Table,
    OutletId,
    Tier,
    CollectionId,
    CreatedAt,
    UpdatedAt,
}
