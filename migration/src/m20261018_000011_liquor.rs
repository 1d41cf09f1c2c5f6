use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261018_000010_collection::Collection;

static IDX_LIQUOR_COLLECTION_ID: &str = "idx-liquor-collection_id";
static FK_LIQUOR_COLLECTION_ID: &str = "fk-liquor-collection_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Liquor::Table)
                    .if_not_exists()
                    .col(pk_uuid(Liquor::Id))
                    .col(uuid(Liquor::CollectionId))
                    .col(string_len(Liquor::Category, 100))
                    .col(integer(Liquor::StartingPrice))
                    .col(json_binary(Liquor::BrandNames))
                    .col(timestamp(Liquor::CreatedAt))
                    .col(timestamp(Liquor::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LIQUOR_COLLECTION_ID)
                    .table(Liquor::Table)
                    .col(Liquor::CollectionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIQUOR_COLLECTION_ID)
                    .from_tbl(Liquor::Table)
                    .from_col(Liquor::CollectionId)
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
                    .name(FK_LIQUOR_COLLECTION_ID)
                    .table(Liquor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIQUOR_COLLECTION_ID)
                    .table(Liquor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Liquor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Liquor {
    Table,
    Id,
    CollectionId,
    Category,
    StartingPrice,
    BrandNames,
    CreatedAt,
    UpdatedAt,
}
