use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InfinityPass::Table)
                    .if_not_exists()
                    .col(pk_uuid(InfinityPass::Id))
                    .col(time(InfinityPass::StartTime))
                    .col(time(InfinityPass::EndTime))
                    .col(json_binary(InfinityPass::Days))
                    .col(integer(InfinityPass::Price))
                    .col(integer(InfinityPass::Commission).default(300))
                    .col(string_null(InfinityPass::Cuisine))
                    .col(string_null(InfinityPass::LiquorType))
                    .col(string_null(InfinityPass::SpecialOffer))
                    .col(timestamp(InfinityPass::CreatedAt))
                    .col(timestamp(InfinityPass::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InfinityPass::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InfinityPass {
    Table,
    Id,
    StartTime,
    EndTime,
    Days,
    Price,
    Commission,
    Cuisine,
    LiquorType,
    SpecialOffer,
    CreatedAt,
    UpdatedAt,
}
