use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutletManager::Table)
                    .if_not_exists()
                    .col(pk_uuid(OutletManager::Id))
                    .col(string(OutletManager::Name))
                    .col(string_len(OutletManager::ContactNumber, 10))
                    .col(string_len_null(OutletManager::Email, 320))
                    .col(timestamp(OutletManager::CreatedAt))
                    .col(timestamp(OutletManager::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutletManager::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OutletManager {
    Table,
    Id,
    Name,
    ContactNumber,
    Email,
    CreatedAt,
    UpdatedAt,
}
