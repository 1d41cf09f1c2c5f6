use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutletBartender::Table)
                    .if_not_exists()
                    .col(pk_uuid(OutletBartender::Id))
                    .col(string(OutletBartender::Name))
                    .col(string_len(OutletBartender::ContactNumber, 10))
                    .col(timestamp(OutletBartender::CreatedAt))
                    .col(timestamp(OutletBartender::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutletBartender::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OutletBartender {
    Table,
    Id,
    Name,
    ContactNumber,
    CreatedAt,
    UpdatedAt,
}
