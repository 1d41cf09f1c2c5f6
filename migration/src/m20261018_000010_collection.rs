use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collection::Table)
                    .if_not_exists()
                    .col(pk_uuid(Collection::Id))
                    .col(string_len(Collection::Tier, 16))
                    .col(integer(Collection::PegsPerDay))
                    .col(string_null(Collection::LabelOne))
                    .col(string_null(Collection::LabelTwo))
                    .col(date(Collection::StartDate))
                    .col(date(Collection::EndDate))
                    .col(integer(Collection::BookingPrice))
                    .col(timestamp(Collection::CreatedAt))
                    .col(timestamp(Collection::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Collection {
    Table,
    Id,
    Tier,
    PegsPerDay,
    LabelOne,
    LabelTwo,
    StartDate,
    EndDate,
    BookingPrice,
    CreatedAt,
    UpdatedAt,
}
