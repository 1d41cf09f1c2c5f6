use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutletTiming::Table)
                    .if_not_exists()
                    .col(pk_uuid(OutletTiming::Id))
                    .col(string_len(OutletTiming::EstablishmentType, 32))
                    .col(boolean(OutletTiming::HotelStay).default(false))
                    .col(boolean(OutletTiming::EventSpace).default(false))
                    .col(timestamp(OutletTiming::CreatedAt))
                    .col(timestamp(OutletTiming::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutletTiming::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OutletTiming {
    Table,
    Id,
    EstablishmentType,
    HotelStay,
    EventSpace,
    CreatedAt,
    UpdatedAt,
}
