use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutletDetails::Table)
                    .if_not_exists()
                    .col(pk_uuid(OutletDetails::Id))
                    .col(string(OutletDetails::Name))
                    .col(text(OutletDetails::Address))
                    .col(string_len(OutletDetails::ContactNumber, 10))
                    .col(double(OutletDetails::Latitude))
                    .col(double(OutletDetails::Longitude))
                    .col(string_len(OutletDetails::Country, 100))
                    .col(string_len(OutletDetails::Pincode, 6))
                    .col(json_binary(OutletDetails::ImageUrls))
                    .col(timestamp(OutletDetails::CreatedAt))
                    .col(timestamp(OutletDetails::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutletDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OutletDetails {
    Table,
    Id,
    Name,
    Address,
    ContactNumber,
    Latitude,
    Longitude,
    Country,
    Pincode,
    ImageUrls,
    CreatedAt,
    UpdatedAt,
}
