use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutletLegalDocument::Table)
                    .if_not_exists()
                    .col(pk_uuid(OutletLegalDocument::Id))
                    .col(string_len(OutletLegalDocument::FssaiNumber, 14))
                    .col(text_null(OutletLegalDocument::FssaiUrl))
                    .col(string_len_null(OutletLegalDocument::PanCardNumber, 10))
                    .col(text_null(OutletLegalDocument::PanCardUrl))
                    .col(string_len(OutletLegalDocument::GstNumber, 15))
                    .col(text_null(OutletLegalDocument::OnShopLicenseUrl))
                    .col(text_null(OutletLegalDocument::OffShopLicenseUrl))
                    .col(string_len_null(OutletLegalDocument::BankAccountNumber, 30))
                    .col(string_len(OutletLegalDocument::BankAccountType, 16))
                    .col(string_len_null(OutletLegalDocument::BankIfscCode, 11))
                    .col(timestamp(OutletLegalDocument::CreatedAt))
                    .col(timestamp(OutletLegalDocument::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OutletLegalDocument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OutletLegalDocument {
    Table,
    Id,
    FssaiNumber,
    FssaiUrl,
    PanCardNumber,
    PanCardUrl,
    GstNumber,
    OnShopLicenseUrl,
    OffShopLicenseUrl,
    BankAccountNumber,
    BankAccountType,
    BankIfscCode,
    CreatedAt,
    UpdatedAt,
}
