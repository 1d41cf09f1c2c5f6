use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(pk_uuid(Owner::Id))
                    .col(string_null(Owner::Name))
                    .col(string_len_null(Owner::Email, 320))
                    .col(string_len_uniq(Owner::MobileNumber, 10))
                    .col(string_len(Owner::IsdCode, 5))
                    .col(timestamp(Owner::CreatedAt))
                    .col(timestamp(Owner::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Owner {
    Table,
    Id,
    Name,
    Email,
    MobileNumber,
    IsdCode,
    CreatedAt,
    UpdatedAt,
}
