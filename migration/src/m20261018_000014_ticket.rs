use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261018_000010_collection::Collection, m20261018_000013_users::Users};

static IDX_TICKET_USER_ID: &str = "idx-ticket-user_id";
static FK_TICKET_USER_ID: &str = "fk-ticket-user_id";
static FK_TICKET_COLLECTION_ID: &str = "fk-ticket-collection_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_uuid(Ticket::Id))
                    .col(uuid(Ticket::UserId))
                    .col(uuid(Ticket::CollectionId))
                    .col(boolean(Ticket::IsExpired).default(false))
                    .col(date(Ticket::BookingDate))
                    .col(timestamp(Ticket::CreatedAt))
                    .col(timestamp(Ticket::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_USER_ID)
                    .table(Ticket::Table)
                    .col(Ticket::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_USER_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_COLLECTION_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::CollectionId)
                    .to_tbl(Collection::Table)
                    .to_col(Collection::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_COLLECTION_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_USER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_USER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    UserId,
    CollectionId,
    IsExpired,
    BookingDate,
    CreatedAt,
    UpdatedAt,
}
