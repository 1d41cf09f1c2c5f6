use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261018_000014_ticket::Ticket;

static FK_TICKET_ITEM_TICKET_ID: &str = "fk-ticket_item-ticket_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketItem::Table)
                    .if_not_exists()
                    .col(pk_uuid(TicketItem::Id))
                    .col(uuid(TicketItem::TicketId))
                    .col(string_len(TicketItem::Category, 100))
                    .col(string(TicketItem::BrandNames))
                    .col(integer(TicketItem::Pegs))
                    .col(timestamp(TicketItem::CreatedAt))
                    .col(timestamp(TicketItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_ITEM_TICKET_ID)
                    .from_tbl(TicketItem::Table)
                    .from_col(TicketItem::TicketId)
                    .to_tbl(Ticket::Table)
                    .to_col(Ticket::Id)
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
                    .name(FK_TICKET_ITEM_TICKET_ID)
                    .table(TicketItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TicketItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TicketItem {
    Table,
    Id,
    TicketId,
    Category,
    BrandNames,
    Pegs,
    CreatedAt,
    UpdatedAt,
}
