use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261018_000006_outlet_timing::OutletTiming;

static IDX_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID: &str = "idx-outlet_timing_slot-outlet_timing_id";
static IDX_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID_DAY: &str =
    "idx-outlet_timing_slot-outlet_timing_id-day";
static FK_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID: &str = "fk-outlet_timing_slot-outlet_timing_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OutletTimingSlot::Table)
                    .if_not_exists()
                    .col(pk_uuid(OutletTimingSlot::Id))
                    .col(uuid(OutletTimingSlot::OutletTimingId))
                    .col(string_len(OutletTimingSlot::Day, 16))
                    .col(time(OutletTimingSlot::OpeningTime))
                    .col(time(OutletTimingSlot::ClosingTime))
                    .col(timestamp(OutletTimingSlot::CreatedAt))
                    .col(timestamp(OutletTimingSlot::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID)
                    .table(OutletTimingSlot::Table)
                    .col(OutletTimingSlot::OutletTimingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID_DAY)
                    .table(OutletTimingSlot::Table)
                    .col(OutletTimingSlot::OutletTimingId)
                    .col(OutletTimingSlot::Day)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID)
                    .from_tbl(OutletTimingSlot::Table)
                    .from_col(OutletTimingSlot::OutletTimingId)
                    .to_tbl(OutletTiming::Table)
                    .to_col(OutletTiming::Id)
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
                    .name(FK_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID)
                    .table(OutletTimingSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID)
                    .table(OutletTimingSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OUTLET_TIMING_SLOT_OUTLET_TIMING_ID_DAY)
                    .table(OutletTimingSlot::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OutletTimingSlot::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OutletTimingSlot {
    Table,
    Id,
    OutletTimingId,
    Day,
    OpeningTime,
    ClosingTime,
    CreatedAt,
    UpdatedAt,
}
