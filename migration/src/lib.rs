pub use sea_orm_migration::prelude::*;

mod m20261018_000001_owner;
mod m20261018_000002_outlet_details;
mod m20261018_000003_outlet_legal_document;
mod m20261018_000004_outlet_manager;
mod m20261018_000005_outlet_bartender;
mod m20261018_000006_outlet_timing;
mod m20261018_000007_outlet_timing_slot;
mod m20261018_000008_infinity_pass;
mod m20261018_000009_outlet;
mod m20261018_000010_collection;
mod m20261018_000011_liquor;
mod m20261018_000012_outlet_collection;
mod m20261018_000013_users;
mod m20261018_000014_ticket;
mod m20261018_000015_ticket_item;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_owner::Migration),
            Box::new(m20261018_000002_outlet_details::Migration),
            Box::new(m20261018_000003_outlet_legal_document::Migration),
            Box::new(m20261018_000004_outlet_manager::Migration),
            Box::new(m20261018_000005_outlet_bartender::Migration),
            Box::new(m20261018_000006_outlet_timing::Migration),
            Box::new(m20261018_000007_outlet_timing_slot::Migration),
            Box::new(m20261018_000008_infinity_pass::Migration),
            Box::new(m20261018_000009_outlet::Migration),
            Box::new(m20261018_000010_collection::Migration),
            Box::new(m20261018_000011_liquor::Migration),
            Box::new(m20261018_000012_outlet_collection::Migration),
            Box::new(m20261018_000013_users::Migration),
            Box::new(m20261018_000014_ticket::Migration),
            Box::new(m20261018_000015_ticket_item::Migration),
        ]
    }
}
