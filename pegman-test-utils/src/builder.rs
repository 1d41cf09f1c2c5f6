//! Declarative test builder.
//!
//! `TestBuilder` queues table creation and fixture insertion, then executes everything in
//! the final `build()` call.

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
    include_outlet_tables: bool,
    owners: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            include_outlet_tables: false,
            owners: Vec::new(),
        }
    }

    /// Add every table used by outlet onboarding, collections and infinity passes.
    ///
    /// Creates Owner, OutletDetails, OutletLegalDocument, OutletManager, OutletBartender,
    /// OutletTiming, OutletTimingSlot, InfinityPass, Outlet, Collection, Liquor and
    /// OutletCollection.
    pub fn with_outlet_tables(mut self) -> Self {
        self.include_outlet_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables. Useful for building a partial schema
    /// to exercise failure paths.
    ///
    /// ```no_run
    /// use pegman_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), pegman_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Owner)
    ///     .with_table(OutletDetails)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Insert an owner with the given mobile number during `build()`.
    pub fn with_owner(mut self, mobile_number: impl Into<String>) -> Self {
        self.owners.push(mobile_number.into());
        self
    }

    /// Build the test context.
    ///
    /// Creates the configured tables first, then inserts queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_outlet_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Owner),
                schema.create_table_from_entity(entity::prelude::OutletDetails),
                schema.create_table_from_entity(entity::prelude::OutletLegalDocument),
                schema.create_table_from_entity(entity::prelude::OutletManager),
                schema.create_table_from_entity(entity::prelude::OutletBartender),
                schema.create_table_from_entity(entity::prelude::OutletTiming),
                schema.create_table_from_entity(entity::prelude::OutletTimingSlot),
                schema.create_table_from_entity(entity::prelude::InfinityPass),
                schema.create_table_from_entity(entity::prelude::Outlet),
                schema.create_table_from_entity(entity::prelude::Collection),
                schema.create_table_from_entity(entity::prelude::Liquor),
                schema.create_table_from_entity(entity::prelude::OutletCollection),
            ]);
            all_indexes
                .extend(schema.create_index_from_entity(entity::prelude::OutletTimingSlot));
        }

        all_tables.extend(self.tables);
        all_indexes.extend(self.indexes);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(all_indexes).await?;

        for mobile_number in self.owners {
            setup.owner().insert_owner(&mobile_number).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
