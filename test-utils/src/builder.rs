use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, factory::helpers::create_operations};

/// Fluent setup for a test database.
///
/// Collects the tables to create and how many history rows to seed, then `build()`
/// opens a fresh in-memory SQLite database and applies both in that order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_operation_tables()
///     .with_seeded_operations(3)
///     .build()
///     .await?;
///
/// assert_eq!(test.operations.len(), 3);
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    seeded_operations: usize,
}

impl TestBuilder {
    /// Starts with no tables and no seeded rows.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            seeded_operations: 0,
        }
    }

    /// Queues a CREATE TABLE for the entity, rendered for SQLite.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues the `operations` history table.
    pub fn with_operation_tables(self) -> Self {
        self.with_table(Operation)
    }

    /// Inserts `count` factory-default operations once the tables exist.
    ///
    /// Requires the `operations` table; `build()` fails otherwise.
    pub fn with_seeded_operations(mut self, count: usize) -> Self {
        self.seeded_operations = count;
        self
    }

    /// Opens the database, creates the queued tables and seeds rows.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready, seeded rows in `operations`
    /// - `Err(TestError::Database)` - Connecting, creating a table or seeding failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        if self.seeded_operations > 0 {
            let db = context.database().await?.clone();
            context.operations = create_operations(&db, self.seeded_operations).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
