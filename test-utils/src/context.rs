use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Database and seeded rows owned by a single test.
///
/// Each context opens its own `sqlite::memory:` database, so no two tests share rows.
pub struct TestContext {
    /// Connection to the in-memory database, opened on first use.
    pub db: Option<DatabaseConnection>,
    /// Rows inserted by `TestBuilder::with_seeded_operations`, oldest first.
    pub operations: Vec<entity::operation::Model>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            operations: Vec::new(),
        }
    }

    /// Returns the connection, opening the in-memory database if needed.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Runs each CREATE TABLE statement against the context database.
    ///
    /// Normally driven by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
