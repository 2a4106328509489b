//! Operation factory for creating persisted calculation records.
//!
//! Defaults always describe a correct calculation, so rows seeded by the factory look
//! like rows the service itself would have written.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test operations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::operation::OperationFactory;
///
/// let operation = OperationFactory::new(&db)
///     .x(5)
///     .y(0)
///     .n(4)
///     .result(0)
///     .build()
///     .await?;
/// ```
pub struct OperationFactory<'a> {
    db: &'a DatabaseConnection,
    x: i64,
    y: i64,
    n: i64,
    result: i64,
}

impl<'a> OperationFactory<'a> {
    /// Creates a new OperationFactory with default values.
    ///
    /// Defaults:
    /// - x: `10`
    /// - y: `id % 10`
    /// - n: `100 + id`
    /// - result: the largest k ≤ n with k mod 10 = y
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `OperationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id() as i64;
        let x = 10;
        let y = id % x;
        let n = 100 + id;

        let mut result = n - n % x + y;
        if result > n {
            result -= x;
        }

        Self {
            db,
            x,
            y,
            n,
            result,
        }
    }

    pub fn x(mut self, x: i64) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: i64) -> Self {
        self.y = y;
        self
    }

    pub fn n(mut self, n: i64) -> Self {
        self.n = n;
        self
    }

    /// Sets the stored result.
    ///
    /// The factory does not recompute the result when inputs are overridden, so set it
    /// explicitly whenever `x`, `y` or `n` change.
    pub fn result(mut self, result: i64) -> Self {
        self.result = result;
        self
    }

    /// Builds and inserts the operation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::operation::Model)` - Created operation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::operation::Model, DbErr> {
        entity::operation::ActiveModel {
            id: ActiveValue::NotSet,
            x: ActiveValue::Set(self.x),
            y: ActiveValue::Set(self.y),
            n: ActiveValue::Set(self.n),
            result: ActiveValue::Set(self.result),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an operation with default values.
///
/// Shorthand for `OperationFactory::new(db).build().await`.
pub async fn create_operation(db: &DatabaseConnection) -> Result<entity::operation::Model, DbErr> {
    OperationFactory::new(db).build().await
}
