//! Operation history storage.
//!
//! Defines the `OperationStore` port consumed by the service layer and its SeaORM
//! implementation, `OperationRepository`. The history is append-only: there are no
//! update or delete operations.

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    error::store::StoreError,
    model::operation::{CreateOperationParam, Operation},
};

/// Append-only store of calculation records.
///
/// `save` must be atomic per call and `find_all` must return whole records in
/// insertion order.
#[async_trait]
pub trait OperationStore: Send + Sync {
    /// Durably stores one operation and returns it with its assigned identifier.
    async fn save(&self, param: CreateOperationParam) -> Result<Operation, StoreError>;

    /// Returns every stored operation, oldest first.
    async fn find_all(&self) -> Result<Vec<Operation>, StoreError>;
}

/// Repository providing database operations for the operation history.
pub struct OperationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OperationRepository<'a> {
    /// Creates a new OperationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OperationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OperationStore for OperationRepository<'_> {
    /// Inserts a new operation row.
    ///
    /// A single INSERT, so the row is either fully written or not written at all.
    ///
    /// # Returns
    /// - `Ok(Operation)` - The stored operation with generated ID
    /// - `Err(StoreError)` - Database unreachable or insert rejected
    async fn save(&self, param: CreateOperationParam) -> Result<Operation, StoreError> {
        let entity = entity::operation::ActiveModel {
            x: ActiveValue::Set(param.x),
            y: ActiveValue::Set(param.y),
            n: ActiveValue::Set(param.n),
            result: ActiveValue::Set(param.result),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        tracing::debug!("Saved operation {}", entity.id);

        Ok(Operation::from_entity(entity))
    }

    /// Gets all operations ordered by ID, which is insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<Operation>)` - Every stored operation, possibly empty
    /// - `Err(StoreError)` - Database unreachable or query rejected
    async fn find_all(&self) -> Result<Vec<Operation>, StoreError> {
        let entities = entity::prelude::Operation::find()
            .order_by_asc(entity::operation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Operation::from_entity).collect())
    }
}
