//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` default operations, returned in insertion order.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of rows to insert
///
/// # Returns
/// - `Ok(Vec<entity::operation::Model>)` - Inserted rows, oldest first
/// - `Err(DbErr)` - Database error during creation
pub async fn create_operations(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::operation::Model>, DbErr> {
    let mut operations = Vec::with_capacity(count);
    for _ in 0..count {
        operations.push(crate::factory::operation::create_operation(db).await?);
    }

    Ok(operations)
}
