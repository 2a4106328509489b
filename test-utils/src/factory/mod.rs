//! Factory methods for creating test data.
//!
//! This module provides factory methods for seeding persisted operations with sensible
//! defaults, reducing boilerplate in tests that need history rows to already exist.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let operation = factory::create_operation(&db).await?;
//!
//!     // Create several rows in insertion order
//!     let operations = factory::helpers::create_operations(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let operation = factory::operation::OperationFactory::new(&db)
//!     .x(10)
//!     .y(5)
//!     .n(15)
//!     .result(15)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod operation;

pub use operation::create_operation;
