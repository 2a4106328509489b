//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so that
//! entities never leave this layer. The service layer only sees the `OperationStore`
//! port, which the SeaORM repository and the in-memory test store both implement.

pub mod operation;

#[cfg(test)]
mod test;
