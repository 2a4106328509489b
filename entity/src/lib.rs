//! SeaORM entities for the solver database.

pub mod prelude;

pub mod operation;
