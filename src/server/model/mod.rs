//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so neither entities nor DTOs leak
//! into the service layer.

pub mod operation;
