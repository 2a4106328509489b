//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Validation**: Rejecting input before any computation or storage happens
//! - **Business Logic**: The max-k calculation itself
//! - **Orchestration**: Coordinating the calculator and the operation store
//! - **Classification**: Turning every failure into a typed `OperationError`

pub mod operation;
