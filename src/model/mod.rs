//! Wire models shared by the HTTP API.
//!
//! These DTOs are what the service reads from and writes to JSON. Server-side code
//! converts them into domain parameters at the controller boundary and never passes
//! them deeper.

pub mod api;
pub mod operation;
