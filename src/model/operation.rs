use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/v1/operation`.
///
/// Fields are optional on the wire so that a missing value is reported as a field
/// violation instead of an unreadable body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OperationRequestDto {
    /// Modulus, must be at least 1.
    #[schema(minimum = 0, maximum = 2147483647)]
    pub x: Option<i64>,
    /// Target remainder, must be below `x`.
    #[schema(minimum = 0, maximum = 2147483647)]
    pub y: Option<i64>,
    /// Inclusive upper bound for k.
    #[schema(minimum = 0, maximum = 2147483647)]
    pub n: Option<i64>,
}

/// Payload of a successful calculation. Inputs are intentionally not echoed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OperationResultDto {
    pub result: i64,
}

/// One persisted calculation as listed by `GET /api/v1/operation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OperationDto {
    pub id: i32,
    pub x: i64,
    pub y: i64,
    pub n: i64,
    pub result: i64,
}
