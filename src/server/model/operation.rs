//! Parameter and domain models for calculation operations.
//!
//! An operation moves through three shapes: unvalidated `CalculateParams` from the
//! request, a `CreateOperationParam` once the result is known, and the persisted
//! `Operation` returned by the store. The shapes are never merged back into one
//! mutable value.

use crate::model::operation::{OperationDto, OperationRequestDto};

/// Unvalidated calculation input as it reaches the service.
///
/// `None` means the field was missing or null in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculateParams {
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub n: Option<i64>,
}

impl CalculateParams {
    /// Converts the request DTO into service parameters.
    pub fn from_dto(dto: OperationRequestDto) -> Self {
        Self {
            x: dto.x,
            y: dto.y,
            n: dto.n,
        }
    }
}

/// Validated inputs together with the computed result, ready to be persisted.
///
/// Only built by the service after the calculation succeeded, so `result` is always set
/// and `x`, `y`, `n` are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOperationParam {
    pub x: i64,
    pub y: i64,
    pub n: i64,
    pub result: i64,
}

/// A persisted operation with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub id: i32,
    pub x: i64,
    pub y: i64,
    pub n: i64,
    pub result: i64,
}

impl Operation {
    /// Converts the operation to a DTO for API responses.
    pub fn into_dto(self) -> OperationDto {
        OperationDto {
            id: self.id,
            x: self.x,
            y: self.y,
            n: self.n,
            result: self.result,
        }
    }

    /// Converts an entity model to a domain operation.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::operation::Model) -> Self {
        Self {
            id: entity.id,
            x: entity.x,
            y: entity.y,
            n: entity.n,
            result: entity.result,
        }
    }
}
