//! Calculate and list-results operations.
//!
//! `OperationService` validates input, runs the `Calculator`, and records the outcome
//! through an `OperationStore`. It keeps no state of its own between calls.

pub mod calculator;

use crate::server::{
    data::operation::OperationStore,
    error::operation::{FieldViolation, OperationError, StoreAction},
    model::operation::{CalculateParams, CreateOperationParam, Operation},
};

use self::calculator::Calculator;

/// Largest accepted value for `x`, `y` and `n`.
///
/// Keeps `n + y` far from `i64` overflow.
pub const MAX_INPUT: i64 = i32::MAX as i64;

pub struct OperationService<'a, S: OperationStore + ?Sized> {
    calculator: Calculator,
    store: &'a S,
}

impl<'a, S: OperationStore + ?Sized> OperationService<'a, S> {
    pub fn new(calculator: Calculator, store: &'a S) -> Self {
        Self { calculator, store }
    }

    /// Computes the maximum k for the given input and records it.
    ///
    /// Validation happens before anything else; invalid input never reaches the
    /// calculator or the store. A result is only returned once it has been saved.
    ///
    /// # Returns
    /// - `Ok(k)` - The computed and persisted result
    /// - `Err(OperationError::ValidationFailed)` - One violation per invalid field
    /// - `Err(OperationError::CalculationFailed)` - Zero modulus or no solution
    /// - `Err(OperationError::PersistenceFailed)` - The store rejected the record
    pub async fn calculate(&self, params: CalculateParams) -> Result<i64, OperationError> {
        let (x, y, n) = validate(params).map_err(OperationError::ValidationFailed)?;

        tracing::info!("Calculating max k for x={}, y={}, n={}", x, y, n);

        let result = self.calculator.max_k(x, y, n)?;

        let saved = self
            .store
            .save(CreateOperationParam { x, y, n, result })
            .await
            .map_err(|e| OperationError::persistence(StoreAction::Save, e))?;

        tracing::info!("Calculated max k {} (operation {})", saved.result, saved.id);

        Ok(saved.result)
    }

    /// Returns every recorded operation in insertion order.
    pub async fn list_results(&self) -> Result<Vec<Operation>, OperationError> {
        tracing::info!("Fetching all operation results");

        self.store
            .find_all()
            .await
            .map_err(|e| OperationError::persistence(StoreAction::FindAll, e))
    }
}

/// Checks presence and range of every field, then `y < x`.
///
/// Produces at most one violation per field. The `y < x` check only runs when both
/// values are otherwise valid and `x` is non-zero; a zero modulus is left to the
/// calculator to report.
fn validate(params: CalculateParams) -> Result<(i64, i64, i64), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let x = check_field("x", params.x, &mut violations);
    let y = check_field("y", params.y, &mut violations);
    let n = check_field("n", params.n, &mut violations);

    if let (Some(x), Some(y)) = (x, y) {
        if x > 0 && y >= x {
            violations.push(FieldViolation::new("y", "Y must be less than X"));
        }
    }

    match (x, y, n) {
        (Some(x), Some(y), Some(n)) if violations.is_empty() => Ok((x, y, n)),
        _ => Err(violations),
    }
}

fn check_field(
    field: &'static str,
    value: Option<i64>,
    violations: &mut Vec<FieldViolation>,
) -> Option<i64> {
    let label = field.to_uppercase();

    match value {
        None => {
            violations.push(FieldViolation::new(
                field,
                format!("{} must not be null", label),
            ));
            None
        }
        Some(value) if value < 0 => {
            violations.push(FieldViolation::new(
                field,
                format!("{} must be greater than -1", label),
            ));
            None
        }
        Some(value) if value > MAX_INPUT => {
            violations.push(FieldViolation::new(
                field,
                format!("{} exceeds the maximum allowed value {}", label, MAX_INPUT),
            ));
            None
        }
        Some(value) => Some(value),
    }
}
