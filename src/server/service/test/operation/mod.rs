use crate::server::{
    data::operation::{memory::InMemoryOperationStore, OperationRepository},
    error::{
        operation::{CalculationError, FieldViolation, OperationError, StoreAction},
        store::StoreError,
    },
    model::operation::CalculateParams,
    service::operation::{calculator::Calculator, OperationService, MAX_INPUT},
};
use test_utils::{builder::TestBuilder, factory};

mod list_results;

fn params(x: i64, y: i64, n: i64) -> CalculateParams {
    CalculateParams {
        x: Some(x),
        y: Some(y),
        n: Some(n),
    }
}
