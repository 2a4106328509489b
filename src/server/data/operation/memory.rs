use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::server::{
    data::operation::OperationStore,
    error::store::StoreError,
    model::operation::{CreateOperationParam, Operation},
};

/// In-memory `OperationStore` for service tests.
///
/// Counts every call so tests can assert the store was never reached, and can be
/// switched into a failing mode to simulate an unavailable medium.
#[derive(Default)]
pub struct InMemoryOperationStore {
    records: RwLock<Vec<Operation>>,
    unavailable: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryOperationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `save` and `find_all` calls so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Stored records, bypassing the call counter.
    pub async fn records(&self) -> Vec<Operation> {
        self.records.read().await.clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl OperationStore for InMemoryOperationStore {
    async fn save(&self, param: CreateOperationParam) -> Result<Operation, StoreError> {
        self.check_available()?;

        let mut records = self.records.write().await;
        let operation = Operation {
            id: records.len() as i32 + 1,
            x: param.x,
            y: param.y,
            n: param.n,
            result: param.result,
        };
        records.push(operation.clone());

        Ok(operation)
    }

    async fn find_all(&self) -> Result<Vec<Operation>, StoreError> {
        self.check_available()?;

        Ok(self.records.read().await.clone())
    }
}
