use super::*;

/// Tests listing an empty store.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_sequence_for_empty_store() -> Result<(), OperationError> {
    let store = InMemoryOperationStore::new();
    let service = OperationService::new(Calculator, &store);

    let operations = service.list_results().await?;

    assert!(operations.is_empty());

    Ok(())
}

/// Tests that listed records match the calculations in order.
///
/// Expected: Ok with records in calculation order and increasing IDs
#[tokio::test]
async fn returns_records_in_insertion_order() -> Result<(), OperationError> {
    let store = InMemoryOperationStore::new();
    let service = OperationService::new(Calculator, &store);

    let first = service.calculate(params(7, 5, 12345)).await?;
    let second = service.calculate(params(2, 0, 999999999)).await?;

    let operations = service.list_results().await?;

    assert_eq!(operations.len(), 2);
    assert_eq!(operations[0].result, first);
    assert_eq!(operations[1].result, second);
    assert!(operations[0].id < operations[1].id);

    Ok(())
}

/// Tests that listing twice without a calculation in between is stable.
///
/// Expected: Ok with identical sequences
#[tokio::test]
async fn repeated_listing_is_identical() -> Result<(), OperationError> {
    let store = InMemoryOperationStore::new();
    let service = OperationService::new(Calculator, &store);

    service.calculate(params(10, 5, 187)).await?;

    let first = service.list_results().await?;
    let second = service.list_results().await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests listing pre-existing rows through the SQLite repository.
///
/// Expected: Ok with the seeded rows
#[tokio::test]
async fn lists_seeded_rows_from_repository() -> Result<(), OperationError> {
    let test = TestBuilder::new()
        .with_operation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::create_operation(db).await.unwrap();

    let repo = OperationRepository::new(db);
    let service = OperationService::new(Calculator, &repo);
    let operations = service.list_results().await?;

    assert_eq!(operations.len(), 1);
    assert_eq!(operations[0].id, seeded.id);
    assert_eq!(operations[0].result, seeded.result);

    Ok(())
}

/// Tests that a failing store is classified as a persistence failure.
///
/// Expected: Err(PersistenceFailed) for the list action
#[tokio::test]
async fn classifies_store_failure() {
    let store = InMemoryOperationStore::new();
    store.set_unavailable(true);
    let service = OperationService::new(Calculator, &store);

    let result = service.list_results().await;

    assert!(matches!(
        result,
        Err(OperationError::PersistenceFailed {
            action: StoreAction::FindAll,
            ..
        })
    ));
}
