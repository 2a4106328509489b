use super::*;

/// Tests saving a new operation.
///
/// Verifies that the repository inserts the row and returns the stored operation
/// with a generated ID and the same inputs and result.
///
/// Expected: Ok with operation stored
#[tokio::test]
async fn saves_operation() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_operation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OperationRepository::new(db);
    let operation = repo
        .save(CreateOperationParam {
            x: 7,
            y: 5,
            n: 12345,
            result: 12339,
        })
        .await?;

    assert!(operation.id > 0);
    assert_eq!(operation.x, 7);
    assert_eq!(operation.y, 5);
    assert_eq!(operation.n, 12345);
    assert_eq!(operation.result, 12339);

    // Verify row exists in database
    let row = entity::prelude::Operation::find_by_id(operation.id)
        .one(db)
        .await?
        .expect("saved row should exist");
    assert_eq!(row.result, 12339);

    Ok(())
}

/// Tests that each save appends a new row.
///
/// Verifies that saving identical inputs twice creates two distinct records
/// rather than updating the first one.
///
/// Expected: Ok with two rows and increasing IDs
#[tokio::test]
async fn appends_rows_for_identical_inputs() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_operation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OperationRepository::new(db);
    let param = CreateOperationParam {
        x: 10,
        y: 5,
        n: 15,
        result: 15,
    };

    let first = repo.save(param).await?;
    let second = repo.save(param).await?;

    assert!(first.id < second.id);

    let count = entity::prelude::Operation::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests saving when the operations table is missing.
///
/// Verifies that a rejected insert surfaces as a `StoreError::Database` instead
/// of panicking.
///
/// Expected: Err(StoreError::Database)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OperationRepository::new(db);
    let result = repo
        .save(CreateOperationParam {
            x: 5,
            y: 0,
            n: 4,
            result: 0,
        })
        .await;

    assert!(matches!(result, Err(StoreError::Database(_))));

    Ok(())
}
