use super::*;

/// Tests listing when nothing has been calculated.
///
/// Expected: 200 with an empty `data` array
#[tokio::test]
async fn returns_empty_list() {
    let test = TestBuilder::new()
        .with_operation_tables()
        .build()
        .await
        .unwrap();

    let (status, body) = send(app(&test), get_operations()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": true,
            "code_status": 200,
            "message": "OK",
            "data": []
        })
    );
}

/// Tests that listed operations follow calculation order.
///
/// Expected: 200 with both records, oldest first
#[tokio::test]
async fn returns_operations_in_insertion_order() {
    let test = TestBuilder::new()
        .with_operation_tables()
        .build()
        .await
        .unwrap();

    send(app(&test), post_json(r#"{"x":10,"y":5,"n":187}"#)).await;
    send(app(&test), post_json(r#"{"x":5,"y":0,"n":4}"#)).await;

    let (status, body) = send(app(&test), get_operations()).await;

    assert_eq!(status, StatusCode::OK);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["x"], 10);
    assert_eq!(data[0]["y"], 5);
    assert_eq!(data[0]["n"], 187);
    assert_eq!(data[0]["result"], 185);
    assert_eq!(data[1]["result"], 0);
    assert!(data[0]["id"].as_i64() < data[1]["id"].as_i64());
}

/// Tests listing rows seeded directly into the database.
///
/// Expected: 200 with the seeded row
#[tokio::test]
async fn returns_seeded_operations() {
    let test = TestBuilder::new()
        .with_operation_tables()
        .with_seeded_operations(2)
        .build()
        .await
        .unwrap();

    let (_, body) = send(app(&test), get_operations()).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    for (dto, row) in data.iter().zip(test.operations.iter()) {
        assert_eq!(dto["id"], row.id);
        assert_eq!(dto["result"], row.result);
    }
}

/// Tests a storage failure while listing.
///
/// Expected: 400 with error code 1008
#[tokio::test]
async fn returns_find_code_when_table_missing() {
    let test = TestBuilder::new().build().await.unwrap();

    let (status, body) = send(app(&test), get_operations()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], false);
    assert_eq!(
        body["message"],
        "Errors retrieving records from the database"
    );
    assert_eq!(body["data"]["code"], 1008);
}
