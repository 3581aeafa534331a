use super::*;

/// Tests loading a registry whose file does not exist.
///
/// Verifies that a missing file is treated as an empty registry rather than an error,
/// and that loading alone does not create the file.
///
/// Expected: Ok with zero entries
#[tokio::test]
async fn missing_file_yields_empty_registry() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();

    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;

    assert_eq!(registry.len().await, 0);
    assert!(registry.all().await.is_empty());
    assert!(!test.exists(FILE));

    Ok(())
}

/// Tests loading the bare string form written for entries without a payload.
///
/// Expected: Ok with one random-content entry per guild
#[tokio::test]
async fn loads_string_valued_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_file(FILE, json!({ "111": "222", "333": "444" }))
        .build()
        .unwrap();

    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;

    assert_eq!(
        registry.all().await,
        vec![
            SubscriptionEntry::new("111", "222"),
            SubscriptionEntry::new("333", "444"),
        ]
    );

    Ok(())
}

/// Tests loading the object form carrying a fixed payload.
///
/// Expected: Ok with the payload attached to the entry
#[tokio::test]
async fn loads_object_entries_with_payload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_file(
            FILE,
            json!({
                "111": { "channelId": "222", "payload": { "referenceOrName": "Psalm 23:1" } },
                "333": "444"
            }),
        )
        .build()
        .unwrap();

    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;

    let entry = registry.get("111").await.unwrap();
    assert_eq!(entry.channel_id, "222");
    assert_eq!(entry.payload, Some(Payload::new("Psalm 23:1")));
    assert_eq!(registry.get("333").await.unwrap().payload, None);

    Ok(())
}

/// Tests that a file containing invalid JSON is rejected with a diagnostic naming it.
///
/// Expected: Err(RegistryError::Corrupt) carrying the file path
#[tokio::test]
async fn rejects_corrupt_file() {
    let test = TestBuilder::new()
        .with_raw_file(FILE, "{ \"111\": \"222\",")
        .build()
        .unwrap();

    let result = SubscriptionRegistry::load(test.path(FILE)).await;

    match result {
        Err(RegistryError::Corrupt { path, .. }) => assert_eq!(path, test.path(FILE)),
        Err(other) => panic!("expected Corrupt, got {other}"),
        Ok(_) => panic!("expected Corrupt, got a registry"),
    }
}

/// Tests that valid JSON of the wrong shape is also treated as corrupt.
///
/// Expected: Err(RegistryError::Corrupt)
#[tokio::test]
async fn rejects_non_object_json() {
    let test = TestBuilder::new()
        .with_registry_file(FILE, json!(["111", "222"]))
        .build()
        .unwrap();

    let result = SubscriptionRegistry::load(test.path(FILE)).await;

    assert!(matches!(result, Err(RegistryError::Corrupt { .. })));
}

/// Tests that an entry whose value is neither a string nor a subscription object is
/// rejected instead of silently dropped.
///
/// Expected: Err(RegistryError::Corrupt)
#[tokio::test]
async fn rejects_unrecognised_entry_value() {
    let test = TestBuilder::new()
        .with_registry_file(FILE, json!({ "111": 222 }))
        .build()
        .unwrap();

    let result = SubscriptionRegistry::load(test.path(FILE)).await;

    assert!(matches!(result, Err(RegistryError::Corrupt { .. })));
}

/// Tests that a whitespace-only file is treated like a missing one.
///
/// Expected: Ok with zero entries
#[tokio::test]
async fn blank_file_yields_empty_registry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_raw_file(FILE, "  \n").build().unwrap();

    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;

    assert_eq!(registry.len().await, 0);

    Ok(())
}
