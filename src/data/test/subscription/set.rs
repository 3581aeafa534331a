use super::*;

/// Tests that setting an entry on an empty registry survives a reload.
///
/// Simulates a process restart by loading a second registry from the same file.
///
/// Expected: reloaded registry is exactly {"g1": "c9"}
#[tokio::test]
async fn persists_entry_across_reload() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();

    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;
    registry.set(SubscriptionEntry::new("g1", "c9")).await?;
    drop(registry);

    let reloaded = SubscriptionRegistry::load(test.path(FILE)).await?;
    assert_eq!(reloaded.all().await, vec![SubscriptionEntry::new("g1", "c9")]);
    assert_eq!(test.read_json(FILE).unwrap(), json!({ "g1": "c9" }));

    Ok(())
}

/// Tests that setting the same guild twice keeps only the last channel.
///
/// Expected: one entry, pointing at the second channel, both in memory and on disk
#[tokio::test]
async fn last_write_wins() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;

    registry.set(SubscriptionEntry::new("g", "c1")).await?;
    registry.set(SubscriptionEntry::new("g", "c2")).await?;

    assert_eq!(registry.all().await, vec![SubscriptionEntry::new("g", "c2")]);
    assert_eq!(test.read_json(FILE).unwrap(), json!({ "g": "c2" }));

    Ok(())
}

/// Tests that a mixed registry written to disk reloads into an identical mapping.
///
/// Expected: reloaded snapshot equals the snapshot before the reload
#[tokio::test]
async fn round_trips_mixed_entries() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;

    registry.set(SubscriptionEntry::new("10", "20")).await?;
    registry
        .set(SubscriptionEntry::new("30", "40").with_payload(Payload::new("John 3:16")))
        .await?;
    let before = registry.all().await;

    let reloaded = SubscriptionRegistry::load(test.path(FILE)).await?;

    assert_eq!(reloaded.all().await, before);
    assert_eq!(
        test.read_json(FILE).unwrap(),
        json!({
            "10": "20",
            "30": { "channelId": "40", "payload": { "referenceOrName": "John 3:16" } }
        })
    );

    Ok(())
}

/// Tests that the data directory is created on the first write.
///
/// Expected: file exists under the previously missing directory
#[tokio::test]
async fn creates_missing_data_directory() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let path = test.data_dir().join("nested").join(FILE);

    let registry = SubscriptionRegistry::load(&path).await?;
    registry.set(SubscriptionEntry::new("1", "2")).await?;

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    Ok(())
}

/// Tests that a failed write is reported and leaves the in-memory mapping untouched.
///
/// The registry directory is replaced by a plain file after loading, so the write
/// cannot create it.
///
/// Expected: Err(RegistryError::Io) and the previous entry still in place
#[tokio::test]
async fn failed_write_is_reported_and_rolled_back() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let path = test.data_dir().join("store").join(FILE);

    let registry = SubscriptionRegistry::load(&path).await?;
    registry.set(SubscriptionEntry::new("g", "c1")).await?;

    std::fs::remove_dir_all(test.data_dir().join("store")).unwrap();
    test.write_raw("store", "not a directory").unwrap();

    let overwrite = registry.set(SubscriptionEntry::new("g", "c2")).await;
    let insert = registry.set(SubscriptionEntry::new("h", "c3")).await;

    assert!(matches!(overwrite, Err(RegistryError::Io { .. })));
    assert!(matches!(insert, Err(RegistryError::Io { .. })));
    assert_eq!(registry.all().await, vec![SubscriptionEntry::new("g", "c1")]);

    Ok(())
}
