use super::*;

/// Tests that a snapshot is unaffected by mutations made after it was taken.
///
/// Expected: snapshot still holds the original entry; a fresh snapshot sees the change
#[tokio::test]
async fn snapshot_is_isolated_from_later_sets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registry_file(FILE, json!({ "1": "10" }))
        .build()
        .unwrap();
    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;

    let snapshot = registry.all().await;
    registry.set(SubscriptionEntry::new("1", "11")).await?;
    registry.set(SubscriptionEntry::new("2", "20")).await?;

    assert_eq!(snapshot, vec![SubscriptionEntry::new("1", "10")]);
    assert_eq!(registry.all().await.len(), 2);

    Ok(())
}

/// Tests that snapshots are ordered by guild ID regardless of insertion order.
///
/// Expected: entries sorted ascending by guild ID
#[tokio::test]
async fn snapshot_is_ordered_by_guild_id() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let registry = SubscriptionRegistry::load(test.path(FILE)).await?;

    registry.set(SubscriptionEntry::new("guildB", "chan2")).await?;
    registry.set(SubscriptionEntry::new("guildA", "chan1")).await?;

    let guilds: Vec<String> = registry
        .all()
        .await
        .into_iter()
        .map(|entry| entry.guild_id)
        .collect();
    assert_eq!(guilds, vec!["guildA", "guildB"]);

    Ok(())
}
