use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::service::broadcast::{Broadcaster, CycleOutcome};

/// Starts the broadcast scheduler
///
/// Registers one repeated job per broadcaster, firing at the broadcaster's configured
/// interval. Each fire runs the cycle in its own task so a panic inside the cycle is
/// logged and the job keeps firing. A fire that lands while the previous cycle of the
/// same broadcaster is still running is skipped by the broadcaster itself.
///
/// # Arguments
/// - `broadcasters`: One broadcaster per subscription registry
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; call `shutdown` on it to stop the jobs
/// - `Err(AppError::SchedulerErr)` - A job could not be created or the scheduler failed to start
pub async fn start_scheduler(broadcasters: Vec<Arc<Broadcaster>>) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    for broadcaster in broadcasters {
        let interval = broadcaster.interval();
        let kind = broadcaster.kind();

        let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
            let broadcaster = broadcaster.clone();

            Box::pin(async move {
                run_guarded(broadcaster).await;
            })
        })?;

        scheduler.add(job).await?;

        tracing::info!("Scheduled {} broadcast every {:?}", kind, interval);
    }

    scheduler.start().await?;

    tracing::info!("Broadcast scheduler started");

    Ok(scheduler)
}

/// Runs one cycle on a separate task, containing any panic to that task.
async fn run_guarded(broadcaster: Arc<Broadcaster>) {
    let kind = broadcaster.kind();

    match tokio::spawn(async move { broadcaster.run_cycle().await }).await {
        Ok(CycleOutcome::Completed(_)) | Ok(CycleOutcome::Skipped) => {}
        Err(e) if e.is_panic() => {
            tracing::error!("{} broadcast cycle panicked: {}", kind, e);
        }
        Err(e) => {
            tracing::error!("{} broadcast cycle was cancelled: {}", kind, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::subscription::SubscriptionRegistry;
    use crate::error::delivery::DeliveryError;
    use crate::model::content::Content;
    use crate::model::registry::RegistryKind;
    use crate::model::subscription::SubscriptionEntry;
    use crate::service::delivery::DeliverySink;
    use crate::service::provider::ContentProvider;
    use crate::service::stats::BotStats;
    use serenity::async_trait;
    use std::time::Duration;
    use test_utils::builder::TestBuilder;

    struct PanickingProvider;

    #[async_trait]
    impl ContentProvider for PanickingProvider {
        fn name(&self) -> &'static str {
            "panicking"
        }

        async fn fetch_random(&self) -> Option<Content> {
            panic!("provider exploded");
        }

        async fn fetch_named(&self, _reference: &str) -> Option<Content> {
            panic!("provider exploded");
        }
    }

    struct NullSink;

    #[async_trait]
    impl DeliverySink for NullSink {
        async fn deliver(&self, _channel_id: &str, _content: &Content) -> Result<(), DeliveryError> {
            Ok(())
        }
    }

    /// Tests that a panicking cycle is contained and the broadcaster stays usable.
    ///
    /// Expected: run_guarded returns normally and the single-flight guard is released
    #[tokio::test]
    async fn contains_panic_inside_cycle() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_registry_file("verse_channels.json", serde_json::json!({ "1": "2" }))
            .build()
            .unwrap();
        let registry = SubscriptionRegistry::load(test.path("verse_channels.json")).await?;
        assert_eq!(registry.all().await, vec![SubscriptionEntry::new("1", "2")]);

        let broadcaster = Arc::new(Broadcaster::new(
            RegistryKind::Verse,
            Duration::from_secs(3600),
            Arc::new(registry),
            Arc::new(PanickingProvider),
            Arc::new(NullSink),
            BotStats::new(),
        ));

        run_guarded(broadcaster.clone()).await;

        assert!(!broadcaster.is_running());

        Ok(())
    }
}
