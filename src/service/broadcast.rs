//! Periodic fan-out of content to every subscribed guild.
//!
//! A `Broadcaster` owns one registry kind. Each cycle takes a snapshot of its registry,
//! resolves content for every entry independently and hands it to the delivery sink.
//! Failures stay local to their entry: absent content skips the entry, a delivery error
//! is logged and counted, and the sweep carries on with the next guild.
//!
//! Cycles of one broadcaster never overlap. A timer fire that arrives while the previous
//! cycle is still sweeping is dropped and counted as skipped, so a slow upstream API
//! cannot pile up concurrent fetches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::data::subscription::SubscriptionRegistry;
use crate::model::registry::RegistryKind;
use crate::service::{
    delivery::DeliverySink,
    provider::{fetch_for, ContentProvider},
    stats::BotStats,
};

/// Per-cycle tally of entry outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub delivered: usize,
    pub absent: usize,
    pub failed: usize,
}

/// Result of asking a broadcaster to run a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The full sweep ran; individual entries may still have failed.
    Completed(CycleReport),
    /// Another cycle was already running, nothing was done.
    Skipped,
}

pub struct Broadcaster {
    kind: RegistryKind,
    interval: Duration,
    registry: Arc<SubscriptionRegistry>,
    provider: Arc<dyn ContentProvider>,
    sink: Arc<dyn DeliverySink>,
    stats: BotStats,
    running: AtomicBool,
}

impl Broadcaster {
    /// Creates a new Broadcaster instance.
    ///
    /// # Arguments
    /// - `kind` - Registry kind, used for logging and stats
    /// - `interval` - Fixed time between timer fires
    /// - `registry` - Subscriptions to sweep
    /// - `provider` - Content source for every entry
    /// - `sink` - Delivery target for resolved content
    /// - `stats` - Observability hook receiving cycle outcomes
    pub fn new(
        kind: RegistryKind,
        interval: Duration,
        registry: Arc<SubscriptionRegistry>,
        provider: Arc<dyn ContentProvider>,
        sink: Arc<dyn DeliverySink>,
        stats: BotStats,
    ) -> Self {
        Self {
            kind,
            interval,
            registry,
            provider,
            sink,
            stats,
            running: AtomicBool::new(false),
        }
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True while a cycle is sweeping the registry.
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Runs one full sweep over a snapshot of the registry, unless one is already running.
    ///
    /// # Returns
    /// - `CycleOutcome::Completed` - Sweep finished, with per-entry tallies
    /// - `CycleOutcome::Skipped` - A previous cycle still holds the guard
    pub async fn run_cycle(&self) -> CycleOutcome {
        let Some(_guard) = CycleGuard::acquire(&self.running) else {
            tracing::warn!(
                "Skipping {} broadcast: previous cycle is still running",
                self.kind
            );
            self.stats.record_skipped_cycle(self.kind).await;
            return CycleOutcome::Skipped;
        };

        let entries = self.registry.all().await;
        let mut report = CycleReport::default();

        for entry in entries {
            let Some(content) = fetch_for(self.provider.as_ref(), entry.payload.as_ref()).await
            else {
                tracing::debug!(
                    "No {} content for guild {}, skipping this cycle",
                    self.kind,
                    entry.guild_id
                );
                report.absent += 1;
                continue;
            };

            match self.sink.deliver(&entry.channel_id, &content).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to deliver {} to channel {} (guild {}): {}",
                        self.kind,
                        entry.channel_id,
                        entry.guild_id,
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            "{} broadcast finished: {} delivered, {} without content, {} failed",
            self.kind,
            report.delivered,
            report.absent,
            report.failed
        );
        self.stats
            .record_cycle(
                self.kind,
                report.delivered as u64,
                report.absent as u64,
                report.failed as u64,
            )
            .await;

        CycleOutcome::Completed(report)
    }
}

/// Single-flight guard: held for the duration of a cycle, released on drop.
///
/// Dropping also happens while unwinding, so a panicking cycle does not leave the
/// broadcaster stuck in the running state.
struct CycleGuard<'a> {
    running: &'a AtomicBool,
}

impl<'a> CycleGuard<'a> {
    fn acquire(running: &'a AtomicBool) -> Option<Self> {
        running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { running })
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}
