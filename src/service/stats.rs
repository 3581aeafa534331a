//! Runtime statistics for status reporting and broadcast observability.
//!
//! `BotStats` is the single place the rest of the bot reports to: command handling
//! records each invocation, broadcasters record every cycle outcome. Counters let an
//! operator notice a sustained upstream outage (absent content piling up) that would
//! otherwise be invisible, since individual failures never escalate.

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::model::registry::RegistryKind;

/// Number of command invocations kept in the command log.
pub const COMMAND_LOG_CAPACITY: usize = 20;

/// One command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLogEntry {
    pub command: String,
    pub user: String,
    pub time: DateTime<Utc>,
}

/// Per-registry broadcast counters since startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastCounters {
    pub cycles_completed: u64,
    pub cycles_skipped: u64,
    pub delivered: u64,
    pub absent: u64,
    pub failed: u64,
    pub last_cycle_at: Option<DateTime<Utc>>,
}

/// Point-in-time copy of all statistics.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub uptime: Duration,
    pub guild_count: usize,
    pub commands_used: u64,
    pub current_commands: Vec<String>,
    pub command_log: Vec<CommandLogEntry>,
    pub broadcasts: BTreeMap<RegistryKind, BroadcastCounters>,
}

/// Shared, cheaply clonable statistics handle.
#[derive(Clone)]
pub struct BotStats {
    inner: Arc<StatsInner>,
}

struct StatsInner {
    started_at: Instant,
    guild_count: AtomicUsize,
    commands_used: AtomicU64,
    current_commands: RwLock<Vec<String>>,
    command_log: RwLock<VecDeque<CommandLogEntry>>,
    broadcasts: RwLock<BTreeMap<RegistryKind, BroadcastCounters>>,
}

impl BotStats {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StatsInner {
                started_at: Instant::now(),
                guild_count: AtomicUsize::new(0),
                commands_used: AtomicU64::new(0),
                current_commands: RwLock::new(Vec::new()),
                command_log: RwLock::new(VecDeque::with_capacity(COMMAND_LOG_CAPACITY)),
                broadcasts: RwLock::new(BTreeMap::new()),
            }),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.inner.started_at.elapsed()
    }

    pub fn set_guild_count(&self, count: usize) {
        self.inner.guild_count.store(count, Ordering::Relaxed);
    }

    pub fn guild_count(&self) -> usize {
        self.inner.guild_count.load(Ordering::Relaxed)
    }

    /// Records the start of a command invocation.
    ///
    /// Increments the usage counter, marks the command as executing and appends it to the
    /// bounded command log, evicting the oldest entry when full.
    pub async fn command_started(&self, command: &str, user: &str) {
        self.inner.commands_used.fetch_add(1, Ordering::Relaxed);
        self.inner
            .current_commands
            .write()
            .await
            .push(command.to_string());

        let mut log = self.inner.command_log.write().await;
        if log.len() == COMMAND_LOG_CAPACITY {
            log.pop_front();
        }
        log.push_back(CommandLogEntry {
            command: command.to_string(),
            user: user.to_string(),
            time: Utc::now(),
        });
    }

    /// Records the end of a command invocation, whatever its result.
    pub async fn command_finished(&self, command: &str) {
        let mut current = self.inner.current_commands.write().await;
        if let Some(pos) = current.iter().position(|c| c == command) {
            current.remove(pos);
        }
    }

    /// Records a completed broadcast cycle.
    pub async fn record_cycle(&self, kind: RegistryKind, delivered: u64, absent: u64, failed: u64) {
        let mut broadcasts = self.inner.broadcasts.write().await;
        let counters = broadcasts.entry(kind).or_default();
        counters.cycles_completed += 1;
        counters.delivered += delivered;
        counters.absent += absent;
        counters.failed += failed;
        counters.last_cycle_at = Some(Utc::now());
    }

    /// Records a timer fire dropped because the previous cycle was still running.
    pub async fn record_skipped_cycle(&self, kind: RegistryKind) {
        let mut broadcasts = self.inner.broadcasts.write().await;
        broadcasts.entry(kind).or_default().cycles_skipped += 1;
    }

    pub async fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            uptime: self.uptime(),
            guild_count: self.guild_count(),
            commands_used: self.inner.commands_used.load(Ordering::Relaxed),
            current_commands: self.inner.current_commands.read().await.clone(),
            command_log: self.inner.command_log.read().await.iter().cloned().collect(),
            broadcasts: self.inner.broadcasts.read().await.clone(),
        }
    }
}

impl Default for BotStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a duration as `1d 2h 3m 4s`, omitting leading zero units.
pub fn format_uptime(duration: Duration) -> String {
    let total = duration.as_secs();
    let (days, hours, minutes, seconds) = (
        total / 86_400,
        (total % 86_400) / 3_600,
        (total % 3_600) / 60,
        total % 60,
    );

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
