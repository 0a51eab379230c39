//! Sync freshness gating.
//!
//! The judge API is rate-limited, so a resync for a student is only
//! permitted once the previous successful sync has aged past a cooldown.
//! Freshness is recomputed from the caller's clock on every evaluation;
//! there is no background timer and no cached state. The external sync
//! workflow must consult the gate before every attempt (including
//! programmatic ones) and update `last_synced_at` only on success.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Minimum age of the last successful sync before another attempt is
/// permitted, in seconds.
pub const SYNC_COOLDOWN_SECS: i64 = 600;

/// Freshness state of a student's judge data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncFreshness {
    /// Synced within the cooldown; another sync is blocked.
    Fresh,
    /// Never synced, or the cooldown has elapsed; sync is permitted.
    Stale,
}

impl SyncFreshness {
    /// Evaluate freshness at `now`.
    ///
    /// `None` (never synced) is always stale. Data is fresh while
    /// `now - last_synced_at < cooldown`, strictly; at exactly the
    /// cooldown the state flips to stale.
    pub fn evaluate(
        last_synced_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        cooldown: Duration,
    ) -> Self {
        match last_synced_at {
            Some(last) if now.signed_duration_since(last) < cooldown => SyncFreshness::Fresh,
            _ => SyncFreshness::Stale,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncFreshness::Fresh => "fresh",
            SyncFreshness::Stale => "stale",
        }
    }
}

/// Whether a resync may be issued right now.
pub fn is_sync_allowed(
    last_synced_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    cooldown: Duration,
) -> bool {
    SyncFreshness::evaluate(last_synced_at, now, cooldown) == SyncFreshness::Stale
}

/// The fixed default cooldown.
pub fn default_cooldown() -> Duration {
    Duration::seconds(SYNC_COOLDOWN_SECS)
}
