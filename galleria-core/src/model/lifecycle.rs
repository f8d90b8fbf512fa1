//! src/model/lifecycle.rs
//! ============================================================================
//! # Lifecycle: retention arithmetic for the recycle bin
//!
//! ```text
//! Active --soft_delete--> Deleted --recover--> Active
//! Deleted --permanently_delete | purge_expired(30d)--> Purged (terminal)
//! ```
//!
//! Everything here is a pure function of a record and `now`. The transitions
//! themselves live on [`crate::model::library::Library`] because they have to
//! cascade into the quick access index.

use chrono::{DateTime, Duration, Utc};

use crate::model::file_record::FileRecord;

/// Days a soft-deleted record is retained before it becomes purge-eligible.
pub const RETENTION_DAYS: i64 = 30;

/// Lifecycle state of a record as observed at some instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Active,
    /// In the recycle bin, with the whole days left before purge.
    Deleted { days_remaining: i64 },
    /// Retention elapsed; the next purge pass removes it.
    Purged,
}

/// Whole days elapsed since `deleted_at`. A timestamp in the future counts as
/// zero days so the countdown never exceeds the retention window.
#[must_use]
pub fn days_passed(deleted_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    // num_days truncates; for non-negative spans that is floor
    (now - deleted_at).num_days().max(0)
}

/// Days left before purge, in `0..=RETENTION_DAYS`. Records that are not in
/// the recycle bin report the full window.
#[must_use]
pub fn days_remaining(deleted_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match deleted_at {
        Some(at) => (RETENTION_DAYS - days_passed(at, now)).max(0),
        None => RETENTION_DAYS,
    }
}

/// True once the retention window has fully elapsed.
#[must_use]
pub fn is_expired(record: &FileRecord, now: DateTime<Utc>) -> bool {
    record
        .deleted_at
        .is_some_and(|at| days_passed(at, now) >= RETENTION_DAYS)
}

#[must_use]
pub fn classify(record: &FileRecord, now: DateTime<Utc>) -> LifecycleState {
    match record.deleted_at {
        None => LifecycleState::Active,
        Some(_) if is_expired(record, now) => LifecycleState::Purged,
        Some(at) => LifecycleState::Deleted {
            days_remaining: days_remaining(Some(at), now),
        },
    }
}

/// Instant at which a record deleted at `deleted_at` becomes purge-eligible.
#[must_use]
pub fn purge_due_at(deleted_at: DateTime<Utc>) -> DateTime<Utc> {
    deleted_at + Duration::days(RETENTION_DAYS)
}
