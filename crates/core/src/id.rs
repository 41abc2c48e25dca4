//! Sortable unique identifiers for new entities.
//!
//! Ids are ULIDs: a 48-bit millisecond timestamp followed by 80 random bits,
//! rendered as 26 Crockford base32 characters. Lexicographic order of the
//! strings matches creation order. Within one generator, ids are strictly
//! increasing even when two calls share the same millisecond (or the clock
//! steps backwards): the previous id's random part is incremented instead of
//! drawing fresh entropy.

use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use ulid::Ulid;

use crate::types::{DbId, Timestamp};

/// Source of ids for newly created rows.
///
/// Repositories take this as a parameter so tests can substitute a
/// deterministic sequence.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh id for a row created at `now`.
    fn new_id(&self, now: Timestamp) -> DbId;
}

/// Monotonic ULID generator.
#[derive(Debug)]
pub struct UlidGenerator {
    last: Mutex<Ulid>,
}

impl UlidGenerator {
    pub const fn new() -> Self {
        Self {
            last: Mutex::new(Ulid::nil()),
        }
    }

    /// Generate the next ULID for `now`, never repeating or going backwards.
    pub fn next_ulid(&self, now: Timestamp) -> Ulid {
        // A poisoned lock still holds a valid last id.
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());

        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let next = if now_ms > last.timestamp_ms() {
            Ulid::from_datetime(SystemTime::from(now))
        } else {
            match last.increment() {
                Some(incremented) => incremented,
                // Random part exhausted within this millisecond: move to the next one.
                None => Ulid::from_datetime(last.datetime() + Duration::from_millis(1)),
            }
        };

        *last = next;
        next
    }
}

impl Default for UlidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UlidGenerator {
    fn new_id(&self, now: Timestamp) -> DbId {
        self.next_ulid(now).to_string()
    }
}

static PROCESS_GENERATOR: UlidGenerator = UlidGenerator::new();

/// Generate an id from the process-wide generator.
pub fn new_id(now: Timestamp) -> DbId {
    PROCESS_GENERATOR.new_id(now)
}

/// The process-wide generator, for callers that want an `&dyn IdGenerator`.
pub fn process_generator() -> &'static UlidGenerator {
    &PROCESS_GENERATOR
}
