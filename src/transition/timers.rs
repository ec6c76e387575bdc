use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredTimer<T> {
    pub id: TimerId,
    pub owner: u64,
    pub due_at: Duration,
    pub payload: T,
}

#[derive(Debug, Clone)]
struct TimerEntry<T> {
    owner: u64,
    payload: T,
}

/// Scheduled callbacks on session time.
///
/// Entries are ordered by `(due_at, id)`, so timers due at the same instant
/// fire in scheduling order. Every entry carries an owner generation that
/// can be cancelled as a whole.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    next_id: u64,
    entries: BTreeMap<(Duration, TimerId), TimerEntry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: BTreeMap::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn schedule(&mut self, owner: u64, due_at: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries
            .insert((due_at, id), TimerEntry { owner, payload });
        id
    }

    /// Drops every pending timer scheduled by `owner`; returns how many.
    pub fn cancel_owner(&mut self, owner: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.owner != owner);
        before - self.entries.len()
    }

    pub fn pop_due(&mut self, now: Duration) -> Option<FiredTimer<T>> {
        let (&(due_at, id), _) = self.entries.first_key_value()?;
        if due_at > now {
            return None;
        }
        let entry = self.entries.remove(&(due_at, id))?;
        Some(FiredTimer {
            id,
            owner: entry.owner,
            due_at,
            payload: entry.payload,
        })
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(due_at, _)| *due_at)
    }

    pub fn pending_len(&self) -> usize {
        self.entries.len()
    }
}
