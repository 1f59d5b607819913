//! Cancellable timer scheduling
//!
//! Single-threaded and deterministic: time is supplied by the host on every
//! call, never read from a wall clock. Pending transitions are explicit
//! entries with handles, so superseding one is a cancellation, not a race.

/// Handle to a pending timer entry. Never reused within a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    id: TimerId,
    deadline: f64,
    /// Reschedule interval for repeating entries
    period: Option<f64>,
    event: E,
}

/// Deterministic queue of scheduled events.
///
/// Entries fire in deadline order, ties broken by schedule order. A
/// cancelled entry never fires, even if its deadline has already passed.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
}

impl<E: Clone> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    fn insert(&mut self, deadline: f64, period: Option<f64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            period,
            event,
        });
        id
    }

    /// Schedule a one-shot event at `now + delay`.
    pub fn schedule(&mut self, now: f64, delay: f64, event: E) -> TimerId {
        self.insert(now + delay, None, event)
    }

    /// Schedule a repeating event, first firing at `now + period`.
    pub fn schedule_repeating(&mut self, now: f64, period: f64, event: E) -> TimerId {
        // A zero period would spin forever in poll
        let period = period.max(1e-6);
        self.insert(now + period, Some(period), event)
    }

    /// Remove a pending entry so it never fires.
    pub fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Whether an entry is still pending.
    pub fn pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Fire every entry due at or before `now`, in deadline order.
    ///
    /// Repeating entries fire once per elapsed period, so a sparse poll
    /// catches up on missed beats.
    pub fn poll(&mut self, now: f64) -> Vec<E> {
        let mut fired = Vec::new();
        loop {
            let due = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.deadline <= now)
                .min_by(|(_, a), (_, b)| {
                    a.deadline
                        .partial_cmp(&b.deadline)
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(a.id.0.cmp(&b.id.0))
                })
                .map(|(i, _)| i);
            let Some(idx) = due else { break };

            fired.push(self.entries[idx].event.clone());
            match self.entries[idx].period {
                Some(period) => self.entries[idx].deadline += period,
                None => {
                    self.entries.remove(idx);
                }
            }
        }
        fired
    }

    /// Teardown: drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
