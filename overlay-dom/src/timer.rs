use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    deadline: Instant,
}

/// One-shot timeouts driven by a host-supplied clock.
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_timeout(&mut self, now: Instant, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            deadline: now + delay,
        });
        id
    }

    /// Cancel a pending timeout. Returns false if it already fired or never existed.
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerId> {
        let mut due: Vec<Timer> = self
            .pending
            .iter()
            .copied()
            .filter(|t| t.deadline <= now)
            .collect();
        self.pending.retain(|t| t.deadline > now);
        due.sort_by_key(|t| (t.deadline, t.id));
        due.into_iter().map(|t| t.id).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
