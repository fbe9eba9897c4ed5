//! Bounded rolling log (drop-oldest FIFO)

use std::collections::VecDeque;

use debug_hud_types::DEFAULT_LOG_LINES;

use crate::message::StyledMessage;

/// Upper bound on storage reserved up front; larger logs grow on push
const PREALLOC_LIMIT: usize = 64;

/// Fixed-capacity FIFO of messages. The oldest entry is evicted first.
///
/// Invariant: `len() <= capacity()` at all times.
#[derive(Debug, Clone)]
pub struct RollingLog {
    entries: VecDeque<StyledMessage>,
    capacity: usize,
}

impl RollingLog {
    /// Create an empty log. A capacity of 0 falls back to the default line count.
    pub fn new(capacity: usize) -> Self {
        let capacity = effective_capacity(capacity);
        Self {
            entries: VecDeque::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a message, evicting the oldest entries until there is room.
    ///
    /// Returns the number of evicted entries.
    pub fn push(&mut self, message: StyledMessage) -> usize {
        let mut evicted = 0;
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        self.entries.push_back(message);
        evicted
    }

    /// Change the capacity, trimming the oldest entries if the log is now over it.
    ///
    /// Returns the number of evicted entries.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = effective_capacity(capacity);
        let excess = self.entries.len().saturating_sub(self.capacity);
        self.entries.drain(..excess);
        excess
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &StyledMessage> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn effective_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_LOG_LINES as usize
    } else {
        capacity
    }
}
