//! Command queue
//!
//! Arrival-ordered buffer between the console intake and the apply loop.
//! Every parse outcome is queued, success and error alike, so replies go
//! out in the same order the lines came in.

use alloc::collections::VecDeque;

use crate::command::ParseOutcome;

/// FIFO of parse outcomes. Unbounded; backed by the firmware heap.
#[derive(Debug, Default)]
pub struct CommandQueue {
    entries: VecDeque<ParseOutcome>,
}

impl CommandQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Append an outcome at the tail
    pub fn push(&mut self, outcome: ParseOutcome) {
        self.entries.push_back(outcome);
    }

    /// Remove and return the oldest outcome
    pub fn pop(&mut self) -> Option<ParseOutcome> {
        self.entries.pop_front()
    }

    /// Number of queued outcomes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
