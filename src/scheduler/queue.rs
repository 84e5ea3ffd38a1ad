//! FIFO ready queue.

use std::collections::VecDeque;

/// First-in, first-out queue of ready processes, by input index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadyQueue {
    items: VecDeque<usize>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process at the tail.
    pub fn push(&mut self, index: usize) {
        self.items.push_back(index);
    }

    /// Removes the process at the head.
    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop_front()
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
