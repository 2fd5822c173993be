use crate::search::{heuristics::HeuristicValue, states::StateKey};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Open list ordered by ascending f. A key may be pushed several times; the
/// caller discards stale entries when they are popped. Entries with equal f
/// come out in insertion order.
#[derive(Debug)]
pub struct OpenList {
    queue: PriorityQueue<(u64, StateKey), Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl Default for OpenList {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenList {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, key: StateKey, f: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push((sequence, key), Reverse((f, sequence)));
    }

    pub fn pop(&mut self) -> Option<(StateKey, HeuristicValue)> {
        self.queue
            .pop()
            .map(|((_, key), Reverse((f, _)))| (key, f))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
