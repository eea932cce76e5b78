use std::{cmp::Ordering, collections::BinaryHeap};

use ordered_float::OrderedFloat;

use crate::graph::NodeId;


/// Entry on the frontier
/// - `key` orders the queue (cost for Dijkstra, cost + heuristic for A*)
/// - `cost` is the distance from start when the entry was pushed, used to spot stale entries
/// - `seq` is the insertion counter, breaking ties first in first out
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub node: NodeId,
    pub cost: f64,
    pub key: OrderedFloat<f64>,
    seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max heap, reverse both fields to pop the smallest key
        // and the oldest entry among equal keys
        other.key.cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}
impl Eq for FrontierEntry {}


/// Min priority queue with lazy deletion
///
/// The same node may be pushed many times with different keys, there is no
/// decrease-key. Callers skip entries that are stale when popped.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, cost: f64, key: f64) {
        self.heap.push(FrontierEntry {
            node,
            cost,
            key: OrderedFloat(key),
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// Remove the entry with the smallest key, oldest first among ties
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
