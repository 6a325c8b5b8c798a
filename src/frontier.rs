//! Open-set policies. [FifoFrontier] pops in insertion order; [PriorityFrontier] pops the
//! smallest priority first and, among equal priorities, the most recently pushed entry.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use grid_util::point::Point;
use num_traits::Zero;

pub trait Frontier<K> {
    fn push(&mut self, point: Point, priority: K);
    fn pop(&mut self) -> Option<Point>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Consumes the frontier, returning the remaining entries in the order they would have been
    /// popped. A point pushed several times appears several times.
    fn into_points(self) -> Vec<Point>;
}

/// First-in first-out queue, ignoring priorities.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Point>,
}

impl FifoFrontier {
    pub fn new() -> FifoFrontier {
        FifoFrontier::default()
    }
    pub fn push_back(&mut self, point: Point) {
        self.queue.push_back(point);
    }
}

impl<K> Frontier<K> for FifoFrontier {
    fn push(&mut self, point: Point, _priority: K) {
        self.push_back(point);
    }
    fn pop(&mut self) -> Option<Point> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
    fn into_points(self) -> Vec<Point> {
        self.queue.into()
    }
}

struct SmallestPriorityHolder<K> {
    priority: K,
    sequence: usize,
    point: Point,
}

impl<K: PartialEq> Eq for SmallestPriorityHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestPriorityHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestPriorityHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestPriorityHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // The heap is a max-heap: smallest priority is greatest, then the latest insertion.
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => self.sequence.cmp(&other.sequence),
            s => s,
        }
    }
}

/// Binary heap keyed by priority. Entries are never updated in place; improved priorities are
/// pushed as new entries and the stale ones are left for the search loop to skip.
pub struct PriorityFrontier<K> {
    heap: BinaryHeap<SmallestPriorityHolder<K>>,
    pushed: usize,
}

impl<K: Ord> Default for PriorityFrontier<K> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

impl<K: Ord + Zero> PriorityFrontier<K> {
    pub fn new() -> Self {
        PriorityFrontier::default()
    }
    /// A frontier holding only `start` at priority zero.
    pub fn starting_at(start: Point) -> Self {
        let mut frontier = PriorityFrontier::new();
        frontier.push(start, K::zero());
        frontier
    }
    /// The smallest priority currently queued.
    pub fn peek_priority(&self) -> Option<&K> {
        self.heap.peek().map(|h| &h.priority)
    }
}

impl<K: Ord> Frontier<K> for PriorityFrontier<K> {
    fn push(&mut self, point: Point, priority: K) {
        self.heap.push(SmallestPriorityHolder {
            priority,
            sequence: self.pushed,
            point,
        });
        self.pushed += 1;
    }
    fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|h| h.point)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
    fn into_points(self) -> Vec<Point> {
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        sorted.into_iter().map(|h| h.point).collect()
    }
}
