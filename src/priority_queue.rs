//! Min-priority queue backed by any [`OrderedSet`].

use crate::binary_tree::{Dump, Order};
use crate::bst::BstSet;
use crate::ordered_set::OrderedSet;
use std::mem;

/// A queue that always dequeues its smallest value first.
///
/// Values are stored in an ordered set, so enqueueing a value that is already waiting has no
/// effect.
///
/// # Examples
/// ```
/// use balanced_trees::priority_queue::PriorityQueue;
///
/// let mut queue: PriorityQueue = PriorityQueue::new();
/// queue.enqueue(5);
/// queue.enqueue(1);
/// queue.enqueue(3);
///
/// assert_eq!(queue.peek(), Some(1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(3));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct PriorityQueue<S = BstSet> {
    set: S,
}

impl<S> PriorityQueue<S>
where
    S: OrderedSet,
{
    /// Constructs a new, empty `PriorityQueue`.
    pub fn new() -> Self {
        PriorityQueue { set: S::default() }
    }

    pub fn enqueue(&mut self, value: i32) {
        let set = mem::take(&mut self.set);
        self.set = set.insert(value);
    }

    pub fn is_empty(&self) -> bool {
        self.set.root().is_none()
    }

    pub fn len(&self) -> usize {
        self.set.node_count()
    }

    /// Returns the smallest value without removing it.
    pub fn peek(&self) -> Option<i32> {
        if self.is_empty() {
            None
        } else {
            Some(self.set.min_value())
        }
    }

    /// Removes and returns the smallest value.
    pub fn dequeue(&mut self) -> Option<i32> {
        let value = self.peek()?;
        let set = mem::take(&mut self.set);
        self.set = set.remove(value);
        Some(value)
    }

    /// Returns the waiting values from the next to be dequeued to the last.
    pub fn iter(&self) -> Dump<'_, S::Node> {
        self.set.dump(Order::Ascending)
    }
}

impl<S> Default for PriorityQueue<S>
where
    S: OrderedSet,
{
    fn default() -> Self {
        Self::new()
    }
}
