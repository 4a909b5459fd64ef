use std::{
    collections::VecDeque,
    fmt::{Debug, Display},
};

use itertools::Itertools;

/// A FIFO container. Items are enqueued at the back and dequeued from the front.
///
/// Backed by a ring buffer, so both `enqueue` and `dequeue` run in amortized `O(1)`.
/// Dequeuing or peeking an empty queue returns `None`.
///
/// # Examples
/// ```
/// use lgraphs::utils::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(3);
/// queue.enqueue(5);
///
/// assert_eq!(queue.peek(), Some(&3));
/// assert_eq!(queue.dequeue(), Some(3));
/// assert_eq!(queue.dequeue(), Some(5));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with space for at least `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `item` to the back of the queue
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the front item
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns *true* if the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates from the front to the back of the queue
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueues all items in iteration order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    /// Front to back
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Prints `[front, ..., back]`
impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(3);
        queue.enqueue(5);
        queue.enqueue(7);
        assert_eq!(queue.to_string(), "[3, 5, 7]");

        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.to_string(), "[5, 7]");
        assert_eq!(queue.peek(), Some(&5));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.dequeue(), Some(5));
        assert_eq!(queue.dequeue(), Some(7));
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn interleaved_operations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let mut queue = Queue::new();
        let mut reference = VecDeque::new();

        for i in 0..1000u32 {
            if rng.random_bool(0.6) {
                queue.enqueue(i);
                reference.push_back(i);
            } else {
                assert_eq!(queue.dequeue(), reference.pop_front());
            }
            assert_eq!(queue.len(), reference.len());
            assert_eq!(queue.is_empty(), reference.is_empty());
            assert_eq!(queue.peek(), reference.front());
        }

        assert!(queue.into_iter().eq(reference));
    }
}
