/*!
# Utilities

Provides the sequence containers used by the traversal algorithms:
- [`Stack`]: a LIFO container,
- [`Queue`]: a FIFO container backed by a ring buffer,
- [`Sequencer`]: an abstraction over both so that a traversal can pick its frontier order,

as well as small helper traits used by the generators.
*/

use num::{One, Zero};

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `Sequencer` stores the "to be visited" items during a traversal.
/// The implementation determines the traversal order:
///
/// - [`Queue`] -> FIFO -> **BFS**
/// - [`Stack`] -> LIFO -> **DFS**
pub trait Sequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the next item without removing it.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> Sequencer<T> for Queue<T> {
    fn init(item: T) -> Self {
        let mut queue = Queue::new();
        queue.enqueue(item);
        queue
    }
    fn push(&mut self, item: T) {
        self.enqueue(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.dequeue()
    }
    fn peek(&self) -> Option<&T> {
        Queue::peek(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> Sequencer<T> for Stack<T> {
    fn init(item: T) -> Self {
        let mut stack = Stack::new();
        stack.push(item);
        stack
    }
    fn push(&mut self, item: T) {
        Stack::push(self, item)
    }
    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }
    fn peek(&self) -> Option<&T> {
        Stack::peek(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<S: Sequencer<u32>>(mut seq: S) -> Vec<u32> {
        std::iter::from_fn(|| seq.pop()).collect()
    }

    #[test]
    fn sequencer_order() {
        let mut queue = <Queue<u32> as Sequencer<u32>>::init(1);
        let mut stack = <Stack<u32> as Sequencer<u32>>::init(1);
        for x in [2, 3] {
            Sequencer::push(&mut queue, x);
            Sequencer::push(&mut stack, x);
        }

        assert_eq!(Sequencer::peek(&queue), Some(&1));
        assert_eq!(Sequencer::peek(&stack), Some(&3));
        assert_eq!(queue.cardinality(), 3);
        assert_eq!(stack.cardinality(), 3);

        assert_eq!(drain(queue), vec![1, 2, 3]);
        assert_eq!(drain(stack), vec![3, 2, 1]);
    }

    #[test]
    fn probability() {
        assert!(0.0f64.is_valid_probility());
        assert!(0.5f64.is_valid_probility());
        assert!(1.0f64.is_valid_probility());
        assert!(!1.5f64.is_valid_probility());
        assert!(!(-0.1f64).is_valid_probility());
    }
}
