use std::fmt::{Debug, Display};

use itertools::Itertools;

/// A LIFO container. Items are pushed to and popped from the top.
///
/// Popping or peeking an empty stack returns `None`.
///
/// # Examples
/// ```
/// use lgraphs::utils::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(3);
/// stack.push(5);
///
/// assert_eq!(stack.peek(), Some(&5));
/// assert_eq!(stack.pop(), Some(5));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack with space for at least `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts `item` on top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns *true* if no items are on the stack
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates from the bottom to the top of the stack
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the items from bottom to top
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the stack and returns its items from bottom to top
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes all items in iteration order, i.e. the last item ends up on top
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Bottom to top
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Prints `[bottom, ..., top]`
impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}

impl<T: Debug> Debug for Stack<T> {
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
    fn lifo_order() {
        let mut stack: Stack<&str> = ["Apple", "Banana", "Orange"].into_iter().collect();
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.to_string(), "[Apple, Banana, Orange]");

        assert_eq!(stack.pop(), Some("Orange"));
        assert_eq!(stack.peek(), Some(&"Banana"));
        assert_eq!(stack.len(), 2);
        assert!(!stack.is_empty());

        assert_eq!(stack.pop(), Some("Banana"));
        assert_eq!(stack.pop(), Some("Apple"));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn random_round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let len = rng.random_range(0..100);
            let items: Vec<u32> = (0..len).map(|_| rng.random()).collect();

            let mut stack = Stack::new();
            for &x in &items {
                stack.push(x);
            }
            assert_eq!(stack.len(), items.len());
            assert_eq!(stack.as_slice(), items.as_slice());

            let popped: Vec<u32> = std::iter::from_fn(|| stack.pop()).collect();
            assert!(stack.is_empty());
            assert!(popped.into_iter().eq(items.into_iter().rev()));
        }
    }
}
