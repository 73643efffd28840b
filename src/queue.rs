//! Capability traits for code that should not care which deque it is handed.
//!
//! [`Queue`] is the first-in first-out subset: push at the back, take from the front.
//! [`Deque`] adds the other two ends. Both are implemented for [`ShiftDeque`] and for the
//! standard library's [`VecDeque`].

use std::collections::VecDeque;

use crate::ShiftDeque;

/// A first-in first-out queue.
///
/// # Examples
///
/// ```
/// use shiftdeque::{Queue, ShiftDeque};
///
/// fn drain_all<Q: Queue<u32>>(queue: &mut Q) -> Vec<u32> {
///     let mut out = Vec::new();
///     while let Some(value) = queue.pop_front() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut deque = ShiftDeque::new();
/// deque.push_back(1);
/// deque.push_back(2);
/// assert_eq!(drain_all(&mut deque), [1, 2]);
/// ```
pub trait Queue<T> {
    /// Appends an element to the back.
    fn push_back(&mut self, value: T);
    /// Removes and returns the element at the front, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;
    /// Returns the number of elements.
    fn len(&self) -> usize;
    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A double-ended queue: a [`Queue`] that can also insert at the front and remove at the back.
pub trait Deque<T>: Queue<T> {
    /// Prepends an element to the front.
    fn push_front(&mut self, value: T);
    /// Removes and returns the element at the back, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;
}

impl<T> Queue<T> for ShiftDeque<T> {
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Deque<T> for ShiftDeque<T> {
    fn push_front(&mut self, value: T) {
        self.push_front(value);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
}

impl<T> Queue<T> for VecDeque<T> {
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Deque<T> for VecDeque<T> {
    fn push_front(&mut self, value: T) {
        self.push_front(value);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
}
