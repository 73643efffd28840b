use std::iter::FusedIterator;

use super::ShiftDeque;

/// An owning iterator over the elements of a `ShiftDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`ShiftDeque`] (provided by the
/// [`IntoIterator`] trait). Elements are yielded front to back, and `next_back` takes them
/// from the back, so the iterator is just the deque being drained from both ends.
///
/// [`into_iter`]: ShiftDeque::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    deque: ShiftDeque<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(deque: ShiftDeque<T>) -> Self {
        IntoIter { deque }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
