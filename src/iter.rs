use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// A front-to-back iterator over references to the elements of a `ShiftDeque`.
///
/// Created by [`ShiftDeque::iter`](crate::ShiftDeque::iter).
pub struct Iter<'a, T> {
    // only the occupied slots, every one of them is Some
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(slots: slice::Iter<'a, Option<T>>) -> Self {
        Self { slots }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { slots: self.slots.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&DebugSlots(self.slots.as_slice())).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.slots.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A front-to-back iterator over mutable references to the elements of a `ShiftDeque`.
///
/// Created by [`ShiftDeque::iter_mut`](crate::ShiftDeque::iter_mut).
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(slots: slice::IterMut<'a, Option<T>>) -> Self {
        Self { slots }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&DebugSlots(self.slots.as_slice())).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.slots.next()?.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.slots.next_back()?.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Formats the remaining slots as a list of elements, without the `Some` wrappers.
struct DebugSlots<'a, T>(&'a [Option<T>]);

impl<T: fmt::Debug> fmt::Debug for DebugSlots<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().flatten()).finish()
    }
}
