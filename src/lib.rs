//! A double-ended queue over one growable buffer.
//!
//! `ShiftDeque` keeps its elements in a single `Vec` of slots and tracks the occupied range
//! with two cursors: `head` points at the first element and `tail` points one past the last.
//! Appending writes at `tail`, popping from either end moves a cursor inward and clears the
//! slot it leaves behind. Prepending writes just below `head`. When `head` has already
//! reached the start of the buffer, the whole occupied range is first moved forward by a
//! fixed [`INCREMENT`] of slots:
//!
//! ```text
//! push_front(9) with head == 0 and an increment of 4
//!
//! head            tail
//! |               |
//! v               v
//! +---+---+---+---+
//! | 0 | 1 | 2 | 3 |
//! +---+---+---+---+
//!
//!             head                tail
//!             |                   |
//!             v                   v
//! +---+---+---+---+---+---+---+---+
//! |   |   |   | 9 | 0 | 1 | 2 | 3 |
//! +---+---+---+---+---+---+---+---+
//! ```
//!
//! The step is a constant rather than a fraction of the length, so `push_front` costs *O(n)*
//! once every `INCREMENT` calls that find `head == 0`, and *O(1)* otherwise. The other
//! operations are *O(1)* (amortized for `push_back`, which may reallocate).
//!
//! Slots that a queue workload leaves behind `head` are reused: once `push_back` reaches the
//! end of the buffer and at least as many slots are vacated in front of the elements as
//! there are elements, the elements are moved down to the start instead of growing the
//! buffer. [`shrink_to_fit`] and [`clear`] release or reset the rest.
//!
//! Besides the concrete type the crate offers the [`Queue`] and [`Deque`] capability traits,
//! implemented for `ShiftDeque` and [`VecDeque`], and [`SharedDeque`], a deque behind a single
//! lock for use from several threads.
//!
//! [`INCREMENT`]: ShiftDeque::INCREMENT
//! [`shrink_to_fit`]: ShiftDeque::shrink_to_fit
//! [`clear`]: ShiftDeque::clear
//! [`VecDeque`]: std::collections::VecDeque

use core::cmp::{self, Ordering};
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use std::fmt;

#[macro_use]
mod macros;

mod error;
mod into_iter;
mod iter;
mod queue;
mod shared;

pub use error::EmptyAccess;
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};
pub use queue::{Deque, Queue};
pub use shared::SharedDeque;

#[cfg(test)]
mod tests;

/// A double-ended queue that makes room at the front by shifting its contents.
///
/// See the [module-level documentation](./index.html) for more details.
#[derive(Clone)]
pub struct ShiftDeque<T> {
    // Every slot in [head, tail) is Some, every other slot is None.
    // head == tail means the deque is empty.
    // 0 <= head <= tail <= buf.len()
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
    increment: usize,
}

impl<T> ShiftDeque<T> {
    /// Number of slots opened in front of the first element when [`push_front`] finds no room.
    ///
    /// [`push_front`]: ShiftDeque::push_front
    pub const INCREMENT: usize = 4;

    /// Creates an empty deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftdeque::ShiftDeque;
    ///
    /// let deque: ShiftDeque<i32> = ShiftDeque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty deque with space for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftdeque::ShiftDeque;
    ///
    /// let deque: ShiftDeque<i32> = ShiftDeque::with_capacity(10);
    /// assert!(deque.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity), head: 0, tail: 0, increment: Self::INCREMENT }
    }

    /// Creates an empty deque that opens `increment` slots at a time when [`push_front`] runs
    /// out of room.
    ///
    /// # Panics
    ///
    /// Panics if `increment` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftdeque::ShiftDeque;
    ///
    /// let mut deque = ShiftDeque::with_increment(16);
    /// deque.push_front(1);
    /// assert_eq!(deque.increment(), 16);
    /// assert_eq!(deque, [1]);
    /// ```
    ///
    /// [`push_front`]: ShiftDeque::push_front
    pub fn with_increment(increment: usize) -> Self {
        assert!(increment != 0, "increment must be greater than zero");
        Self { increment, ..Self::new() }
    }

    /// Returns the number of slots opened at a time by [`push_front`].
    ///
    /// [`push_front`]: ShiftDeque::push_front
    #[inline]
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Returns the number of slots the deque can hold without reallocating.
    ///
    /// The count includes slots vacated at the front by [`pop_front`]. Use [`shrink_to_fit`]
    /// to release them.
    ///
    /// [`pop_front`]: ShiftDeque::pop_front
    /// [`shrink_to_fit`]: ShiftDeque::shrink_to_fit
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let deque = ShiftDeque::from([1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.tail - self.head
    }

    /// Returns whether the deque is empty or not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::new();
    /// assert!(deque.is_empty());
    /// deque.push_back(42);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Provides a reference to the element at the given index.
    ///
    /// Element at index 0 is the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let deque = ShiftDeque::from([1, 2, 3]);
    /// assert_eq!(deque.get(1), Some(&2));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            self.buf[self.head + index].as_ref()
        } else {
            None
        }
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// Element at index 0 is the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::from([1, 2, 3]);
    /// *deque.get_mut(1).unwrap() += 40;
    /// assert_eq!(deque.get(1), Some(&42));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            self.buf[self.head + index].as_mut()
        } else {
            None
        }
    }

    /// Reserves capacity for at least `additional` more elements to be pushed to the back.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::from([1, 2, 3, 4]);
    /// deque.reserve(10);
    /// assert!(deque.capacity() >= 14);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        // slots past tail are always free, so only the part beyond buf.len() needs reserving
        let free = self.buf.len() - self.tail;
        self.buf.reserve(additional.saturating_sub(free));
    }

    /// Shrinks the capacity of the deque as much as possible.
    ///
    /// The elements are moved to the start of the buffer, dropping the empty slots in front of
    /// them, before the allocation is shrunk.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::with_capacity(16);
    /// deque.extend(0..8);
    /// deque.pop_front();
    /// deque.pop_front();
    /// deque.shrink_to_fit();
    /// assert!(deque.capacity() >= 6);
    /// assert_eq!(deque, [2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.shrink_to(0);
    }

    /// Shrinks the capacity of the deque with a lower bound.
    ///
    /// The capacity will remain at least as large as both the length and the supplied lower
    /// bound. The elements are always moved to the start of the buffer, even if the capacity
    /// does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::with_capacity(16);
    /// deque.extend(0..4);
    /// deque.shrink_to(7);
    /// assert!(deque.capacity() >= 7);
    /// deque.shrink_to(0);
    /// assert!(deque.capacity() >= 4);
    /// ```
    pub fn shrink_to(&mut self, min_capacity: usize) {
        let len = self.len();
        log::trace!(
            "compacting deque: head {} tail {} slots {} -> {}",
            self.head,
            self.tail,
            self.buf.len(),
            len
        );

        // everything outside [head, tail) is None, so dropping those slots drops no elements
        self.buf.drain(..self.head);
        self.buf.truncate(len);
        self.head = 0;
        self.tail = len;
        self.buf.shrink_to(cmp::max(min_capacity, len));
    }

    /// Shortens the deque, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater or equal to the deque's current length, this is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::from([1, 2, 3, 4]);
    /// deque.truncate(2);
    /// assert_eq!(deque, [1, 2]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len() {
            return;
        }

        let new_tail = self.head + len;
        // move tail first so no dropped slot is reachable if a destructor panics
        let old_tail = self.tail;
        self.tail = new_tail;
        for slot in &mut self.buf[new_tail..old_tail] {
            *slot = None;
        }
    }

    /// Clears the deque, removing all elements.
    ///
    /// The cursors are reset so that all slots are reused, but the allocation is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::new();
    /// deque.push_back(1);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
        self.head = 0;
        self.tail = 0;
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// This operation is *O(n)*.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::new();
    ///
    /// deque.push_back(0);
    /// deque.push_back(1);
    ///
    /// assert!(deque.contains(&1));
    /// assert!(!deque.contains(&4));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Provides a reference to the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::new();
    /// assert_eq!(deque.front(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the deque is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::new();
    /// assert_eq!(deque.back(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.buf[self.tail - 1].as_ref()
        }
    }

    /// Provides a mutable reference to the back element, or `None` if the deque is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            self.buf[self.tail - 1].as_mut()
        }
    }

    /// Removes the first element and returns it, or `None` if the deque is empty.
    ///
    /// An empty deque is left untouched. Otherwise the vacated slot is cleared and `head`
    /// moves one slot towards the back.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::from([1, 2]);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head += 1;
        debug_assert!(value.is_some(), "slot at head was empty");
        value
    }

    /// Removes the last element from the deque and returns it, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::from([1, 2]);
    /// assert_eq!(deque.pop_back(), Some(2));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail -= 1;
        let value = self.buf[self.tail].take();
        debug_assert!(value.is_some(), "slot before tail was empty");
        value
    }

    /// Removes the first element and returns it, or [`EmptyAccess`] if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::{EmptyAccess, ShiftDeque};
    /// let mut deque = ShiftDeque::from([1]);
    /// assert_eq!(deque.try_pop_front(), Ok(1));
    /// assert_eq!(deque.try_pop_front(), Err(EmptyAccess));
    /// ```
    pub fn try_pop_front(&mut self) -> Result<T, EmptyAccess> {
        self.pop_front().ok_or(EmptyAccess)
    }

    /// Removes the last element and returns it, or [`EmptyAccess`] if the deque is empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyAccess> {
        self.pop_back().ok_or(EmptyAccess)
    }

    /// Prepends an element to the front of the deque.
    ///
    /// If there is no free slot in front of the first element, all elements are first moved
    /// [`increment`] slots towards the back. This takes *O(n)* time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// assert_eq!(deque.front(), Some(&2));
    /// ```
    ///
    /// [`increment`]: ShiftDeque::increment
    pub fn push_front(&mut self, value: T) {
        if self.head == 0 {
            self.grow_front();
        }
        self.head -= 1;
        self.buf[self.head] = Some(value);
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.tail == self.buf.len() && self.head > 0 && self.head >= self.len() {
            self.compact();
        }
        if self.tail == self.buf.len() {
            self.buf.push(Some(value));
        } else {
            self.buf[self.tail] = Some(value);
        }
        self.tail += 1;
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    /// let b: &[_] = &[&4, &5, &3];
    /// let c: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.buf[self.head..self.tail].iter())
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::ShiftDeque;
    /// let mut deque = ShiftDeque::from([5, 3, 4]);
    /// for num in deque.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(deque, [3, 1, 2]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.buf[self.head..self.tail].iter_mut())
    }

    /// Moves the elements down to the start of the buffer so the slots vacated in front of
    /// them are reused by `push_back`.
    ///
    /// Only called once at least half of the slots up to `tail` are vacated, which keeps
    /// `push_back` amortized *O(1)*.
    fn compact(&mut self) {
        let len = self.len();
        log::trace!(
            "reusing {} vacated slots: head {} -> 0, tail {} -> {}",
            self.head,
            self.head,
            self.tail,
            len
        );
        // [0, head) only holds None, so rotating moves the elements to [0, len)
        self.buf[..self.tail].rotate_left(self.head);
        self.head = 0;
        self.tail = len;
    }

    /// Opens `increment` free slots in front of the first element. Requires `head == 0`.
    fn grow_front(&mut self) {
        debug_assert_eq!(self.head, 0);
        let increment = self.increment;
        let end = self.tail + increment;
        if self.buf.len() < end {
            self.buf.resize_with(end, || None);
        }
        // [tail, end) only holds None, so rotating moves the elements up by `increment`
        // and leaves the empty slots at [0, increment)
        self.buf[..end].rotate_right(increment);

        log::trace!(
            "opened {} slots at the front: head 0 -> {}, tail {} -> {}",
            increment,
            increment,
            self.tail,
            end
        );
        self.head = increment;
        self.tail = end;
    }
}

impl<T: fmt::Debug> fmt::Debug for ShiftDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for ShiftDeque<T> {
    /// Creates an empty deque.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for ShiftDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for ShiftDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for ShiftDeque<T> {
    /// Turns a [`Vec<T>`] into a [`ShiftDeque<T>`] with the elements in the same order.
    ///
    /// [`ShiftDeque<T>`]: crate::ShiftDeque
    fn from(other: Vec<T>) -> Self {
        let tail = other.len();
        let buf = other.into_iter().map(Some).collect();
        Self { buf, head: 0, tail, increment: Self::INCREMENT }
    }
}

impl<T> From<ShiftDeque<T>> for Vec<T> {
    /// Turns a [`ShiftDeque<T>`] into a [`Vec<T>`].
    ///
    /// [`ShiftDeque<T>`]: crate::ShiftDeque
    fn from(other: ShiftDeque<T>) -> Self {
        // slots outside [head, tail) are None and vanish in the flatten
        other.buf.into_iter().flatten().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for ShiftDeque<T> {
    /// Converts a `[T; N]` into a `ShiftDeque<T>`.
    fn from(arr: [T; N]) -> Self {
        Self::from(Vec::from(arr))
    }
}

impl<T> FromIterator<T> for ShiftDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut deque = Self::with_capacity(lower);
        deque.extend(iter);
        deque
    }
}

impl<T: Hash> Hash for ShiftDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T> Index<usize> for ShiftDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(|| index_out_of_bounds(self.len(), index))
    }
}

impl<T> IndexMut<usize> for ShiftDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index).unwrap_or_else(|| index_out_of_bounds(len, index))
    }
}

impl<T> IntoIterator for ShiftDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the deque into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ShiftDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ShiftDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialOrd> PartialOrd for ShiftDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ShiftDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: PartialEq> PartialEq for ShiftDeque<T> {
    /// Two deques are equal if they hold equal elements in the same order, regardless of
    /// where in their buffers the elements sit.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ShiftDeque<T> {}

__impl_slice_eq! { [] ShiftDeque<T>, Vec<U>, }
__impl_slice_eq! { [] ShiftDeque<T>, &[U], }
__impl_slice_eq! { [] ShiftDeque<T>, &mut [U], }
__impl_slice_eq! { [const N: usize] ShiftDeque<T>, [U; N], }
__impl_slice_eq! { [const N: usize] ShiftDeque<T>, &[U; N], }
__impl_slice_eq! { [const N: usize] ShiftDeque<T>, &mut [U; N], }

fn index_out_of_bounds(len: usize, index: usize) -> ! {
    panic!("index out of bounds: the len is {} but the index is {}", len, index);
}
