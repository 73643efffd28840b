//! A deque that can be shared between threads.
//!
//! None of the [`ShiftDeque`] operations are safe to interleave, so the whole deque sits
//! behind one lock and every operation takes it exactly once. Use [`SharedDeque::lock`] when
//! several operations have to happen as one step.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::{Deque, EmptyAccess, Queue, ShiftDeque};

/// A cloneable handle to a [`ShiftDeque`] guarded by a mutex.
///
/// Cloning the handle does not clone the elements: all clones refer to the same deque.
///
/// # Examples
///
/// ```
/// use shiftdeque::SharedDeque;
/// use std::thread;
///
/// let deque = SharedDeque::new();
/// let producer = {
///     let deque = deque.clone();
///     thread::spawn(move || {
///         for i in 0..100 {
///             deque.push_back(i);
///         }
///     })
/// };
/// producer.join().unwrap();
/// assert_eq!(deque.len(), 100);
/// assert_eq!(deque.pop_front(), Some(0));
/// ```
pub struct SharedDeque<T> {
    inner: Arc<Mutex<ShiftDeque<T>>>,
}

impl<T> SharedDeque<T> {
    /// Creates a handle to a new, empty deque.
    pub fn new() -> Self {
        Self::from(ShiftDeque::new())
    }

    /// Locks the deque, blocking until no other handle holds the lock.
    pub fn lock(&self) -> MutexGuard<'_, ShiftDeque<T>> {
        self.inner.lock()
    }

    /// Appends an element to the back of the deque.
    pub fn push_back(&self, value: T) {
        self.lock().push_back(value);
    }

    /// Prepends an element to the front of the deque.
    pub fn push_front(&self, value: T) {
        self.lock().push_front(value);
    }

    /// Removes the first element and returns it, or `None` if the deque is empty.
    pub fn pop_front(&self) -> Option<T> {
        self.lock().pop_front()
    }

    /// Removes the last element and returns it, or `None` if the deque is empty.
    pub fn pop_back(&self) -> Option<T> {
        self.lock().pop_back()
    }

    /// Removes the first element and returns it, or [`EmptyAccess`] if the deque is empty.
    pub fn try_pop_front(&self) -> Result<T, EmptyAccess> {
        self.lock().try_pop_front()
    }

    /// Removes the last element and returns it, or [`EmptyAccess`] if the deque is empty.
    pub fn try_pop_back(&self) -> Result<T, EmptyAccess> {
        self.lock().try_pop_back()
    }

    /// Returns the number of elements at the moment of the call.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether the deque was empty at the moment of the call.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the deque if this is the last handle to it, or the handle back otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftdeque::SharedDeque;
    /// let deque = SharedDeque::new();
    /// deque.push_back(1);
    /// let other = deque.clone();
    /// let deque = deque.into_inner().unwrap_err();
    /// drop(other);
    /// assert_eq!(deque.into_inner().unwrap(), [1]);
    /// ```
    pub fn into_inner(self) -> Result<ShiftDeque<T>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T> Clone for SharedDeque<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Default for SharedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<ShiftDeque<T>> for SharedDeque<T> {
    fn from(deque: ShiftDeque<T>) -> Self {
        Self { inner: Arc::new(Mutex::new(deque)) }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // try_lock so formatting while holding the guard does not deadlock
        match self.inner.try_lock() {
            Some(deque) => f.debug_tuple("SharedDeque").field(&*deque).finish(),
            None => f.write_str("SharedDeque(<locked>)"),
        }
    }
}

impl<T> Queue<T> for SharedDeque<T> {
    fn push_back(&mut self, value: T) {
        self.lock().push_back(value);
    }
    fn pop_front(&mut self) -> Option<T> {
        self.lock().pop_front()
    }
    fn len(&self) -> usize {
        self.lock().len()
    }
    fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T> Deque<T> for SharedDeque<T> {
    fn push_front(&mut self, value: T) {
        self.lock().push_front(value);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.lock().pop_back()
    }
}
