use std::iter::FusedIterator;

use super::SegDeque;

/// An owning iterator over the elements of a `SegDeque`.
///
/// Elements are popped off the underlying deque, so blocks are released while iterating.
///
/// This `struct` is created by the [`into_iter`] method on [`SegDeque`] (provided by the
/// [`IntoIterator`] trait). See it's documentation for more information.
///
/// [`into_iter`]: SegDeque::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    deque: SegDeque<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(deque: SegDeque<T>) -> Self {
        IntoIter { deque }
    }

    /// Returns the elements that have not been yielded yet as a deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut iter = SegDeque::from([1, 2, 3]).into_iter();
    /// iter.next();
    /// assert_eq!(iter.into_deque(), [2, 3]);
    /// ```
    pub fn into_deque(self) -> SegDeque<T> {
        self.deque
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

    fn count(self) -> usize {
        // the rest is dropped together with the deque
        self.deque.len()
    }

    fn last(mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
