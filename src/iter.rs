use std::fmt;
use std::iter::FusedIterator;

use super::SegDeque;

/// An iterator over the elements of a `SegDeque`.
///
/// Every step looks the next element up by its index, which makes the iterator cheap to create
/// and to clone, and lets it run from both ends.
///
/// This `struct` is created by the [`iter`] method on [`SegDeque`]. See it's documentation for
/// more information.
///
/// [`iter`]: SegDeque::iter
pub struct Iter<'a, T> {
    deque: &'a SegDeque<T>,
    // index of the element that `.next()` returns
    front: usize,
    // index after the element that `.next_back()` returns
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(deque: &'a SegDeque<T>) -> Self {
        Self { deque, front: 0, back: deque.len() }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { deque: self.deque, front: self.front, back: self.back }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            let el = self.deque.get(self.front)?;
            self.front += 1;
            Some(el)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front < self.back {
            let el = self.deque.get(self.back - 1)?;
            self.back -= 1;
            Some(el)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
