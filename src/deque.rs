use std::collections::{vec_deque, VecDeque};
use std::iter::Rev;

use crate::{Iter, SegDeque};

/// The operations shared by every double-ended queue, independent of how it stores its elements.
///
/// All implementations follow the same contract:
/// - `push_back` and `push_front` always succeed and grow the deque by one
/// - `pop_back`, `pop_front` and `get` return `None` instead of failing and never modify an
///   empty deque
/// - [`begin`] yields the elements front to back, [`end`] back to front
///
/// [`begin`]: Deque::begin
/// [`end`]: Deque::end
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use segdeque::{Deque, SegDeque};
///
/// fn fill<D: Deque<i32>>(deque: &mut D) {
///     deque.push_front(4);
///     deque.push_back(5);
///     deque.push_front(3);
///     deque.push_back(6);
/// }
///
/// let mut seg = SegDeque::new();
/// let mut vec = VecDeque::new();
/// fill(&mut seg);
/// fill(&mut vec);
/// assert!(seg.begin().eq(vec.begin()));
/// assert_eq!(seg.end().copied().collect::<Vec<_>>(), [6, 5, 4, 3]);
/// ```
pub trait Deque<T> {
    /// Front-to-back iterator returned by [`begin`](Deque::begin).
    type Iter<'a>: DoubleEndedIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, counting from the front, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&T>;

    /// Inserts `value` at the end.
    fn push_back(&mut self, value: T);

    /// Inserts `value` at the front.
    fn push_front(&mut self, value: T);

    /// Removes and returns the last element, or `None` if empty.
    fn pop_back(&mut self) -> Option<T>;

    /// Removes and returns the first element, or `None` if empty.
    fn pop_front(&mut self) -> Option<T>;

    /// Returns a lazy sequence of the elements from the front to the back.
    fn begin(&self) -> Self::Iter<'_>;

    /// Returns a lazy sequence of the elements from the back to the front.
    fn end(&self) -> Rev<Self::Iter<'_>> {
        self.begin().rev()
    }
}

impl<T> Deque<T> for SegDeque<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    #[inline]
    fn len(&self) -> usize {
        SegDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        SegDeque::get(self, index)
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        SegDeque::push_back(self, value)
    }

    #[inline]
    fn push_front(&mut self, value: T) {
        SegDeque::push_front(self, value)
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        SegDeque::pop_back(self)
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        SegDeque::pop_front(self)
    }

    #[inline]
    fn begin(&self) -> Iter<'_, T> {
        self.iter()
    }
}

impl<T> Deque<T> for VecDeque<T> {
    type Iter<'a> = vec_deque::Iter<'a, T> where T: 'a;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value)
    }

    #[inline]
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value)
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    #[inline]
    fn begin(&self) -> vec_deque::Iter<'_, T> {
        self.iter()
    }
}
