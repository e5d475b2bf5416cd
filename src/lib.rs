//! A double-ended queue stored in fixed-size blocks.
//!
//! `SegDeque` offers the same core operations as the standard library's `VecDeque`: amortized
//! *O(1)* `push` and `pop` on both ends and *O(1)* indexing. Instead of a single ring buffer it
//! keeps its elements in a growable array of blocks of [`BLOCK_SIZE`] slots each, like the
//! classic STL deque. Growing never moves elements, a full end simply gets a new block:
//! ```text
//!              head                                        tail
//!               |                                           |
//!               v                                           v
//! +---+---+---+---+   +---+---+---+---+   +---+---+---+---+
//! |   |   |   | 0 |   | 1 | 2 | 3 | 4 |   | 5 | 6 |   |   |
//! +---+---+---+---+   +---+---+---+---+   +---+---+---+---+
//!     block 0             block 1             block 2
//! ```
//!
//! The element at index `i` lives in block `(head + i) / BLOCK_SIZE` at offset
//! `(head + i) % BLOCK_SIZE`, where `head` is the offset of the first element in block 0.
//! Popping the last element out of an edge block releases that block, except for the very last
//! block, which is kept so that an emptied deque can be refilled without allocating.
//!
//! A fresh deque starts with its cursors in the middle of its only block, so up to
//! `BLOCK_SIZE / 2` elements can be pushed on either end before the first allocation after
//! `new`. A deque drained by `pop` keeps its cursors where the last pop left them.
//!
//! Compared to a ring buffer:
//! - growing is cheap, elements are never copied into a larger buffer
//! - memory of popped elements is returned block by block
//!
//! But:
//! - indexing needs a division and an extra indirection
//! - the elements are not contiguous, there is no `as_slices` or `make_contiguous`
//!
//! Callers that only need the queue operations can program against the [`Deque`] trait, which
//! is also implemented for [`VecDeque`].
//!
//! [`VecDeque`]: std::collections::VecDeque

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use std::collections::{TryReserveError, VecDeque};
use std::fmt;
use std::mem;

#[macro_use]
mod macros;

mod block;
mod deque;
mod into_iter;
mod iter;

pub use deque::Deque;
pub use into_iter::IntoIter;
pub use iter::Iter;

use block::Block;


/// Number of slots in every block of a [`SegDeque`].
pub const BLOCK_SIZE: usize = 64;

/// A double-ended queue stored in fixed-size blocks.
///
/// See the [crate-level documentation](./index.html) for more details.
pub struct SegDeque<T> {
    // Blocks are exclusively owned, only the cursors below decide which slots are initialized.
    // The first element is at (head_block, head_offset), the last one at
    // (tail_block, tail_end - 1).
    // If len > 0: head_offset < BLOCK_SIZE, 0 < tail_end and
    //     len == (tail_block - head_block) * BLOCK_SIZE + tail_end - head_offset.
    // If len == 0: there is exactly one block and head_offset == tail_end.
    // Emptied edge blocks are released at once, so head_block == 0 and
    // tail_block == blocks.len() - 1.
    blocks: VecDeque<Block<T>>,
    head_block: usize,
    head_offset: usize,
    tail_block: usize,
    tail_end: usize,
    len: usize,
}

impl<T> SegDeque<T> {
    /// Creates an empty deque with one allocated block.
    ///
    /// # Examples
    ///
    /// ```
    /// use segdeque::SegDeque;
    ///
    /// let deque: SegDeque<i32> = SegDeque::new();
    /// assert_eq!(deque.block_count(), 1);
    /// ```
    pub fn new() -> Self {
        Self {
            blocks: VecDeque::from([Block::new()]),
            head_block: 0,
            head_offset: BLOCK_SIZE / 2,
            tail_block: 0,
            tail_end: BLOCK_SIZE / 2,
            len: 0,
        }
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let deque = SegDeque::from([1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns wether the deque is empty or not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// assert!(deque.is_empty());
    /// deque.push_back(42);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of blocks currently allocated by the deque.
    ///
    /// There is always at least one block, even when the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::{SegDeque, BLOCK_SIZE};
    /// let mut deque = SegDeque::new();
    /// deque.extend(0..BLOCK_SIZE);
    /// assert_eq!(deque.block_count(), 2);
    /// deque.clear();
    /// assert_eq!(deque.block_count(), 1);
    /// ```
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Provides a reference to the element at the given index.
    ///
    /// Element at index 0 is the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let deque = SegDeque::from([1, 2, 3]);
    /// assert_eq!(deque.get(1), Some(&2));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let (block, offset) = self.locate(index);
            // SAFETY: index < len, so locate points at a live slot
            unsafe { Some(self.blocks[block].get(offset)) }
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
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::from([1, 2, 3]);
    /// *deque.get_mut(1).unwrap() += 40;
    /// assert_eq!(deque.get(1), Some(&42));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let (block, offset) = self.locate(index);
            // SAFETY: index < len, so locate points at a live slot
            unsafe { Some(self.blocks[block].get_mut(offset)) }
        } else {
            None
        }
    }

    /// Provides a reference to the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// assert_eq!(deque.front(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// assert_eq!(deque.front_mut(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// *deque.front_mut().unwrap() += 10;
    /// assert_eq!(deque.front_mut(), Some(&mut 11));
    /// ```
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// assert_eq!(deque.back(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Provides a mutable reference to the back element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// assert_eq!(deque.back_mut(), None);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// *deque.back_mut().unwrap() += 10;
    /// assert_eq!(deque.back_mut(), Some(&mut 12));
    /// ```
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.len.checked_sub(1).and_then(|index| self.get_mut(index))
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// This operation is *O(n)*.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    ///
    /// deque.push_back(0);
    /// deque.push_front(1);
    ///
    /// assert!(deque.contains(&1));
    /// assert!(!deque.contains(&4));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|el| el == x)
    }

    /// Appends an element to the back of the deque.
    ///
    /// Allocates a new block if the last block is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// deque.push_back(3);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.needs_back_block() {
            self.blocks.push_back(Block::new());
            self.tail_block += 1;
            self.tail_end = 0;
        }
        self.write_back(value);
    }

    /// Appends an element to the back of the deque, returning an error instead of aborting if
    /// a new block cannot be allocated. On error the deque is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// deque.try_push_back(1).expect("out of memory");
    /// assert_eq!(deque, [1]);
    /// ```
    pub fn try_push_back(&mut self, value: T) -> Result<(), TryReserveError> {
        if self.needs_back_block() {
            self.blocks.try_reserve(1)?;
            let block = Block::try_new()?;
            self.blocks.push_back(block);
            self.tail_block += 1;
            self.tail_end = 0;
        }
        self.write_back(value);
        Ok(())
    }

    /// Prepends an element to the front of the deque.
    ///
    /// Allocates a new block if the first block is full. All blocks move up by one index in the
    /// block array, the elements themselves are not moved.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// deque.push_front(3);
    /// assert_eq!(deque, [3, 2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.needs_front_block() {
            self.blocks.push_front(Block::new());
            self.shift_for_front_block();
        }
        self.write_front(value);
    }

    /// Prepends an element to the front of the deque, returning an error instead of aborting if
    /// a new block cannot be allocated. On error the deque is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::new();
    /// deque.try_push_front(1).expect("out of memory");
    /// deque.try_push_front(2).expect("out of memory");
    /// assert_eq!(deque, [2, 1]);
    /// ```
    pub fn try_push_front(&mut self, value: T) -> Result<(), TryReserveError> {
        if self.needs_front_block() {
            self.blocks.try_reserve(1)?;
            let block = Block::try_new()?;
            self.blocks.push_front(block);
            self.shift_for_front_block();
        }
        self.write_front(value);
        Ok(())
    }

    /// Removes the last element from the deque and returns it, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::from([1, 2]);
    /// assert_eq!(deque.pop_back(), Some(2));
    /// assert_eq!(deque.pop_back(), Some(1));
    /// assert_eq!(deque.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.tail_end -= 1;
        self.len -= 1;
        // SAFETY: the deque was not empty, so the slot before the old tail end is live
        let value = unsafe { self.blocks[self.tail_block].take(self.tail_end) };
        if self.tail_end == 0 && self.tail_block > self.head_block {
            // the tail block is empty now
            self.blocks.pop_back();
            self.tail_block -= 1;
            self.tail_end = BLOCK_SIZE;
        }
        Some(value)
    }

    /// Removes the first element and returns it, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::from([1, 2]);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: the deque is not empty, so the head slot is live
        let value = unsafe { self.blocks[self.head_block].take(self.head_offset) };
        self.head_offset += 1;
        self.len -= 1;
        if self.head_offset == BLOCK_SIZE && self.head_block < self.tail_block {
            // the head block is empty now
            self.blocks.pop_front();
            self.head_block = 0;
            self.head_offset = 0;
            self.tail_block -= 1;
        }
        Some(value)
    }

    /// Shortens the deque, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater than the deque's current length, this has no effect.
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::from([5, 10, 15]);
    /// deque.truncate(1);
    /// assert_eq!(deque, [5]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            let _ = self.pop_back();
        }
    }

    /// Removes all elements from the deque.
    ///
    /// Unlike popping every element, this releases all blocks but one and moves the cursors back
    /// to the middle of that block, leaving the deque in the same state as [`new`].
    ///
    /// [`new`]: SegDeque::new
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let mut deque = SegDeque::from([1, 2, 3]);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
        debug_assert_eq!(self.blocks.len(), 1);
        self.head_offset = BLOCK_SIZE / 2;
        self.tail_end = BLOCK_SIZE / 2;
    }

    /// Returns a front-to-back iterator over the deque.
    ///
    /// The iterator looks up every element by its index, so it can also be run back-to-front
    /// with [`rev`].
    ///
    /// [`rev`]: Iterator::rev
    ///
    /// # Examples
    ///
    /// ```
    /// # use segdeque::SegDeque;
    /// let deque = SegDeque::from([1, 2, 3]);
    /// let mut iter = deque.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Maps a logical index to a block index and an offset inside that block.
    #[inline]
    fn locate(&self, index: usize) -> (usize, usize) {
        let slot = self.head_offset + index;
        (self.head_block + slot / BLOCK_SIZE, slot % BLOCK_SIZE)
    }

    #[inline]
    fn needs_back_block(&self) -> bool {
        // an empty deque reuses its only block instead
        self.tail_end == BLOCK_SIZE && self.len != 0
    }

    #[inline]
    fn needs_front_block(&self) -> bool {
        self.head_offset == 0 && self.len != 0
    }

    /// Updates the cursors after a block was inserted at index 0.
    #[inline]
    fn shift_for_front_block(&mut self) {
        self.head_block = 0;
        self.head_offset = BLOCK_SIZE;
        self.tail_block += 1;
    }

    /// Writes `value` behind the last element. The tail block must have a free slot, or the
    /// deque must be empty.
    fn write_back(&mut self, value: T) {
        if self.tail_end == BLOCK_SIZE {
            // only reachable when empty: the cursors are stuck at the end of the only block
            debug_assert_eq!(self.len, 0);
            self.head_offset = 0;
            self.tail_end = 0;
        }
        // SAFETY: tail_end < BLOCK_SIZE and the slot is past the last live element
        unsafe {
            self.blocks[self.tail_block].write(self.tail_end, value);
        }
        self.tail_end += 1;
        self.len += 1;
    }

    /// Writes `value` in front of the first element. The head block must have a free slot, or the
    /// deque must be empty.
    fn write_front(&mut self, value: T) {
        if self.head_offset == 0 {
            // only reachable when empty: the cursors are stuck at the start of the only block
            debug_assert_eq!(self.len, 0);
            self.head_offset = BLOCK_SIZE;
            self.tail_end = BLOCK_SIZE;
        }
        self.head_offset -= 1;
        // SAFETY: head_offset < BLOCK_SIZE and the slot is before the first live element
        unsafe {
            self.blocks[self.head_block].write(self.head_offset, value);
        }
        self.len += 1;
    }
}

impl<T: Clone> Clone for SegDeque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SegDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> Default for SegDeque<T> {
    /// Creates an empty deque.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SegDeque<T> {
    fn drop(&mut self) {
        /// Keeps dropping the remaining elements if the destructor of one of them panics.
        struct DropGuard<'a, T>(&'a mut SegDeque<T>);

        impl<T> Drop for DropGuard<'_, T> {
            fn drop(&mut self) {
                while self.0.pop_back().is_some() {}
            }
        }

        if !mem::needs_drop::<T>() {
            // blocks free their memory on their own
            return;
        }
        // blocks never drop their slots, so every live element has to be moved out first
        let guard = DropGuard(self);
        while let Some(element) = guard.0.pop_back() {
            drop(element);
        }
        mem::forget(guard);
    }
}

impl<T> Extend<T> for SegDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for SegDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for SegDeque<T> {
    /// Moves the elements of a [`Vec<T>`] into a [`SegDeque<T>`], front to back.
    ///
    /// [`SegDeque<T>`]: crate::SegDeque
    fn from(other: Vec<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T> From<SegDeque<T>> for Vec<T> {
    /// Moves the elements of a [`SegDeque<T>`] into a [`Vec<T>`], front to back.
    ///
    /// [`SegDeque<T>`]: crate::SegDeque
    fn from(other: SegDeque<T>) -> Self {
        let mut vec = Vec::with_capacity(other.len());
        vec.extend(other);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for SegDeque<T> {
    /// Converts a `[T; N]` into a `SegDeque<T>`.
    fn from(arr: [T; N]) -> Self {
        IntoIterator::into_iter(arr).collect()
    }
}

impl<T> FromIterator<T> for SegDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: Hash> Hash for SegDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T> Index<usize> for SegDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(|| index_out_of_bounds(self.len, index))
    }
}

impl<T> IndexMut<usize> for SegDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index).unwrap_or_else(|| index_out_of_bounds(len, index))
    }
}

impl<T> IntoIterator for SegDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the deque into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SegDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialOrd> PartialOrd for SegDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SegDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: PartialEq> PartialEq for SegDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        // block layouts of equal deques may differ, so compare element by element
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SegDeque<T> {}

__impl_slice_eq! { [] SegDeque<T>, Vec<U>, }
__impl_slice_eq! { [] SegDeque<T>, &[U], }
__impl_slice_eq! { [] SegDeque<T>, &mut [U], }
__impl_slice_eq! { [const N: usize] SegDeque<T>, [U; N], }
__impl_slice_eq! { [const N: usize] SegDeque<T>, &[U; N], }
__impl_slice_eq! { [const N: usize] SegDeque<T>, &mut [U; N], }

fn index_out_of_bounds(len: usize, index: usize) -> ! {
    panic!("index out of bounds: the len is {} but the index is {}", len, index);
}
