use std::collections::TryReserveError;
use std::mem::MaybeUninit;

use crate::BLOCK_SIZE;

/// A fixed-capacity buffer of `BLOCK_SIZE` slots.
///
/// A block never knows which of its slots are initialized, that is tracked by the cursors of the
/// owning [`SegDeque`]. Dropping a block frees the memory but never runs destructors of elements,
/// the deque has to move or drop all live elements out of a block before releasing it.
///
/// [`SegDeque`]: crate::SegDeque
pub(crate) struct Block<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> Block<T> {
    /// Allocates a new block. Aborts through the allocation error handler if memory is exhausted.
    pub(crate) fn new() -> Self {
        let mut slots = Vec::with_capacity(BLOCK_SIZE);
        slots.resize_with(BLOCK_SIZE, MaybeUninit::uninit);
        Self { slots: slots.into_boxed_slice() }
    }

    /// Allocates a new block, reporting allocation failure instead of aborting.
    pub(crate) fn try_new() -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(BLOCK_SIZE)?;
        // no reallocation, capacity is already sufficient
        slots.resize_with(BLOCK_SIZE, MaybeUninit::uninit);
        Ok(Self { slots: slots.into_boxed_slice() })
    }

    /// Moves `value` into the slot at `offset`.
    ///
    /// # Safety
    ///
    /// `offset < BLOCK_SIZE` and the slot must not hold a live element, it would be leaked.
    #[inline]
    pub(crate) unsafe fn write(&mut self, offset: usize, value: T) {
        debug_assert!(offset < BLOCK_SIZE);
        self.slots.get_unchecked_mut(offset).write(value);
    }

    /// Moves the element out of the slot at `offset`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    ///
    /// `offset < BLOCK_SIZE` and the slot must hold a live element that is not read again.
    #[inline]
    pub(crate) unsafe fn take(&mut self, offset: usize) -> T {
        debug_assert!(offset < BLOCK_SIZE);
        self.slots.get_unchecked(offset).assume_init_read()
    }

    /// # Safety
    ///
    /// `offset < BLOCK_SIZE` and the slot must hold a live element.
    #[inline]
    pub(crate) unsafe fn get(&self, offset: usize) -> &T {
        debug_assert!(offset < BLOCK_SIZE);
        self.slots.get_unchecked(offset).assume_init_ref()
    }

    /// # Safety
    ///
    /// `offset < BLOCK_SIZE` and the slot must hold a live element.
    #[inline]
    pub(crate) unsafe fn get_mut(&mut self, offset: usize) -> &mut T {
        debug_assert!(offset < BLOCK_SIZE);
        self.slots.get_unchecked_mut(offset).assume_init_mut()
    }
}
