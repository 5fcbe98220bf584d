//! Contiguous off-heap memory blocks.
//!
//! A [`RawBlock`] owns one allocation obtained from the global allocator via
//! `alloc_zeroed`. Blocks are sized in whole records (`records * stride`
//! bytes) and are always zero-initialised, so bytes beyond any copied region
//! read as zero after a resize.

#![allow(unsafe_code)]

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ptr::NonNull;
use std::slice;

use crate::error::BlockError;

/// A move-only handle to one contiguous off-heap allocation.
///
/// Zero-length blocks are represented by a dangling pointer and never touch
/// the allocator, in either direction.
#[derive(Debug)]
pub struct RawBlock {
    ptr: NonNull<u8>,
    len: usize,
}

// SAFETY: RawBlock exclusively owns its allocation; moving it between
// threads transfers that ownership wholesale.
unsafe impl Send for RawBlock {}

// SAFETY: shared references only expose `&self` reads; mutation requires
// `&mut self`, which the borrow checker serialises.
unsafe impl Sync for RawBlock {}

impl RawBlock {
    /// Allocate a zero-initialised block of `records * stride` bytes.
    ///
    /// A zero-byte request succeeds without allocating.
    pub fn alloc(records: usize, stride: usize) -> Result<Self, BlockError> {
        let len = records
            .checked_mul(stride)
            .ok_or(BlockError::SizeOverflow { records, stride })?;
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }
        let layout =
            Layout::array::<u8>(len).map_err(|_| BlockError::SizeOverflow { records, stride })?;
        // SAFETY: layout has non-zero size (len > 0 checked above).
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(BlockError::AllocationFailed { requested: len })?;
        Ok(Self { ptr, len })
    }

    /// Allocate a fresh block of `records * stride` bytes and copy
    /// `min(self.len(), new_len)` bytes from this block into it.
    ///
    /// This block is left untouched; the caller swaps the fresh block in and
    /// drops the old one, so a failed allocation loses nothing.
    pub fn resize(&self, records: usize, stride: usize) -> Result<Self, BlockError> {
        let mut fresh = Self::alloc(records, stride)?;
        let n = self.len.min(fresh.len);
        fresh.as_mut_slice()[..n].copy_from_slice(&self.as_slice()[..n]);
        Ok(fresh)
    }

    /// Length of the block in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the block holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Shared view of the whole block.
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr is valid for len bytes for the lifetime of self
        // (dangling only when len == 0, which yields an empty slice).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable view of the whole block.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as for `as_slice`, plus `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        let layout = Layout::array::<u8>(self.len)
            .expect("layout was valid at allocation, so it is valid here");
        // SAFETY: ptr was returned by alloc_zeroed with this exact layout
        // and has not been released before (Drop runs at most once).
        unsafe { dealloc(self.ptr.as_ptr(), layout) };
    }
}
