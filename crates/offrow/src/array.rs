//! The growable record array.
//!
//! A [`RecordArray`] tracks logical size versus capacity (both in records)
//! and delegates storage to a single [`RawBlock`]. Growth and shrink follow
//! the allocate-new → copy → swap → release-old discipline: a failed
//! allocation surfaces as an error and leaves the array exactly as it was.

use offrow_alloc::{BlockError, RawBlock};

use crate::error::ArrayError;

/// A growable array of fixed-stride binary records in off-heap memory.
///
/// Invariants: `size <= capacity`, `stride > 0`, and the backing block is
/// always exactly `capacity * stride` bytes.
#[derive(Debug)]
pub struct RecordArray {
    block: RawBlock,
    stride: usize,
    size: usize,
    capacity: usize,
}

impl RecordArray {
    /// Initial record capacity used by [`RecordArray::new`].
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Create an empty array with the default initial capacity.
    pub fn new(stride: usize) -> Result<Self, ArrayError> {
        Self::with_capacity(stride, Self::DEFAULT_CAPACITY)
    }

    /// Create an empty array with room for `capacity` records.
    pub fn with_capacity(stride: usize, capacity: usize) -> Result<Self, ArrayError> {
        if stride == 0 {
            return Err(ArrayError::ZeroStride);
        }
        let block = RawBlock::alloc(capacity, stride)?;
        Ok(Self {
            block,
            stride,
            size: 0,
            capacity,
        })
    }

    /// Create an array of `len` live, zero-filled records.
    ///
    /// Every slot in `[0, len)` is immediately addressable by `set`, `get`
    /// and the field accessors; `capacity == size == len`.
    pub fn zeroed(stride: usize, len: usize) -> Result<Self, ArrayError> {
        let mut arr = Self::with_capacity(stride, len)?;
        arr.size = len;
        Ok(arr)
    }

    /// Number of live records.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of records the current block can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fixed byte length of one record.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Whether the array holds no records.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Bytes held by the backing block.
    pub fn memory_bytes(&self) -> usize {
        self.block.len()
    }

    /// Append one record, growing the backing block if it is full.
    ///
    /// `record` must be exactly `stride` bytes. Amortized O(1): capacity
    /// doubles on exhaustion.
    pub fn add(&mut self, record: &[u8]) -> Result<(), ArrayError> {
        self.check_record_len(record)?;
        if self.size == self.capacity {
            self.grow()?;
        }
        let start = self.size * self.stride;
        self.block.as_mut_slice()[start..start + self.stride].copy_from_slice(record);
        self.size += 1;
        Ok(())
    }

    /// Overwrite the record at `index` in place.
    pub fn set(&mut self, index: usize, record: &[u8]) -> Result<(), ArrayError> {
        self.check_record_len(record)?;
        self.check_index(index)?;
        let start = index * self.stride;
        self.block.as_mut_slice()[start..start + self.stride].copy_from_slice(record);
        Ok(())
    }

    /// Copy the record at `index` into `out[..stride]`.
    ///
    /// `out` must be at least `stride` bytes; excess bytes are untouched.
    pub fn get(&self, index: usize, out: &mut [u8]) -> Result<(), ArrayError> {
        if out.len() < self.stride {
            return Err(ArrayError::BufferTooSmall {
                needed: self.stride,
                actual: out.len(),
            });
        }
        let record = self.record(index)?;
        out[..self.stride].copy_from_slice(record);
        Ok(())
    }

    /// Borrow the record at `index` as a byte slice.
    pub fn record(&self, index: usize) -> Result<&[u8], ArrayError> {
        self.check_index(index)?;
        let start = index * self.stride;
        Ok(&self.block.as_slice()[start..start + self.stride])
    }

    /// Borrow the record at `index` mutably.
    pub fn record_mut(&mut self, index: usize) -> Result<&mut [u8], ArrayError> {
        self.check_index(index)?;
        let start = index * self.stride;
        let stride = self.stride;
        Ok(&mut self.block.as_mut_slice()[start..start + stride])
    }

    /// Reallocate so that `capacity == size` exactly.
    ///
    /// No-op when capacity is already exact. Live records are preserved;
    /// a subsequent `add` grows again from the tightened capacity.
    pub fn shrink_to_fit(&mut self) -> Result<(), ArrayError> {
        if self.capacity == self.size {
            return Ok(());
        }
        let fresh = self.block.resize(self.size, self.stride)?;
        self.block = fresh;
        self.capacity = self.size;
        Ok(())
    }

    /// Double the capacity (at minimum to one record).
    ///
    /// Old block is released only after the fresh block holds all live
    /// bytes, so allocation failure leaves the array unchanged.
    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_capacity =
            Self::grown_capacity(self.capacity).ok_or(BlockError::SizeOverflow {
                records: self.capacity,
                stride: self.stride,
            })?;
        let fresh = self.block.resize(new_capacity, self.stride)?;
        self.block = fresh;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Next capacity after exhaustion: doubled, at minimum one record.
    ///
    /// `None` when the doubled capacity does not fit in `usize`; unchecked
    /// doubling would wrap below `size` and truncate live records on the
    /// next resize.
    fn grown_capacity(capacity: usize) -> Option<usize> {
        if capacity == 0 {
            return Some(1);
        }
        capacity.checked_mul(2)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.size {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    pub(crate) fn field_bytes(
        &self,
        index: usize,
        offset: usize,
        width: usize,
    ) -> Result<&[u8], ArrayError> {
        self.check_field(offset, width)?;
        let record = self.record(index)?;
        Ok(&record[offset..offset + width])
    }

    pub(crate) fn field_bytes_mut(
        &mut self,
        index: usize,
        offset: usize,
        width: usize,
    ) -> Result<&mut [u8], ArrayError> {
        self.check_field(offset, width)?;
        let record = self.record_mut(index)?;
        Ok(&mut record[offset..offset + width])
    }

    fn check_field(&self, offset: usize, width: usize) -> Result<(), ArrayError> {
        let end = offset.checked_add(width);
        match end {
            Some(end) if end <= self.stride => Ok(()),
            _ => Err(ArrayError::FieldOutOfBounds {
                offset,
                width,
                stride: self.stride,
            }),
        }
    }

    fn check_record_len(&self, record: &[u8]) -> Result<(), ArrayError> {
        if record.len() != self.stride {
            return Err(ArrayError::RecordLength {
                expected: self.stride,
                actual: record.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty_with_default_capacity() {
        let arr = RecordArray::new(8).unwrap();
        assert_eq!(arr.size(), 0);
        assert_eq!(arr.capacity(), RecordArray::DEFAULT_CAPACITY);
        assert_eq!(arr.stride(), 8);
        assert!(arr.is_empty());
    }

    #[test]
    fn zero_stride_is_rejected() {
        assert!(matches!(RecordArray::new(0), Err(ArrayError::ZeroStride)));
    }

    #[test]
    fn add_then_get_round_trips() {
        let mut arr = RecordArray::with_capacity(4, 2).unwrap();
        arr.add(&[1, 2, 3, 4]).unwrap();
        arr.add(&[5, 6, 7, 8]).unwrap();
        let mut buf = [0u8; 4];
        arr.get(0, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
        arr.get(1, &mut buf).unwrap();
        assert_eq!(buf, [5, 6, 7, 8]);
    }

    #[test]
    fn add_grows_past_initial_capacity() {
        let mut arr = RecordArray::with_capacity(2, 1).unwrap();
        for i in 0..10u8 {
            arr.add(&[i, i]).unwrap();
        }
        assert_eq!(arr.size(), 10);
        assert!(arr.capacity() >= 10);
        assert_eq!(arr.record(9).unwrap(), &[9, 9]);
    }

    #[test]
    fn growth_from_zero_capacity() {
        let mut arr = RecordArray::with_capacity(4, 0).unwrap();
        assert_eq!(arr.memory_bytes(), 0);
        arr.add(&[1, 1, 1, 1]).unwrap();
        assert_eq!(arr.size(), 1);
        assert!(arr.capacity() >= 1);
    }

    #[test]
    fn wrong_record_length_is_rejected() {
        let mut arr = RecordArray::new(8).unwrap();
        let err = arr.add(&[0u8; 7]).unwrap_err();
        assert_eq!(
            err,
            ArrayError::RecordLength {
                expected: 8,
                actual: 7
            }
        );
        // Nothing was appended.
        assert_eq!(arr.size(), 0);
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut arr = RecordArray::new(8).unwrap();
        arr.add(&[0u8; 8]).unwrap();
        let err = arr.set(1, &[0u8; 8]).unwrap_err();
        assert_eq!(err, ArrayError::IndexOutOfBounds { index: 1, size: 1 });
    }

    #[test]
    fn get_buffer_too_small_is_rejected() {
        let mut arr = RecordArray::new(8).unwrap();
        arr.add(&[0u8; 8]).unwrap();
        let mut buf = [0u8; 4];
        let err = arr.get(0, &mut buf).unwrap_err();
        assert_eq!(
            err,
            ArrayError::BufferTooSmall {
                needed: 8,
                actual: 4
            }
        );
    }

    #[test]
    fn get_into_oversized_buffer_leaves_tail_untouched() {
        let mut arr = RecordArray::new(2).unwrap();
        arr.add(&[0xaa, 0xbb]).unwrap();
        let mut buf = [0xff_u8; 4];
        arr.get(0, &mut buf).unwrap();
        assert_eq!(buf, [0xaa, 0xbb, 0xff, 0xff]);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut arr = RecordArray::new(4).unwrap();
        arr.add(&[1, 2, 3, 4]).unwrap();
        arr.set(0, &[9, 9, 9, 9]).unwrap();
        assert_eq!(arr.record(0).unwrap(), &[9, 9, 9, 9]);
        assert_eq!(arr.size(), 1);
    }

    #[test]
    fn zeroed_records_are_live_and_zero() {
        let arr = RecordArray::zeroed(8, 3).unwrap();
        assert_eq!(arr.size(), 3);
        assert_eq!(arr.capacity(), 3);
        for i in 0..3 {
            assert_eq!(arr.record(i).unwrap(), &[0u8; 8]);
        }
    }

    #[test]
    fn shrink_to_fit_tightens_capacity_and_preserves_bytes() {
        let mut arr = RecordArray::new(8).unwrap();
        arr.add(&42u64.to_le_bytes()).unwrap();
        arr.add(&43u64.to_le_bytes()).unwrap();
        assert!(arr.capacity() > 2);
        arr.shrink_to_fit().unwrap();
        assert_eq!(arr.size(), 2);
        assert_eq!(arr.capacity(), 2);
        assert_eq!(arr.record(0).unwrap(), &42u64.to_le_bytes());
        assert_eq!(arr.record(1).unwrap(), &43u64.to_le_bytes());
    }

    #[test]
    fn add_after_shrink_grows_again() {
        let mut arr = RecordArray::new(4).unwrap();
        arr.add(&[1, 1, 1, 1]).unwrap();
        arr.shrink_to_fit().unwrap();
        assert_eq!(arr.capacity(), 1);
        arr.add(&[2, 2, 2, 2]).unwrap();
        assert_eq!(arr.size(), 2);
        assert!(arr.capacity() >= 2);
        assert_eq!(arr.record(0).unwrap(), &[1, 1, 1, 1]);
        assert_eq!(arr.record(1).unwrap(), &[2, 2, 2, 2]);
    }

    #[test]
    fn shrink_empty_array() {
        let mut arr = RecordArray::new(4).unwrap();
        arr.shrink_to_fit().unwrap();
        assert_eq!(arr.capacity(), 0);
        assert_eq!(arr.memory_bytes(), 0);
    }

    #[test]
    fn growth_preserves_zero_filled_records() {
        // One live zero record at full capacity; the append reallocates.
        let mut arr = RecordArray::zeroed(4, 1).unwrap();
        arr.add(&[8, 8, 8, 8]).unwrap();
        assert_eq!(arr.record(0).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(arr.record(1).unwrap(), &[8, 8, 8, 8]);
    }

    #[test]
    fn grown_capacity_doubles_and_rejects_overflow() {
        assert_eq!(RecordArray::grown_capacity(0), Some(1));
        assert_eq!(RecordArray::grown_capacity(1), Some(2));
        assert_eq!(RecordArray::grown_capacity(32), Some(64));
        assert_eq!(RecordArray::grown_capacity(usize::MAX / 2), Some(usize::MAX - 1));
        assert_eq!(RecordArray::grown_capacity(usize::MAX / 2 + 1), None);
        assert_eq!(RecordArray::grown_capacity(usize::MAX), None);
    }

    #[test]
    fn allocation_overflow_surfaces_through_facade() {
        let err = RecordArray::with_capacity(8, usize::MAX).unwrap_err();
        assert_eq!(
            err,
            ArrayError::Alloc(BlockError::SizeOverflow {
                records: usize::MAX,
                stride: 8
            })
        );
    }

    #[test]
    fn record_mut_writes_through() {
        let mut arr = RecordArray::zeroed(4, 1).unwrap();
        arr.record_mut(0).unwrap().copy_from_slice(&[4, 3, 2, 1]);
        assert_eq!(arr.record(0).unwrap(), &[4, 3, 2, 1]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn size_and_capacity_track_adds(n in 0usize..200) {
                let mut arr = RecordArray::with_capacity(8, 2).unwrap();
                for i in 0..n {
                    arr.add(&(i as u64).to_le_bytes()).unwrap();
                }
                prop_assert_eq!(arr.size(), n);
                prop_assert!(arr.capacity() >= n);
            }

            #[test]
            fn set_get_round_trip(
                records in proptest::collection::vec(
                    proptest::collection::vec(any::<u8>(), 8), 1..32),
                pick in any::<proptest::sample::Index>(),
            ) {
                let mut arr = RecordArray::with_capacity(8, 1).unwrap();
                for rec in &records {
                    arr.add(rec).unwrap();
                }
                let index = pick.index(records.len());
                let replacement: Vec<u8> = (0..8).map(|i| i as u8 ^ 0x5a).collect();
                arr.set(index, &replacement).unwrap();
                let mut buf = [0u8; 8];
                arr.get(index, &mut buf).unwrap();
                prop_assert_eq!(&buf[..], &replacement[..]);
            }

            #[test]
            fn shrink_preserves_all_records(
                records in proptest::collection::vec(
                    proptest::collection::vec(any::<u8>(), 4), 0..64),
            ) {
                let mut arr = RecordArray::new(4).unwrap();
                for rec in &records {
                    arr.add(rec).unwrap();
                }
                arr.shrink_to_fit().unwrap();
                prop_assert_eq!(arr.capacity(), records.len());
                for (i, rec) in records.iter().enumerate() {
                    prop_assert_eq!(arr.record(i).unwrap(), &rec[..]);
                }
            }
        }
    }
}
