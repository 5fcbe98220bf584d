//! Typed little-endian field accessors.
//!
//! One get/put pair per width and signedness, all operating in place on the
//! byte range `index * stride + offset .. + width`. Both the record index
//! and the field range are checked before any memory is touched; the
//! encoding is little-endian for every width and both directions.
//!
//! Unsigned accessors return the native unsigned type of each width
//! (`u8`/`u16`/`u32`/`u64`), so the full unsigned range is representable
//! without sign ambiguity or widening into a larger signed container.

use crate::array::RecordArray;
use crate::error::ArrayError;

impl RecordArray {
    fn field_array<const N: usize>(
        &self,
        index: usize,
        offset: usize,
    ) -> Result<[u8; N], ArrayError> {
        let src = self.field_bytes(index, offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(src);
        Ok(out)
    }

    fn put_field(&mut self, index: usize, offset: usize, bytes: &[u8]) -> Result<(), ArrayError> {
        let dst = self.field_bytes_mut(index, offset, bytes.len())?;
        dst.copy_from_slice(bytes);
        Ok(())
    }

    /// Read the signed byte at `offset` of record `index`.
    pub fn get_i8(&self, index: usize, offset: usize) -> Result<i8, ArrayError> {
        Ok(i8::from_le_bytes(self.field_array::<1>(index, offset)?))
    }

    /// Write a signed byte at `offset` of record `index`.
    pub fn put_i8(&mut self, index: usize, offset: usize, value: i8) -> Result<(), ArrayError> {
        self.put_field(index, offset, &value.to_le_bytes())
    }

    /// Read the unsigned byte at `offset` of record `index`.
    pub fn get_u8(&self, index: usize, offset: usize) -> Result<u8, ArrayError> {
        Ok(u8::from_le_bytes(self.field_array::<1>(index, offset)?))
    }

    /// Write an unsigned byte at `offset` of record `index`.
    pub fn put_u8(&mut self, index: usize, offset: usize, value: u8) -> Result<(), ArrayError> {
        self.put_field(index, offset, &value.to_le_bytes())
    }

    /// Read the little-endian `i16` at `offset` of record `index`.
    pub fn get_i16(&self, index: usize, offset: usize) -> Result<i16, ArrayError> {
        Ok(i16::from_le_bytes(self.field_array::<2>(index, offset)?))
    }

    /// Write a little-endian `i16` at `offset` of record `index`.
    pub fn put_i16(&mut self, index: usize, offset: usize, value: i16) -> Result<(), ArrayError> {
        self.put_field(index, offset, &value.to_le_bytes())
    }

    /// Read the little-endian `u16` at `offset` of record `index`.
    pub fn get_u16(&self, index: usize, offset: usize) -> Result<u16, ArrayError> {
        Ok(u16::from_le_bytes(self.field_array::<2>(index, offset)?))
    }

    /// Write a little-endian `u16` at `offset` of record `index`.
    pub fn put_u16(&mut self, index: usize, offset: usize, value: u16) -> Result<(), ArrayError> {
        self.put_field(index, offset, &value.to_le_bytes())
    }

    /// Read the little-endian `i32` at `offset` of record `index`.
    pub fn get_i32(&self, index: usize, offset: usize) -> Result<i32, ArrayError> {
        Ok(i32::from_le_bytes(self.field_array::<4>(index, offset)?))
    }

    /// Write a little-endian `i32` at `offset` of record `index`.
    pub fn put_i32(&mut self, index: usize, offset: usize, value: i32) -> Result<(), ArrayError> {
        self.put_field(index, offset, &value.to_le_bytes())
    }

    /// Read the little-endian `u32` at `offset` of record `index`.
    pub fn get_u32(&self, index: usize, offset: usize) -> Result<u32, ArrayError> {
        Ok(u32::from_le_bytes(self.field_array::<4>(index, offset)?))
    }

    /// Write a little-endian `u32` at `offset` of record `index`.
    pub fn put_u32(&mut self, index: usize, offset: usize, value: u32) -> Result<(), ArrayError> {
        self.put_field(index, offset, &value.to_le_bytes())
    }

    /// Read the little-endian `i64` at `offset` of record `index`.
    pub fn get_i64(&self, index: usize, offset: usize) -> Result<i64, ArrayError> {
        Ok(i64::from_le_bytes(self.field_array::<8>(index, offset)?))
    }

    /// Write a little-endian `i64` at `offset` of record `index`.
    pub fn put_i64(&mut self, index: usize, offset: usize, value: i64) -> Result<(), ArrayError> {
        self.put_field(index, offset, &value.to_le_bytes())
    }

    /// Read the little-endian `u64` at `offset` of record `index`.
    pub fn get_u64(&self, index: usize, offset: usize) -> Result<u64, ArrayError> {
        Ok(u64::from_le_bytes(self.field_array::<8>(index, offset)?))
    }

    /// Write a little-endian `u64` at `offset` of record `index`.
    pub fn put_u64(&mut self, index: usize, offset: usize, value: u64) -> Result<(), ArrayError> {
        self.put_field(index, offset, &value.to_le_bytes())
    }
}
