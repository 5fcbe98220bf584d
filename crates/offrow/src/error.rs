//! Record-array error types.

use std::error::Error;
use std::fmt;

use offrow_alloc::BlockError;

/// Errors that can occur during record-array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The underlying block allocation failed or overflowed.
    Alloc(BlockError),
    /// Record stride must be at least one byte.
    ZeroStride,
    /// An input record's length does not match the array stride.
    RecordLength {
        /// The array stride in bytes.
        expected: usize,
        /// The offered record's length.
        actual: usize,
    },
    /// An output buffer is shorter than one record.
    BufferTooSmall {
        /// Minimum buffer length (the stride).
        needed: usize,
        /// The offered buffer's length.
        actual: usize,
    },
    /// A record index outside `[0, size)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live records.
        size: usize,
    },
    /// A field range `[offset, offset + width)` extends past the stride.
    FieldOutOfBounds {
        /// Field offset within the record.
        offset: usize,
        /// Field width in bytes.
        width: usize,
        /// The array stride in bytes.
        stride: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(err) => write!(f, "block allocation failed: {err}"),
            Self::ZeroStride => write!(f, "record stride must be non-zero"),
            Self::RecordLength { expected, actual } => {
                write!(
                    f,
                    "record length mismatch: expected {expected} bytes, got {actual}"
                )
            }
            Self::BufferTooSmall { needed, actual } => {
                write!(
                    f,
                    "output buffer too small: need {needed} bytes, got {actual}"
                )
            }
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "record index {index} out of bounds for size {size}")
            }
            Self::FieldOutOfBounds {
                offset,
                width,
                stride,
            } => {
                write!(
                    f,
                    "field at offset {offset} width {width} exceeds stride {stride}"
                )
            }
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BlockError> for ArrayError {
    fn from(err: BlockError) -> Self {
        Self::Alloc(err)
    }
}
