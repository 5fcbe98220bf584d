//! Allocation error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while allocating or resizing a raw block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockError {
    /// The global allocator returned null for a non-zero request.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// `records * stride` does not fit in `usize`.
    SizeOverflow {
        /// Requested record capacity.
        records: usize,
        /// Record stride in bytes.
        stride: usize,
    },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation of {requested} bytes failed")
            }
            Self::SizeOverflow { records, stride } => {
                write!(
                    f,
                    "block size overflow: {records} records at stride {stride}"
                )
            }
        }
    }
}

impl Error for BlockError {}
