//! Growable off-heap arrays of fixed-stride binary records.
//!
//! A [`RecordArray`] stores records of one fixed byte length (the *stride*)
//! back to back in a single allocation obtained directly from the global
//! allocator, so a hundred million 16-byte records cost exactly 1.6 GB plus
//! one header — no per-record boxing, no pointer chasing.
//!
//! Records are opaque byte ranges. Whole records move in and out via
//! [`RecordArray::add`], [`RecordArray::set`] and [`RecordArray::get`];
//! typed little-endian sub-fields are read and written in place through the
//! per-width accessors ([`RecordArray::get_i64`], [`RecordArray::put_u16`],
//! and so on).
//!
//! # Quick start
//!
//! ```rust
//! use offrow::RecordArray;
//!
//! // Records of 16 bytes: a u64 id at offset 0, an i32 score at offset 8.
//! let mut arr = RecordArray::new(16)?;
//! let mut rec = [0u8; 16];
//! rec[..8].copy_from_slice(&7u64.to_le_bytes());
//! rec[8..12].copy_from_slice(&(-3i32).to_le_bytes());
//! arr.add(&rec)?;
//!
//! assert_eq!(arr.get_u64(0, 0)?, 7);
//! assert_eq!(arr.get_i32(0, 8)?, -3);
//!
//! arr.put_i32(0, 8, 41)?;
//! assert_eq!(arr.get_i32(0, 8)?, 41);
//! # Ok::<(), offrow::ArrayError>(())
//! ```
//!
//! # Ownership and disposal
//!
//! The array exclusively owns its backing [`RawBlock`]; dropping the array
//! releases the memory exactly once. There is no explicit `dispose` call to
//! forget and no way to touch freed memory: the handle is consumed by move.
//!
//! # Concurrency
//!
//! No internal synchronization. Shared (`&self`) reads are safe; any
//! mutation takes `&mut self`, so the borrow checker rules out readers
//! observing a reallocation mid-flight.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod error;
mod field;

pub use array::RecordArray;
pub use error::ArrayError;
pub use offrow_alloc::{BlockError, RawBlock};
