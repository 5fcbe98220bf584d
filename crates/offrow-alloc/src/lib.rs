//! Raw off-heap block allocation for offrow record arrays.
//!
//! Provides [`RawBlock`], a move-only handle to one contiguous allocation
//! obtained directly from the global allocator, bypassing `Vec` and friends.
//! This is the only crate in the workspace that may contain `unsafe` code;
//! every unsafe block carries a mandatory `// SAFETY:` comment.
//!
//! # Ownership model
//!
//! A block is released exactly once, by its `Drop` impl. Because the handle
//! is move-only and never cloned, use-after-release is a compile-time error
//! rather than a runtime hazard. Reallocation never releases first:
//! [`RawBlock::resize`] returns a fresh block and leaves the old one intact,
//! so a failed allocation cannot lose live data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod block;
mod error;

pub use block::RawBlock;
pub use error::BlockError;
