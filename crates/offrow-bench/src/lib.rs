//! Shared helpers for offrow benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use offrow::RecordArray;

/// Build an array of `n` records with stride 16: a `u64` key at offset 0
/// and a `u32` tag at offset 8.
pub fn keyed_array(n: usize) -> RecordArray {
    let mut arr = RecordArray::with_capacity(16, n).expect("bench allocation");
    let mut rec = [0u8; 16];
    for i in 0..n as u64 {
        rec[..8].copy_from_slice(&i.to_le_bytes());
        rec[8..12].copy_from_slice(&(i as u32).to_le_bytes());
        arr.add(&rec).expect("bench add");
    }
    arr
}
