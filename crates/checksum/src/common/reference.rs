//! Word-at-a-time reference implementation of RFC 1071.
//!
//! This is the canonical "source of truth" for the Internet checksum. It adds
//! one big-endian 16-bit word at a time and folds the carry back in after
//! every add, exactly as RFC 1071 describes the computation. That makes it:
//!
//! - **Obviously correct**: the loop mirrors the arithmetic definition
//! - **Const-evaluable**: known values are checked at compile time below
//!
//! All optimized kernels (portable 64-bit, SIMD) must produce identical
//! results for every input. It is intentionally slow; use the auto-selected
//! implementation for production throughput.

// All indexing uses loop indices bounded by `data.len()`. Iterators are not
// available in `const fn`.
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_lossless)]

/// RFC 1071 checksum, folding after every word.
#[must_use]
pub const fn rfc1071_reference(data: &[u8]) -> u16 {
  let len = data.len();
  let mut sum: u32 = 0;
  let mut i = 0;

  while i + 1 < len {
    sum += ((data[i] as u32) << 8) | data[i + 1] as u32;
    if sum > 0xFFFF {
      sum = (sum & 0xFFFF) + (sum >> 16);
    }
    i += 2;
  }

  if !len.is_multiple_of(2) {
    sum += (data[len - 1] as u32) << 8;
    if sum > 0xFFFF {
      sum = (sum & 0xFFFF) + (sum >> 16);
    }
  }

  if sum > 0xFFFF {
    sum = (sum & 0xFFFF) + (sum >> 16);
  }

  !(sum as u16)
}

const _: () = assert!(rfc1071_reference(b"") == 0xFFFF);
const _: () = assert!(rfc1071_reference(&[0x05]) == 0xFAFF);
const _: () = assert!(rfc1071_reference(b"hello") == 48173);
const _: () = assert!(rfc1071_reference(&[0xFF; 64]) == 0x0000);
