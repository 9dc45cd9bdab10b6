//! Portable RFC 1071 kernels.
//!
//! - [`rfc1071_portable`]: the production scalar engine. Eight bytes per step
//!   into a 64-bit end-around-carry accumulator, folded once at the end.
//! - [`rfc1071_lanes`]: the vector engine's algorithm in plain Rust (sixteen
//!   32-bit lanes per 32-byte chunk). Used where no SIMD kernel exists, and as
//!   an architecture-independent model of the SIMD kernels in tests.

use super::{CHUNK_BYTES, LANE_SPILL_CHUNKS};
use crate::common::fold::{add64, finish};

/// Portable scalar checksum.
#[inline]
#[must_use]
pub fn rfc1071_portable(data: &[u8]) -> u16 {
  let (words, tail) = data.as_chunks::<8>();

  // Two independent accumulators break the carry dependency chain.
  let (pairs, odd) = words.as_chunks::<2>();
  let mut a = 0u64;
  let mut b = 0u64;
  for [w0, w1] in pairs {
    a = add64(a, u64::from_ne_bytes(*w0));
    b = add64(b, u64::from_ne_bytes(*w1));
  }
  if let Some(w) = odd.first() {
    a = add64(a, u64::from_ne_bytes(*w));
  }

  finish(add64(a, b), tail)
}

/// Vector-engine algorithm without SIMD registers.
#[inline]
#[must_use]
pub fn rfc1071_lanes(data: &[u8]) -> u16 {
  let (chunks, tail) = data.as_chunks::<CHUNK_BYTES>();
  let mut sum = 0u64;

  for block in chunks.chunks(LANE_SPILL_CHUNKS) {
    let mut lanes = [0u32; CHUNK_BYTES / 2];
    for chunk in block {
      let (words, _) = chunk.as_chunks::<2>();
      for (lane, word) in lanes.iter_mut().zip(words) {
        *lane += u32::from(u16::from_ne_bytes(*word));
      }
    }
    sum = add64(sum, reduce(&lanes));
  }

  finish(sum, tail)
}

/// Halving reduction of the lane accumulator to one 64-bit value.
#[inline]
fn reduce(lanes: &[u32; CHUNK_BYTES / 2]) -> u64 {
  let mut wide = [0u64; CHUNK_BYTES / 2];
  for (w, &l) in wide.iter_mut().zip(lanes) {
    *w = u64::from(l);
  }

  let mut width = wide.len();
  while width > 1 {
    width /= 2;
    let (lo, hi) = wide.split_at_mut(width);
    for (l, &h) in lo.iter_mut().zip(hi.iter()) {
      *l += h;
    }
  }
  wide.first().copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use alloc::vec::Vec;

  use super::*;
  use crate::common::reference::rfc1071_reference;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(131).wrapping_add(i >> 3)) as u8).collect()
  }

  #[test]
  fn known_values() {
    for kernel in [rfc1071_portable as fn(&[u8]) -> u16, rfc1071_lanes] {
      assert_eq!(kernel(b""), 0xFFFF);
      assert_eq!(kernel(&[0x05]), 0xFAFF);
      assert_eq!(kernel(b"hello"), 48173);
      assert_eq!(kernel(&[0xFF; 64]), 0x0000);
    }
  }

  #[test]
  fn matches_reference_across_lengths() {
    let data = pattern(600);
    for len in 0..=data.len() {
      let slice = &data[..len];
      let expected = rfc1071_reference(slice);
      assert_eq!(rfc1071_portable(slice), expected, "portable len={len}");
      assert_eq!(rfc1071_lanes(slice), expected, "lanes len={len}");
    }
  }

  #[test]
  fn matches_reference_at_unaligned_offsets() {
    let data = pattern(300);
    for offset in 0..16 {
      let slice = &data[offset..];
      assert_eq!(rfc1071_portable(slice), rfc1071_reference(slice), "offset={offset}");
      assert_eq!(rfc1071_lanes(slice), rfc1071_reference(slice), "offset={offset}");
    }
  }

  #[test]
  fn lanes_survive_spill_boundary() {
    // Saturated lanes at the spill boundary, plus one chunk and a ragged tail.
    let len = (LANE_SPILL_CHUNKS + 1) * CHUNK_BYTES + 7;
    let data = alloc::vec![0xFFu8; len];
    assert_eq!(rfc1071_lanes(&data), rfc1071_reference(&data));
    assert_eq!(rfc1071_portable(&data), rfc1071_reference(&data));
  }

  #[test]
  fn reduce_sums_all_lanes() {
    let lanes: [u32; 16] = core::array::from_fn(|i| u32::MAX - i as u32);
    let expected: u64 = lanes.iter().map(|&l| u64::from(l)).sum();
    assert_eq!(reduce(&lanes), expected);
  }
}
