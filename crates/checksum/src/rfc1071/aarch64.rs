//! aarch64 RFC 1071 kernel (NEON).
//!
//! Each 32-byte chunk is loaded as two `uint16x8_t` registers. `vpadalq_u16`
//! adds adjacent word pairs into 32-bit lanes, so every lane receives two words
//! per register per chunk; one accumulator per register keeps that bound and
//! the spill interval of [`LANE_SPILL_CHUNKS`] keeps lanes below `2^32`.
//! Reduction widens pairwise to 64 bits and adds across the vector.
//!
//! # Safety
//!
//! NEON is part of the aarch64 baseline. The module is compiled for
//! little-endian targets only, where lanes hold native-order words.

use core::arch::aarch64::*;

use super::{CHUNK_BYTES, LANE_SPILL_CHUNKS};
use crate::common::fold::{add64, finish};

/// NEON kernel: two 128-bit registers per chunk.
///
/// # Safety
///
/// Caller must ensure NEON is available.
#[target_feature(enable = "neon")]
pub unsafe fn rfc1071_neon(data: &[u8]) -> u16 {
  let (chunks, tail) = data.as_chunks::<CHUNK_BYTES>();
  let mut sum = 0u64;

  for block in chunks.chunks(LANE_SPILL_CHUNKS) {
    let mut acc_lo = vdupq_n_u32(0);
    let mut acc_hi = vdupq_n_u32(0);

    for chunk in block {
      let ptr = chunk.as_ptr();
      // SAFETY: `chunk` is 32 readable bytes; `vld1q_u8` has no alignment requirement.
      let (a, b) = unsafe { (vld1q_u8(ptr), vld1q_u8(ptr.add(16))) };
      acc_lo = vpadalq_u16(acc_lo, vreinterpretq_u16_u8(a));
      acc_hi = vpadalq_u16(acc_hi, vreinterpretq_u16_u8(b));
    }

    let wide = vaddq_u64(vpaddlq_u32(acc_lo), vpaddlq_u32(acc_hi));
    sum = add64(sum, vaddvq_u64(wide));
  }

  finish(sum, tail)
}

/// Safe wrapper for the NEON kernel.
#[inline]
pub fn rfc1071_neon_safe(data: &[u8]) -> u16 {
  // SAFETY: NEON is part of the aarch64 baseline; the dispatcher also checks it.
  unsafe { rfc1071_neon(data) }
}
