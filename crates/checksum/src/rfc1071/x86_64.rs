//! x86_64 RFC 1071 kernels (SSE2, AVX2).
//!
//! Both kernels consume 32-byte chunks. Each chunk's sixteen 16-bit words are
//! zero-extended into 32-bit lanes (`unpacklo`/`unpackhi` against zero) and
//! added to a lane accumulator. Every lane receives two words per chunk, so
//! spilling at least every [`LANE_SPILL_CHUNKS`] chunks keeps lanes below
//! `2^32`. The spill widens lanes to 64 bits and halves the register down to a
//! single scalar.
//!
//! Words are loaded in native (little-endian) order; [`finish`] converts the
//! folded sum to network order and adds the sub-chunk tail.
//!
//! # Safety
//!
//! The `unsafe fn` kernels require the named target features. The `*_safe`
//! wrappers are only handed out by the dispatcher (or kernel tests) after
//! runtime detection.

use core::arch::x86_64::*;

use super::{CHUNK_BYTES, LANE_SPILL_CHUNKS};
use crate::common::fold::{add64, finish};

// ─────────────────────────────────────────────────────────────────────────────
// SSE2
// ─────────────────────────────────────────────────────────────────────────────

/// Widen four u32 lanes to u64 and add them.
#[inline]
#[target_feature(enable = "sse2")]
fn reduce128(lanes: __m128i) -> u64 {
  let zero = _mm_setzero_si128();
  let wide = _mm_add_epi64(_mm_unpacklo_epi32(lanes, zero), _mm_unpackhi_epi32(lanes, zero));
  let wide = _mm_add_epi64(wide, _mm_unpackhi_epi64(wide, wide));
  _mm_cvtsi128_si64(wide) as u64
}

/// SSE2 kernel: two 128-bit registers per chunk.
///
/// # Safety
///
/// Caller must ensure SSE2 is available (always true on x86_64).
#[target_feature(enable = "sse2")]
pub unsafe fn rfc1071_sse2(data: &[u8]) -> u16 {
  let (chunks, tail) = data.as_chunks::<CHUNK_BYTES>();
  let zero = _mm_setzero_si128();
  let mut sum = 0u64;

  for block in chunks.chunks(LANE_SPILL_CHUNKS) {
    // One accumulator per register half keeps each lane at two words per chunk.
    let mut acc_lo = _mm_setzero_si128();
    let mut acc_hi = _mm_setzero_si128();

    for chunk in block {
      let ptr = chunk.as_ptr().cast::<__m128i>();
      // SAFETY: `chunk` is 32 readable bytes; loads are unaligned.
      let (a, b) = unsafe { (_mm_loadu_si128(ptr), _mm_loadu_si128(ptr.add(1))) };

      acc_lo = _mm_add_epi32(acc_lo, _mm_add_epi32(_mm_unpacklo_epi16(a, zero), _mm_unpackhi_epi16(a, zero)));
      acc_hi = _mm_add_epi32(acc_hi, _mm_add_epi32(_mm_unpacklo_epi16(b, zero), _mm_unpackhi_epi16(b, zero)));
    }

    sum = add64(sum, reduce128(acc_lo) + reduce128(acc_hi));
  }

  finish(sum, tail)
}

/// Safe wrapper for the SSE2 kernel.
#[inline]
pub fn rfc1071_sse2_safe(data: &[u8]) -> u16 {
  // SAFETY: SSE2 is part of the x86_64 baseline.
  unsafe { rfc1071_sse2(data) }
}

// ─────────────────────────────────────────────────────────────────────────────
// AVX2
// ─────────────────────────────────────────────────────────────────────────────

/// Widen eight u32 lanes to u64, then halve 256 -> 128 -> 64.
#[inline]
#[target_feature(enable = "avx2")]
fn reduce256(lanes: __m256i) -> u64 {
  let wide = _mm256_add_epi64(
    _mm256_cvtepu32_epi64(_mm256_castsi256_si128(lanes)),
    _mm256_cvtepu32_epi64(_mm256_extracti128_si256::<1>(lanes)),
  );
  let half = _mm_add_epi64(_mm256_castsi256_si128(wide), _mm256_extracti128_si256::<1>(wide));
  let half = _mm_add_epi64(half, _mm_unpackhi_epi64(half, half));
  _mm_cvtsi128_si64(half) as u64
}

/// AVX2 kernel: one 256-bit register per chunk.
///
/// # Safety
///
/// Caller must ensure AVX2 is available.
#[target_feature(enable = "avx2")]
pub unsafe fn rfc1071_avx2(data: &[u8]) -> u16 {
  let (chunks, tail) = data.as_chunks::<CHUNK_BYTES>();
  let zero = _mm256_setzero_si256();
  let mut sum = 0u64;

  for block in chunks.chunks(LANE_SPILL_CHUNKS) {
    let mut acc = _mm256_setzero_si256();

    for chunk in block {
      // SAFETY: `chunk` is exactly 32 readable bytes; the load is unaligned.
      let v = unsafe { _mm256_loadu_si256(chunk.as_ptr().cast::<__m256i>()) };
      acc = _mm256_add_epi32(acc, _mm256_add_epi32(_mm256_unpacklo_epi16(v, zero), _mm256_unpackhi_epi16(v, zero)));
    }

    sum = add64(sum, reduce256(acc));
  }

  finish(sum, tail)
}

/// Safe wrapper for the AVX2 kernel.
#[inline]
pub fn rfc1071_avx2_safe(data: &[u8]) -> u16 {
  // SAFETY: Dispatcher verifies AVX2 before selecting this kernel.
  unsafe { rfc1071_avx2(data) }
}
