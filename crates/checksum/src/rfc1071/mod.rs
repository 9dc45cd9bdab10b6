//! RFC 1071 Internet checksum.
//!
//! The one's-complement sum of big-endian 16-bit words, with end-around carry,
//! complemented. Used by the IPv4, TCP, UDP and ICMP headers.
//!
//! # Engines
//!
//! - [`checksum_scalar`]: the portable scalar engine, available everywhere.
//! - [`checksum_vector`]: the vector engine. Consumes 32-byte chunks with
//!   SIMD where the CPU supports it (AVX2, SSE2, NEON), and the same
//!   algorithm in plain Rust elsewhere.
//! - [`checksum`]: auto-selected. Short buffers take the scalar engine; longer
//!   ones the vector engine.
//!
//! All three return identical results for every input.
//!
//! # Example
//!
//! ```
//! use checksum::rfc1071;
//!
//! assert_eq!(rfc1071::checksum(b""), 0xFFFF);
//! assert_eq!(rfc1071::checksum(&[0x05]), 0xFAFF);
//! assert_eq!(rfc1071::checksum(b"hello"), 48173);
//! ```

#[cfg(all(target_arch = "aarch64", target_endian = "little"))]
mod aarch64;
pub(crate) mod config;
pub(crate) mod kernels;
pub(crate) mod policy;
mod portable;
#[cfg(all(test, feature = "alloc"))]
mod proptests;
#[cfg(target_arch = "x86_64")]
mod x86_64;

use backend::Selected;
use traits::{Checksum, ChecksumCombine, VerificationError};

pub use self::config::{FORCE_ENV, Rfc1071Force, THRESHOLD_ENV};
use self::policy::Rfc1071Policy;
#[cfg(feature = "std")]
use crate::dispatchers::Rfc1071Dispatcher;
use crate::{common::fold::fold32, dispatchers::Rfc1071Fn, introspect::KernelIntrospect};

/// Bytes consumed per vector iteration.
pub(crate) const CHUNK_BYTES: usize = 32;

/// Maximum chunks accumulated in 32-bit lanes before spilling to 64 bits.
///
/// Each lane receives at most two words (`2 * 0xFFFF`) per chunk.
pub(crate) const LANE_SPILL_CHUNKS: usize = 32768;

const _: () = assert!(LANE_SPILL_CHUNKS as u64 * 2 * 0xFFFF <= u32::MAX as u64);

/// Buffer length used to report the "current" backend.
const REPRESENTATIVE_LEN: usize = 1024;

// ─────────────────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────────────────

const LANES: Selected<Rfc1071Fn> = Selected::new(kernels::PORTABLE_LANES, portable::rfc1071_lanes as Rfc1071Fn);

/// Vector kernel chosen from compile-time target features alone.
#[cfg_attr(all(feature = "std", not(test)), allow(dead_code))]
const STATIC_VECTOR: Selected<Rfc1071Fn> =
  match backend::select(platform::detect::caps_static(), kernels::VECTOR_CANDIDATES) {
    Some(selected) => selected,
    None => LANES,
  };

/// Policy used without `std`: no overrides, compile-time capabilities.
#[cfg_attr(all(feature = "std", not(test)), allow(dead_code))]
const STATIC_POLICY: Rfc1071Policy = Rfc1071Policy::auto(config::STATIC.tunables.portable_to_simd, STATIC_VECTOR);

#[cfg(feature = "std")]
fn select_vector() -> Selected<Rfc1071Fn> {
  backend::select(platform::caps(), kernels::VECTOR_CANDIDATES).unwrap_or(LANES)
}

#[cfg(feature = "std")]
static VECTOR: Rfc1071Dispatcher = Rfc1071Dispatcher::new(select_vector);

#[inline]
fn vector() -> Selected<Rfc1071Fn> {
  #[cfg(feature = "std")]
  {
    VECTOR.get()
  }

  #[cfg(not(feature = "std"))]
  {
    STATIC_VECTOR
  }
}

/// Cached process-wide policy.
#[inline]
pub(crate) fn policy() -> Rfc1071Policy {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static POLICY: OnceLock<Rfc1071Policy> = OnceLock::new();
    *POLICY.get_or_init(|| Rfc1071Policy::from_config(&config::get(), platform::caps(), vector()))
  }

  #[cfg(not(feature = "std"))]
  {
    STATIC_POLICY
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Compute the Internet checksum of `data` with the auto-selected engine.
#[inline]
#[must_use]
pub fn checksum(data: &[u8]) -> u16 {
  (policy().select(data.len()).func)(data)
}

/// Compute the Internet checksum with the portable scalar engine.
#[inline]
#[must_use]
pub fn checksum_scalar(data: &[u8]) -> u16 {
  portable::rfc1071_portable(data)
}

/// Compute the Internet checksum with the vector engine.
///
/// Uses the best SIMD kernel the CPU supports, detected once.
#[inline]
#[must_use]
pub fn checksum_vector(data: &[u8]) -> u16 {
  (vector().func)(data)
}

/// Verify a buffer that embeds its own checksum.
///
/// A correct buffer sums to `0xFFFF`, so its checksum is zero.
///
/// # Errors
///
/// Returns [`VerificationError`] if the buffer does not sum to `0xFFFF`.
///
/// # Example
///
/// ```
/// let mut header = *b"\x45\x00\x00\x1c\x00\x00\x00\x00\x40\x01\x00\x00\x0a\x00\x00\x01\x0a\x00\x00\x02";
/// let [hi, lo] = checksum::checksum(&header).to_be_bytes();
/// header[10] = hi;
/// header[11] = lo;
/// assert!(checksum::verify(&header).is_ok());
///
/// header[0] ^= 1;
/// assert!(checksum::verify(&header).is_err());
/// ```
#[inline]
pub fn verify(data: &[u8]) -> Result<(), VerificationError> {
  if checksum(data) == 0 { Ok(()) } else { Err(VerificationError::new()) }
}

/// Combine the checksums of adjacent buffers `A` and `B` into `checksum(A || B)`.
///
/// When `A` has odd length, `B`'s words straddle the boundary, which swaps the
/// byte order of its partial sum.
#[inline]
#[must_use]
#[allow(clippy::cast_lossless)] // `u32::from` is not const
pub const fn combine(ck_a: u16, ck_b: u16, len_a: usize) -> u16 {
  let sum_a = !ck_a;
  let sum_b = if len_a.is_multiple_of(2) { !ck_b } else { (!ck_b).swap_bytes() };
  !fold32(sum_a as u32 + sum_b as u32)
}

/// Name of the kernel used for a typical (1 KiB) buffer.
#[inline]
#[must_use]
pub fn selected_backend() -> &'static str {
  policy().kernel_name(REPRESENTATIVE_LEN)
}

/// Name of the vector engine kernel.
#[inline]
#[must_use]
pub fn vector_backend() -> &'static str {
  vector().name
}

#[cfg(feature = "diag")]
pub(crate) fn diag(len: usize) -> crate::diag::Rfc1071SelectionDiag {
  use crate::diag::{Rfc1071SelectionDiag, SelectionReason};

  let policy = policy();
  let reason = if policy.effective_force != Rfc1071Force::Auto {
    SelectionReason::Forced
  } else if !policy.has_simd() {
    SelectionReason::NoSimd
  } else if len < policy.portable_to_simd {
    SelectionReason::BelowSimdThreshold
  } else {
    SelectionReason::Auto
  };

  Rfc1071SelectionDiag {
    len,
    tune_kind: platform::tune().kind,
    reason,
    effective_force: policy.effective_force,
    selected_kernel: policy.kernel_name(len),
    selected_tier: kernels::tier_of(policy.kernel_name(len)),
    vector_kernel: policy.vector.name,
    portable_to_simd: policy.portable_to_simd,
    has_simd: policy.has_simd(),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// InternetChecksum
// ─────────────────────────────────────────────────────────────────────────────

/// RFC 1071 Internet checksum.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, ChecksumCombine, InternetChecksum};
///
/// let bufs: [&[u8]; 3] = [b"he", b"l", b"lo"];
/// assert_eq!(InternetChecksum::checksum_vectored(&bufs), InternetChecksum::checksum(b"hello"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternetChecksum;

impl Checksum for InternetChecksum {
  const OUTPUT_SIZE: usize = 2;
  type Output = u16;

  #[inline]
  fn checksum(data: &[u8]) -> u16 {
    checksum(data)
  }

  #[inline]
  fn verify(data: &[u8]) -> Result<(), VerificationError> {
    verify(data)
  }
}

impl ChecksumCombine for InternetChecksum {
  #[inline]
  fn combine(sum_a: u16, sum_b: u16, len_a: usize) -> u16 {
    combine(sum_a, sum_b, len_a)
  }
}

impl KernelIntrospect for InternetChecksum {
  fn kernel_name_for_len(len: usize) -> &'static str {
    policy().kernel_name(len)
  }

  fn backend_name() -> &'static str {
    selected_backend()
  }
}

#[cfg(test)]
mod tests {
  use alloc::vec::Vec;

  use super::*;
  use crate::common::reference::rfc1071_reference;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8) ^ ((i >> 8) as u8).wrapping_mul(29)).collect()
  }

  #[test]
  fn known_values() {
    for f in [checksum as fn(&[u8]) -> u16, checksum_scalar, checksum_vector] {
      assert_eq!(f(b""), 0xFFFF);
      assert_eq!(f(&[0x05]), 0xFAFF);
      assert_eq!(f(b"hello"), 48173);
      assert_eq!(f(&[0xFF; 64]), 0x0000);
    }
  }

  #[test]
  fn engines_agree_exhaustively_for_short_inputs() {
    // Every 1- and 2-byte input.
    for a in 0..=255u8 {
      let one = [a];
      assert_eq!(checksum_scalar(&one), checksum_vector(&one));
      for b in 0..=255u8 {
        let two = [a, b];
        assert_eq!(checksum_scalar(&two), checksum_vector(&two));
        assert_eq!(checksum_scalar(&two), rfc1071_reference(&two));
      }
    }
  }

  #[test]
  fn engines_agree_across_lengths() {
    let data = pattern(8192 + 33);
    for len in (0..=data.len()).step_by(7).chain(0..=96) {
      let s = &data[..len];
      let expected = rfc1071_reference(s);
      assert_eq!(checksum_scalar(s), expected, "scalar len={len}");
      assert_eq!(checksum_vector(s), expected, "vector len={len}");
      assert_eq!(checksum(s), expected, "auto len={len}");
    }
  }

  #[test]
  fn odd_tail_combines() {
    let data = pattern(77);
    let (head, last) = data.split_at(76);
    assert_eq!(combine(checksum(head), checksum(last), head.len()), checksum(&data));
  }

  #[test]
  fn combine_with_empty_sides() {
    let ck = checksum(b"hello");
    assert_eq!(combine(checksum(b""), ck, 0), ck);
    assert_eq!(combine(ck, checksum(b""), 5), ck);
    assert_eq!(combine(0xFFFF, 0xFFFF, 0), 0xFFFF);
  }

  #[test]
  fn combine_at_every_split() {
    let data = pattern(129);
    let full = checksum(&data);
    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      assert_eq!(combine(checksum(a), checksum(b), a.len()), full, "split={split}");
    }
  }

  #[test]
  fn verify_accepts_embedded_checksum() {
    let mut packet = pattern(40);
    packet[10] = 0;
    packet[11] = 0;
    let [hi, lo] = checksum(&packet).to_be_bytes();
    packet[10] = hi;
    packet[11] = lo;
    assert!(verify(&packet).is_ok());
    assert!(InternetChecksum::verify(&packet).is_ok());

    packet[3] = packet[3].wrapping_add(1);
    assert!(verify(&packet).is_err());
  }

  #[test]
  fn vectored_matches_contiguous() {
    let data = pattern(300);
    let bufs: [&[u8]; 4] = [&data[..1], &data[1..100], &data[100..101], &data[101..]];
    assert_eq!(InternetChecksum::checksum_vectored(&bufs), checksum(&data));
  }

  #[test]
  fn static_vector_needs_only_compile_time_features() {
    let caps = platform::detect::caps_static();
    let candidate = kernels::VECTOR_CANDIDATES.iter().find(|c| c.name == STATIC_VECTOR.name).unwrap();
    assert!(caps.has(candidate.requires));
    assert_eq!((STATIC_VECTOR.func)(b"hello"), 48173);
    assert_eq!(STATIC_POLICY.kernel_name(0), kernels::PORTABLE);
    assert_eq!(STATIC_POLICY.effective_force, Rfc1071Force::Auto);
  }

  #[cfg(not(feature = "std"))]
  #[test]
  fn without_std_selection_is_the_static_one() {
    assert_eq!(vector_backend(), STATIC_VECTOR.name);
    assert_eq!(policy().kernel_name(REPRESENTATIVE_LEN), STATIC_POLICY.kernel_name(REPRESENTATIVE_LEN));
  }

  #[test]
  fn combine_swaps_only_after_odd_prefix() {
    assert_eq!(combine(0xFFFF, 0xFFFE, 2), 0xFFFE);
    assert_eq!(combine(0xFFFF, 0xFFFE, 3), 0xFEFF);
  }

  #[test]
  fn introspection_names_are_known() {
    let name = InternetChecksum::backend_name();
    assert!(!name.is_empty());
    assert_eq!(InternetChecksum::kernel_name_for_len(REPRESENTATIVE_LEN), name);
    assert!(!vector_backend().is_empty());
  }
}
