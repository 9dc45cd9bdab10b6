//! Static kernel name tables and candidate lists for RFC 1071.
//!
//! # Kernel Tiers
//!
//! - Reference: fold after every word
//! - Portable: 64-bit end-around carry (`portable`), and the vector algorithm in plain Rust
//!   (`portable/lanes`)
//! - Simd: SSE2 (x86_64), NEON (aarch64)
//! - Wide: AVX2 (x86_64)

use backend::{Candidate, KernelTier};
#[allow(unused_imports)] // Only arch-specific candidates carry requirements.
use platform::caps;
use platform::Caps;

use super::portable;
use crate::dispatchers::Rfc1071Fn;

/// Reference (fold-per-word) kernel name.
pub const REFERENCE: &str = "reference";
/// Portable scalar kernel name.
pub const PORTABLE: &str = "portable";
/// Portable emulation of the vector engine.
pub const PORTABLE_LANES: &str = "portable/lanes";

#[cfg(target_arch = "x86_64")]
pub mod x86_64 {
  /// SSE2 kernel name (two 128-bit registers per chunk).
  pub const SSE2: &str = "x86_64/sse2";
  /// AVX2 kernel name (one 256-bit register per chunk).
  pub const AVX2: &str = "x86_64/avx2";
}

#[cfg(all(target_arch = "aarch64", target_endian = "little"))]
pub mod aarch64 {
  /// NEON kernel name (two 128-bit registers per chunk).
  pub const NEON: &str = "aarch64/neon";
}

#[inline]
const fn candidate(name: &'static str, requires: Caps, func: Rfc1071Fn) -> Candidate<Rfc1071Fn> {
  Candidate::new(name, requires, func)
}

/// Vector engine candidates, best first.
///
/// The list always ends with [`PORTABLE_LANES`], so selection never fails.
pub const VECTOR_CANDIDATES: &[Candidate<Rfc1071Fn>] = &[
  #[cfg(target_arch = "x86_64")]
  candidate(x86_64::AVX2, caps::x86::AVX2_READY, super::x86_64::rfc1071_avx2_safe),
  #[cfg(target_arch = "x86_64")]
  candidate(x86_64::SSE2, caps::x86::SSE2_READY, super::x86_64::rfc1071_sse2_safe),
  #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
  candidate(aarch64::NEON, caps::aarch64::NEON_READY, super::aarch64::rfc1071_neon_safe),
  candidate(PORTABLE_LANES, Caps::NONE, portable::rfc1071_lanes),
];

/// Acceleration tier of a kernel, by name.
#[cfg_attr(not(any(feature = "diag", test)), allow(dead_code))]
#[must_use]
pub fn tier_of(name: &str) -> KernelTier {
  match name {
    REFERENCE => KernelTier::Reference,
    PORTABLE | PORTABLE_LANES => KernelTier::Portable,
    #[cfg(target_arch = "x86_64")]
    x86_64::AVX2 => KernelTier::Wide,
    _ => KernelTier::Simd,
  }
}
