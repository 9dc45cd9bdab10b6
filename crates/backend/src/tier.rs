//! Kernel acceleration tiers.
//!
//! Tiers represent levels of hardware acceleration, from the reference
//! implementation to wide SIMD. Higher tiers are faster but have stricter
//! hardware requirements.
//!
//! # Tier Overview
//!
//! | Tier | Name | Description |
//! |------|------|-------------|
//! | 0 | Reference | Word-at-a-time with a fold per add; the test oracle |
//! | 1 | Portable | 64-bit end-around-carry scalar; production fallback |
//! | 2 | Simd | 128-bit lanes (SSE2, NEON) |
//! | 3 | Wide | 256-bit lanes (AVX2) |

use core::fmt;

/// Kernel acceleration tier.
///
/// Tiers implement `Ord` with higher tiers being "greater", so
/// `tier >= KernelTier::Simd` checks for vector acceleration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KernelTier {
  /// Tier 0: obviously-correct reference.
  #[default]
  Reference = 0,
  /// Tier 1: portable scalar.
  Portable = 1,
  /// Tier 2: 128-bit vector lanes.
  Simd = 2,
  /// Tier 3: 256-bit vector lanes.
  Wide = 3,
}

impl KernelTier {
  /// Convert to numeric value.
  #[inline]
  #[must_use]
  pub const fn as_u8(self) -> u8 {
    self as u8
  }

  /// Human-readable tier name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Reference => "reference",
      Self::Portable => "portable",
      Self::Simd => "simd",
      Self::Wide => "wide",
    }
  }

  /// Whether kernels of this tier use vector registers.
  #[inline]
  #[must_use]
  pub const fn is_vector(self) -> bool {
    matches!(self, Self::Simd | Self::Wide)
  }
}

impl fmt::Display for KernelTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
