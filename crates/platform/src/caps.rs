//! CPU capability representation.
//!
//! This module answers the question: "What instructions can I legally run on
//! this machine?"
//!
//! # Design
//!
//! [`Caps`] is a 128-bit bitset. Each bit corresponds to one ISA extension.
//! The bits are architecture-specific but the API is uniform across targets.
//!
//! # Bit Layout
//!
//! - Bits 0-63: x86/x86_64 features
//! - Bits 64-127: aarch64 features
//!
//! # Usage
//!
//! ```
//! use platform::caps::{Caps, x86};
//!
//! let c = platform::caps();
//! if c.has(x86::AVX2_READY) {
//!   // 256-bit integer lanes are available
//! }
//! # let _ = Caps::NONE;
//! ```

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities: a 128-bit feature bitset.
///
/// `Caps` is `Copy`, `Send`, and `Sync`. It can be freely shared across threads.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub(crate) [u64; 2]);

impl Caps {
  /// Empty capability set (no features).
  pub const NONE: Self = Self([0; 2]);

  /// Create a capability set from raw words.
  #[cfg(test)]
  #[inline]
  #[must_use]
  pub const fn from_raw(words: [u64; 2]) -> Self {
    Self(words)
  }

  /// Access the raw underlying words.
  #[cfg(test)]
  #[inline]
  #[must_use]
  pub const fn as_raw(&self) -> &[u64; 2] {
    &self.0
  }

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0[0] & required.0[0]) == required.0[0] && (self.0[1] & required.0[1]) == required.0[1]
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self([self.0[0] | other.0[0], self.0[1] | other.0[1]])
  }

  /// Intersection of two capability sets.
  #[inline]
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self([self.0[0] & other.0[0], self.0[1] & other.0[1]])
  }

  /// Check if the capability set is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0[0] == 0 && self.0[1] == 0
  }

  /// Count the number of features present.
  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0[0].count_ones() + self.0[1].count_ones()
  }

  /// Create a capability set with a single bit set.
  ///
  /// Bits 128-255 wrap into the aarch64 word; callers only use named constants.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    let bit_in_word = bit % 64;
    if (bit / 64).is_multiple_of(2) { Self([1u64 << bit_in_word, 0]) } else { Self([0, 1u64 << bit_in_word]) }
  }

  /// Check if a specific bit is set.
  #[inline]
  #[must_use]
  pub const fn has_bit(self, bit: u8) -> bool {
    self.has(Self::bit(bit))
  }

  /// Iterate over the names of every known feature present in this set.
  pub fn feature_names(self) -> impl Iterator<Item = &'static str> {
    NAMED.iter().filter(move |(_, cap)| self.has(*cap)).map(|(name, _)| *name)
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}

impl core::ops::BitAnd for Caps {
  type Output = Self;

  #[inline]
  fn bitand(self, rhs: Self) -> Self {
    self.intersection(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

impl fmt::Debug for Caps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.feature_names()).finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Architecture
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  #[default]
  Other,
}

impl Arch {
  /// Get the architecture for the current compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_arch = "x86_64") {
      Self::X86_64
    } else if cfg!(target_arch = "x86") {
      Self::X86
    } else if cfg!(target_arch = "aarch64") {
      Self::Aarch64
    } else {
      Self::Other
    }
  }

  /// Returns the human-readable name for this architecture.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Other => "other",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86/x86_64 Features (bits 0-63)
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 CPU features used by the checksum kernels.
pub mod x86 {
  use super::Caps;

  pub const SSE2: Caps = Caps::bit(0);
  pub const AVX: Caps = Caps::bit(1);
  pub const AVX2: Caps = Caps::bit(2);

  /// 128-bit integer lanes (baseline on x86_64).
  pub const SSE2_READY: Caps = SSE2;
  /// 256-bit integer lanes.
  pub const AVX2_READY: Caps = Caps([AVX.0[0] | AVX2.0[0], 0]);
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64 Features (bits 64-127)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64 CPU features used by the checksum kernels.
pub mod aarch64 {
  use super::Caps;

  pub const NEON: Caps = Caps::bit(64); // Baseline on AArch64

  /// 128-bit integer lanes.
  pub const NEON_READY: Caps = NEON;
}

const NAMED: &[(&str, Caps)] = &[
  ("sse2", x86::SSE2),
  ("avx", x86::AVX),
  ("avx2", x86::AVX2),
  ("neon", aarch64::NEON),
];


#[cfg(test)]
mod proptests {
  use proptest::prelude::*;

  use super::Caps;

  fn caps() -> impl Strategy<Value = Caps> {
    any::<[u64; 2]>().prop_map(Caps::from_raw)
  }

  proptest! {
    #[test]
    fn union_has_both_operands(a in caps(), b in caps()) {
      let u = a | b;
      prop_assert!(u.has(a) && u.has(b));
    }

    #[test]
    fn intersection_is_held_by_both(a in caps(), b in caps()) {
      let i = a & b;
      prop_assert!(a.has(i) && b.has(i));
      prop_assert!(i.count() <= a.count().min(b.count()));
    }

    #[test]
    fn everything_has_none(a in caps()) {
      prop_assert!(a.has(Caps::NONE));
      prop_assert_eq!(a.is_empty(), a.count() == 0);
    }
  }
}
