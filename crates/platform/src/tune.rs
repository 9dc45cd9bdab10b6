//! Tuning hints.
//!
//! `Tune` answers: "What should I *prefer* on this machine?"
//!
//! Unlike [`Caps`](crate::Caps) (which describes what is *possible*), `Tune`
//! describes what is *optimal*: today that is the minimum buffer length for
//! which a vector kernel beats the scalar one once its setup and reduction
//! costs are paid.
//!
//! # Usage
//!
//! ```
//! let tune = platform::tune();
//! let data = [0u8; 16];
//!
//! if data.len() < tune.simd_threshold {
//!   // Use the scalar kernel
//! }
//! ```

/// Identifies which tuning preset is in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TuneKind {
  /// Supplied through an override.
  Custom = 0,
  /// No vector kernels available.
  Portable,
  /// x86_64 with 128-bit lanes only.
  X86Sse2,
  /// x86_64 with 256-bit lanes.
  X86Avx2,
  /// aarch64 with NEON.
  Aarch64Neon,
}

impl TuneKind {
  /// Returns the human-readable name for this tuning preset.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Custom => "Custom",
      Self::Portable => "Portable",
      Self::X86Sse2 => "x86_64 SSE2",
      Self::X86Avx2 => "x86_64 AVX2",
      Self::Aarch64Neon => "AArch64 NEON",
    }
  }
}

/// Tuning hints for kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tune {
  /// Which preset produced these values.
  pub kind: TuneKind,
  /// Minimum buffer length in bytes for vector kernels.
  pub simd_threshold: usize,
}

impl Tune {
  /// No vector kernels; the threshold is never reached.
  pub const PORTABLE: Self = Self { kind: TuneKind::Portable, simd_threshold: usize::MAX };

  /// x86_64 baseline (SSE2): two 128-bit loads per 32-byte chunk.
  pub const X86_SSE2: Self = Self { kind: TuneKind::X86Sse2, simd_threshold: 128 };

  /// x86_64 with AVX2: one 256-bit load per chunk, cheap to start.
  pub const X86_AVX2: Self = Self { kind: TuneKind::X86Avx2, simd_threshold: 64 };

  /// AArch64 with NEON.
  pub const AARCH64_NEON: Self = Self { kind: TuneKind::Aarch64Neon, simd_threshold: 64 };

  /// Build a custom tune (for overrides).
  #[inline]
  #[must_use]
  pub const fn custom(simd_threshold: usize) -> Self {
    Self { kind: TuneKind::Custom, simd_threshold }
  }

  /// Pick the preset matching a capability set.
  #[must_use]
  pub const fn for_caps(caps: crate::Caps) -> Self {
    use crate::caps::{aarch64, x86};

    if caps.has(x86::AVX2_READY) {
      Self::X86_AVX2
    } else if caps.has(x86::SSE2_READY) {
      Self::X86_SSE2
    } else if caps.has(aarch64::NEON_READY) {
      Self::AARCH64_NEON
    } else {
      Self::PORTABLE
    }
  }

  /// Returns the preset name.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.kind.name()
  }
}

impl Default for Tune {
  fn default() -> Self {
    Self::PORTABLE
  }
}
