//! Optional diagnostics for kernel selection.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! explainable/debuggable kernel selection without affecting normal builds.

use backend::KernelTier;
use platform::TuneKind;

use crate::Rfc1071Force;

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// A forced mode was active (kernel selection bypassed normal thresholds).
  Forced,
  /// No hardware vector kernel exists for this CPU.
  NoSimd,
  /// Below the portable→SIMD transition threshold.
  BelowSimdThreshold,
  /// Normal auto selection.
  Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rfc1071SelectionDiag {
  pub len: usize,
  pub tune_kind: TuneKind,
  pub reason: SelectionReason,
  pub effective_force: Rfc1071Force,
  pub selected_kernel: &'static str,
  pub selected_tier: KernelTier,
  pub vector_kernel: &'static str,
  pub portable_to_simd: usize,
  pub has_simd: bool,
}

/// Diagnose RFC 1071 selection for `len`.
#[inline]
#[must_use]
pub fn rfc1071(len: usize) -> Rfc1071SelectionDiag {
  crate::rfc1071::diag(len)
}
