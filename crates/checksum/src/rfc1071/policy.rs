//! RFC 1071 policy computation and kernel dispatch.
//!
//! The policy is computed once from:
//! - [`Rfc1071Config`] - user overrides and tunables
//! - the vector kernel chosen by the capability-checked dispatcher
//!
//! The resulting [`Rfc1071Policy`] is cached and used for all dispatch
//! decisions. The only per-call work is one length comparison in auto mode.

use backend::Selected;
use platform::Caps;

use super::{
  config::{Rfc1071Config, Rfc1071Force},
  kernels, portable,
};
use crate::{common::reference::rfc1071_reference, dispatchers::Rfc1071Fn};

/// RFC 1071 selection policy.
#[derive(Clone, Copy, Debug)]
pub struct Rfc1071Policy {
  /// Effective force mode after clamping to capabilities.
  #[cfg_attr(not(any(feature = "diag", test)), allow(dead_code))]
  pub effective_force: Rfc1071Force,
  /// Threshold for the portable -> vector transition.
  pub portable_to_simd: usize,
  /// Best vector kernel for this CPU.
  pub vector: Selected<Rfc1071Fn>,
  /// Kernel used for every length when a force mode is active.
  forced: Option<Selected<Rfc1071Fn>>,
}

impl Rfc1071Policy {
  /// Create a policy from configuration and the selected vector kernel.
  ///
  /// A forced kernel whose requirements `caps` does not satisfy is ignored and
  /// the policy behaves as [`Rfc1071Force::Auto`].
  #[cfg_attr(not(any(feature = "std", test)), allow(dead_code))]
  #[must_use]
  pub fn from_config(cfg: &Rfc1071Config, caps: Caps, vector: Selected<Rfc1071Fn>) -> Self {
    let forced = match cfg.effective_force {
      Rfc1071Force::Auto => None,
      Rfc1071Force::Reference => Some(Selected::new(kernels::REFERENCE, rfc1071_reference as Rfc1071Fn)),
      Rfc1071Force::Portable => Some(portable_kernel()),
      Rfc1071Force::Vector => Some(vector),
      Rfc1071Force::Sse2 | Rfc1071Force::Avx2 | Rfc1071Force::Neon => named(forced_name(cfg.effective_force), caps),
    };
    let effective_force = if forced.is_some() { cfg.effective_force } else { Rfc1071Force::Auto };

    Self { effective_force, portable_to_simd: cfg.tunables.portable_to_simd, vector, forced }
  }

  /// Auto-mode policy, usable in `const` context.
  #[cfg_attr(all(feature = "std", not(test)), allow(dead_code))]
  #[must_use]
  pub const fn auto(portable_to_simd: usize, vector: Selected<Rfc1071Fn>) -> Self {
    Self { effective_force: Rfc1071Force::Auto, portable_to_simd, vector, forced: None }
  }

  /// Whether a hardware vector kernel is available.
  #[inline]
  #[must_use]
  pub fn has_simd(&self) -> bool {
    self.vector.name != kernels::PORTABLE_LANES
  }

  /// Whether the vector engine is used for this length.
  #[inline]
  #[must_use]
  pub fn should_use_simd(&self, len: usize) -> bool {
    self.has_simd() && len >= self.portable_to_simd
  }

  /// Select the kernel for a buffer of `len` bytes.
  #[inline]
  #[must_use]
  pub fn select(&self, len: usize) -> Selected<Rfc1071Fn> {
    if let Some(forced) = self.forced {
      return forced;
    }
    if self.should_use_simd(len) { self.vector } else { portable_kernel() }
  }

  /// Kernel name for a buffer of `len` bytes.
  #[inline]
  #[must_use]
  pub fn kernel_name(&self, len: usize) -> &'static str {
    self.select(len).name
  }
}

#[inline]
fn portable_kernel() -> Selected<Rfc1071Fn> {
  Selected::new(kernels::PORTABLE, portable::rfc1071_portable as Rfc1071Fn)
}

fn forced_name(force: Rfc1071Force) -> &'static str {
  match force {
    #[cfg(target_arch = "x86_64")]
    Rfc1071Force::Sse2 => kernels::x86_64::SSE2,
    #[cfg(target_arch = "x86_64")]
    Rfc1071Force::Avx2 => kernels::x86_64::AVX2,
    #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
    Rfc1071Force::Neon => kernels::aarch64::NEON,
    _ => kernels::PORTABLE_LANES,
  }
}

/// Look up a vector candidate by name, if `caps` satisfies its requirements.
fn named(name: &str, caps: Caps) -> Option<Selected<Rfc1071Fn>> {
  kernels::VECTOR_CANDIDATES
    .iter()
    .find(|c| c.name == name && caps.has(c.requires))
    .map(|c| Selected::new(c.name, c.func))
}
