//! CPU detection.
//!
//! This module provides the unified [`get()`] function that returns detected
//! CPU capabilities and tuning hints. It handles:
//!
//! - Compile-time detection (via `cfg!(target_feature = "...")`)
//! - Runtime detection (via `std::arch::is_*_feature_detected!`)
//! - Caching (via `OnceLock` with `std`; without `std` only compile-time
//!   features are used, which needs no cache)
//! - User-supplied overrides for testing and bare metal
//! - The `NETSUM_FORCE_PORTABLE` environment switch
//! - Miri fallback (always portable)

use core::fmt;

use crate::{
  caps::{Arch, Caps},
  tune::Tune,
};

/// Environment variable that disables every SIMD capability when set to a
/// non-empty value.
pub const FORCE_PORTABLE_ENV: &str = "NETSUM_FORCE_PORTABLE";

/// Detection result: what the machine can do and what it prefers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Detected {
  /// Architecture the binary was compiled for.
  pub arch: Arch,
  /// Usable CPU features.
  pub caps: Caps,
  /// Tuning hints derived from `caps`.
  pub tune: Tune,
}

impl Detected {
  /// Detection result with no SIMD capabilities.
  pub const PORTABLE: Self = Self { arch: Arch::current(), caps: Caps::NONE, tune: Tune::PORTABLE };

  /// Build a detection result from a capability set, deriving the tune preset.
  #[inline]
  #[must_use]
  pub const fn from_caps(caps: Caps) -> Self {
    Self { arch: Arch::current(), caps, tune: Tune::for_caps(caps) }
  }
}

/// Reasons an override cannot be installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OverrideError {
  /// Detection already ran and its result has been cached.
  AlreadyInitialized,
  /// Overrides need `std` (no cache exists without it).
  Unsupported,
}

impl fmt::Display for OverrideError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::AlreadyInitialized => f.write_str("detection already initialized"),
      Self::Unsupported => f.write_str("overrides are not supported on this build"),
    }
  }
}

impl core::error::Error for OverrideError {}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Static Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Returns CPU capabilities known at compile time.
///
/// Detects features enabled via `-C target-feature=...` or
/// `-C target-cpu=native`. Evaluated in `const` context, so the compiler
/// eliminates every branch.
///
/// ```
/// use platform::detect::caps_static;
///
/// const CAPS: platform::Caps = caps_static();
///
/// #[cfg(target_arch = "x86_64")]
/// assert!(CAPS.has(platform::caps::x86::SSE2));
///
/// #[cfg(target_arch = "aarch64")]
/// assert!(CAPS.has(platform::caps::aarch64::NEON));
/// ```
#[inline(always)]
#[must_use]
pub const fn caps_static() -> Caps {
  #[allow(unused_macros)]
  macro_rules! detect {
    ($caps:ident; $($feature:literal => $cap:expr),+ $(,)?) => {
      $(if cfg!(target_feature = $feature) { $caps = $caps.union($cap); })+
    };
  }

  #[allow(unused_mut)]
  let mut result = Caps::NONE;

  #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
  {
    use crate::caps::x86;
    detect!(result;
      "sse2" => x86::SSE2,
      "avx" => x86::AVX,
      "avx2" => x86::AVX2,
    );
  }

  #[cfg(target_arch = "aarch64")]
  {
    use crate::caps::aarch64;
    detect!(result;
      "neon" => aarch64::NEON,
    );
  }

  result
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime Detection
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(all(feature = "std", any(target_arch = "x86_64", target_arch = "x86")))]
fn caps_runtime() -> Caps {
  use crate::caps::x86;

  let mut caps = caps_static();
  macro_rules! runtime_detect {
    ($($feature:tt => $cap:expr),+ $(,)?) => {
      $(if std::arch::is_x86_feature_detected!($feature) { caps |= $cap; })+
    };
  }
  runtime_detect!(
    "sse2" => x86::SSE2,
    "avx" => x86::AVX,
    "avx2" => x86::AVX2,
  );
  caps
}

#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn caps_runtime() -> Caps {
  use crate::caps::aarch64;

  let mut caps = caps_static();
  macro_rules! runtime_detect {
    ($($feature:tt => $cap:expr),+ $(,)?) => {
      $(if std::arch::is_aarch64_feature_detected!($feature) { caps |= $cap; })+
    };
  }
  runtime_detect!(
    "neon" => aarch64::NEON,
  );
  caps
}

#[cfg(not(all(feature = "std", any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64"))))]
fn caps_runtime() -> Caps {
  caps_static()
}

#[cfg(feature = "std")]
fn force_portable_requested() -> bool {
  std::env::var_os(FORCE_PORTABLE_ENV).is_some_and(|v| !v.is_empty())
}

#[cfg(not(feature = "std"))]
fn force_portable_requested() -> bool {
  false
}

/// Run detection without consulting the cache or any override.
#[cold]
#[must_use]
pub fn detect_uncached() -> Detected {
  if cfg!(miri) || force_portable_requested() {
    return Detected::PORTABLE;
  }
  Detected::from_caps(caps_runtime())
}

// ─────────────────────────────────────────────────────────────────────────────
// Cache + Override
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "std")]
mod cache {
  use std::sync::{OnceLock, RwLock};

  use super::{Detected, OverrideError, detect_uncached};

  static CACHE: OnceLock<Detected> = OnceLock::new();
  static OVERRIDE: RwLock<Option<Detected>> = RwLock::new(None);

  pub(super) fn get() -> Detected {
    *CACHE.get_or_init(|| {
      if let Ok(guard) = OVERRIDE.read()
        && let Some(ov) = *guard
      {
        return ov;
      }
      detect_uncached()
    })
  }

  pub(super) fn try_set_override(value: Option<Detected>) -> Result<(), OverrideError> {
    if CACHE.get().is_some() {
      return Err(OverrideError::AlreadyInitialized);
    }
    let mut guard = OVERRIDE.write().map_err(|_| OverrideError::Unsupported)?;
    *guard = value;
    Ok(())
  }

  pub(super) fn has_override() -> bool {
    OVERRIDE.read().map(|g| g.is_some()).unwrap_or(false)
  }
}

#[cfg(not(feature = "std"))]
mod cache {
  use super::{Detected, OverrideError, caps_static};

  pub(super) fn get() -> Detected {
    Detected::from_caps(caps_static())
  }

  pub(super) fn try_set_override(_value: Option<Detected>) -> Result<(), OverrideError> {
    Err(OverrideError::Unsupported)
  }

  pub(super) fn has_override() -> bool {
    false
  }
}

/// Cached detection result (override wins if installed before first use).
#[inline]
#[must_use]
pub fn get() -> Detected {
  cache::get()
}

/// Install (or clear, with `None`) a detection override.
///
/// Contract: pre-init only. Once [`get()`] has cached a result this returns
/// [`OverrideError::AlreadyInitialized`].
#[cold]
pub fn try_set_override(value: Option<Detected>) -> Result<(), OverrideError> {
  cache::try_set_override(value)
}

/// Check if an override is installed.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  cache::has_override()
}
