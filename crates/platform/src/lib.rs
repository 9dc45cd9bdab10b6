//! CPU detection, capabilities, and tuning for netsum.
//!
//! This crate is the single source of truth for CPU feature detection across
//! the netsum workspace.
//!
//! # Core Types
//!
//! - [`Caps`]: What instructions can run on this machine (capabilities)
//! - [`Tune`]: What strategies are optimal on this machine (tuning hints)
//!
//! # Main Entry Point
//!
//! ```
//! let detected = platform::get();
//!
//! if detected.caps.has(platform::caps::x86::AVX2_READY) {
//!   // 256-bit kernel
//! }
//! # let _ = detected.tune.simd_threshold;
//! ```
//!
//! # Design Philosophy
//!
//! 1. **One API**: Algorithms query `platform::get()` instead of doing ad-hoc detection.
//! 2. **Capabilities vs Tuning**: `Caps` says what's *possible*; `Tune` says what's *optimal*.
//! 3. **Zero-cost when possible**: Compile-time features are detected via `cfg!`.
//! 4. **Cached otherwise**: Runtime detection is cached in a `OnceLock`.
//! 5. **Miri-safe**: Under Miri, always returns portable-only caps.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
pub mod detect;
pub mod tune;

use core::fmt;

pub use caps::{Arch, Caps};
pub use detect::{Detected, OverrideError};
pub use tune::{Tune, TuneKind};

/// Get detected CPU capabilities and tuning hints.
///
/// With `std` the result is cached after the first call; without `std` it is
/// the compile-time capability set.
#[inline]
#[must_use]
pub fn get() -> Detected {
  detect::get()
}

/// Get just the CPU capabilities.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  get().caps
}

/// Get just the tuning hints.
#[inline]
#[must_use]
pub fn tune() -> Tune {
  get().tune
}

/// Install detection results ahead of first use.
///
/// Useful for testing the portable fallback on a SIMD machine, or for bare
/// metal targets where the CPU is known at deployment.
///
/// ```
/// // Fails if anything already called `platform::get()` in this process.
/// let _ = platform::try_set_override(Some(platform::Detected::PORTABLE));
/// ```
#[inline]
pub fn try_set_override(value: Option<Detected>) -> Result<(), OverrideError> {
  detect::try_set_override(value)
}

/// Check if an override is currently installed.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  detect::has_override()
}

/// Zero-allocation, printable summary of the detection result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Description {
  /// Compiled architecture.
  pub arch: Arch,
  /// Usable features.
  pub caps: Caps,
  /// Tuning preset in use.
  pub tune: TuneKind,
  /// Whether an override supplied these values.
  pub overridden: bool,
}

/// Describe the current detection result.
#[must_use]
pub fn describe() -> Description {
  let detected = get();
  Description { arch: detected.arch, caps: detected.caps, tune: detected.tune.kind, overridden: has_override() }
}

impl fmt::Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Caps({}, [", self.arch)?;
    for (i, name) in self.caps.feature_names().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      f.write_str(name)?;
    }
    write!(f, "]) ({})", self.tune.name())?;
    if self.overridden {
      f.write_str(" [override]")?;
    }
    Ok(())
  }
}
