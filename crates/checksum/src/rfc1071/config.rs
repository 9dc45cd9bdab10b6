//! RFC 1071 runtime configuration (tunables + overrides).
//!
//! # Environment
//!
//! | Variable | Values |
//! |----------|--------|
//! | `NETSUM_RFC1071_FORCE` | `auto`, `reference`, `portable`/`scalar`, `vector`/`simd`, `sse2`, `avx2`, `neon` |
//! | `NETSUM_RFC1071_THRESHOLD_PORTABLE_TO_SIMD` | minimum length (bytes) for the vector engine in auto mode |
//!
//! Both are read once per process (with `std`). Unknown values are ignored.
//! Without `std` the configuration is [`STATIC`].

// Without `std` only `STATIC` is reachable outside tests.
#![cfg_attr(not(any(feature = "std", test)), allow(dead_code))]

use platform::{Caps, Tune};

/// Env var forcing a specific RFC 1071 backend.
pub const FORCE_ENV: &str = "NETSUM_RFC1071_FORCE";
/// Env var overriding the portable -> SIMD length threshold.
pub const THRESHOLD_ENV: &str = "NETSUM_RFC1071_THRESHOLD_PORTABLE_TO_SIMD";

/// Forced backend selection for RFC 1071.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rfc1071Force {
  /// Use the default auto selector.
  #[default]
  Auto,
  /// Force the fold-per-word reference implementation (slow, obviously correct).
  Reference,
  /// Force the portable scalar engine.
  Portable,
  /// Force the best vector engine for every length.
  Vector,
  /// Force the SSE2 kernel (x86_64).
  Sse2,
  /// Force the AVX2 kernel (x86_64).
  Avx2,
  /// Force the NEON kernel (aarch64).
  Neon,
}

impl Rfc1071Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Reference => "reference",
      Self::Portable => "portable",
      Self::Vector => "vector",
      Self::Sse2 => "sse2",
      Self::Avx2 => "avx2",
      Self::Neon => "neon",
    }
  }

  /// Parse a force mode, case-insensitively. Returns `None` for unknown values.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("reference") {
      return Some(Self::Reference);
    }
    if value.eq_ignore_ascii_case("portable") || value.eq_ignore_ascii_case("scalar") {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("vector") || value.eq_ignore_ascii_case("simd") {
      return Some(Self::Vector);
    }
    if value.eq_ignore_ascii_case("sse2") {
      return Some(Self::Sse2);
    }
    if value.eq_ignore_ascii_case("avx2") {
      return Some(Self::Avx2);
    }
    if value.eq_ignore_ascii_case("neon") {
      return Some(Self::Neon);
    }
    None
  }
}

/// RFC 1071 selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rfc1071Tunables {
  /// Minimum `len` in bytes to use the vector engine (otherwise portable).
  pub portable_to_simd: usize,
}

/// Full RFC 1071 runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rfc1071Config {
  /// Force mode clamped to detected CPU capabilities.
  pub effective_force: Rfc1071Force,
  /// Tunables used by the selector.
  pub tunables: Rfc1071Tunables,
}

/// Auto-mode configuration derived from compile-time target features.
#[cfg_attr(all(feature = "std", not(test)), allow(dead_code))]
pub const STATIC: Rfc1071Config = {
  let threshold = Tune::for_caps(platform::detect::caps_static()).simd_threshold;
  Rfc1071Config {
    effective_force: Rfc1071Force::Auto,
    tunables: Rfc1071Tunables { portable_to_simd: if threshold == 0 { 1 } else { threshold } },
  }
};

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Rfc1071Force,
  portable_to_simd: Option<usize>,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    let value = std::env::var(name).ok()?;
    if value.trim().is_empty() { None } else { Some(value) }
  }

  Overrides {
    force: var(FORCE_ENV).and_then(|v| Rfc1071Force::parse(&v)).unwrap_or_default(),
    portable_to_simd: var(THRESHOLD_ENV).and_then(|v| v.trim().parse::<usize>().ok()),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Clamp a requested force mode to what the CPU supports.
///
/// Requests for an unavailable kernel fall back to [`Rfc1071Force::Auto`].
#[inline]
#[must_use]
#[allow(unused_variables)] // `caps` only used on x86_64/aarch64
pub fn clamp_force_to_caps(requested: Rfc1071Force, caps: Caps) -> Rfc1071Force {
  match requested {
    Rfc1071Force::Auto | Rfc1071Force::Reference | Rfc1071Force::Portable | Rfc1071Force::Vector => requested,
    Rfc1071Force::Sse2 => {
      #[cfg(target_arch = "x86_64")]
      {
        if caps.has(platform::caps::x86::SSE2_READY) {
          return Rfc1071Force::Sse2;
        }
      }
      Rfc1071Force::Auto
    }
    Rfc1071Force::Avx2 => {
      #[cfg(target_arch = "x86_64")]
      {
        if caps.has(platform::caps::x86::AVX2_READY) {
          return Rfc1071Force::Avx2;
        }
      }
      Rfc1071Force::Auto
    }
    Rfc1071Force::Neon => {
      #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
      {
        if caps.has(platform::caps::aarch64::NEON_READY) {
          return Rfc1071Force::Neon;
        }
      }
      Rfc1071Force::Auto
    }
  }
}

#[inline]
#[must_use]
fn config_with(ov: Overrides, caps: Caps, tune: Tune) -> Rfc1071Config {
  let portable_to_simd = ov.portable_to_simd.unwrap_or(tune.simd_threshold).max(1);
  Rfc1071Config {
    effective_force: clamp_force_to_caps(ov.force, caps),
    tunables: Rfc1071Tunables { portable_to_simd },
  }
}

/// Compute the configuration for explicit capabilities and tuning.
#[inline]
#[must_use]
pub fn config(caps: Caps, tune: Tune) -> Rfc1071Config {
  config_with(overrides(), caps, tune)
}

/// Cached process-wide RFC 1071 configuration.
#[inline]
#[must_use]
pub fn get() -> Rfc1071Config {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<Rfc1071Config> = OnceLock::new();
    *CACHED.get_or_init(|| config(platform::caps(), platform::tune()))
  }

  #[cfg(not(feature = "std"))]
  {
    STATIC
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_is_case_insensitive_with_aliases() {
    assert_eq!(Rfc1071Force::parse("AUTO"), Some(Rfc1071Force::Auto));
    assert_eq!(Rfc1071Force::parse(" Scalar "), Some(Rfc1071Force::Portable));
    assert_eq!(Rfc1071Force::parse("simd"), Some(Rfc1071Force::Vector));
    assert_eq!(Rfc1071Force::parse("Avx2"), Some(Rfc1071Force::Avx2));
    assert_eq!(Rfc1071Force::parse("neon"), Some(Rfc1071Force::Neon));
    assert_eq!(Rfc1071Force::parse("avx512"), None);
  }

  #[test]
  fn as_str_round_trips_through_parse() {
    for force in [
      Rfc1071Force::Auto,
      Rfc1071Force::Reference,
      Rfc1071Force::Portable,
      Rfc1071Force::Vector,
      Rfc1071Force::Sse2,
      Rfc1071Force::Avx2,
      Rfc1071Force::Neon,
    ] {
      assert_eq!(Rfc1071Force::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn unsupported_force_clamps_to_auto() {
    assert_eq!(clamp_force_to_caps(Rfc1071Force::Avx2, Caps::NONE), Rfc1071Force::Auto);
    assert_eq!(clamp_force_to_caps(Rfc1071Force::Sse2, Caps::NONE), Rfc1071Force::Auto);
    assert_eq!(clamp_force_to_caps(Rfc1071Force::Neon, Caps::NONE), Rfc1071Force::Auto);
    assert_eq!(clamp_force_to_caps(Rfc1071Force::Reference, Caps::NONE), Rfc1071Force::Reference);
    assert_eq!(clamp_force_to_caps(Rfc1071Force::Vector, Caps::NONE), Rfc1071Force::Vector);
  }

  #[cfg(target_arch = "x86_64")]
  #[test]
  fn supported_force_is_kept() {
    use platform::caps::x86;
    assert_eq!(clamp_force_to_caps(Rfc1071Force::Avx2, x86::AVX2_READY), Rfc1071Force::Avx2);
    assert_eq!(clamp_force_to_caps(Rfc1071Force::Sse2, x86::SSE2), Rfc1071Force::Sse2);
  }

  #[test]
  fn threshold_defaults_to_tune_and_is_at_least_one() {
    let cfg = config_with(Overrides::default(), Caps::NONE, Tune::custom(96));
    assert_eq!(cfg.tunables.portable_to_simd, 96);

    let ov = Overrides { portable_to_simd: Some(0), ..Overrides::default() };
    let cfg = config_with(ov, Caps::NONE, Tune::custom(96));
    assert_eq!(cfg.tunables.portable_to_simd, 1);
  }

  #[test]
  fn static_config_follows_compile_time_tune() {
    let tune = Tune::for_caps(platform::detect::caps_static());
    assert_eq!(STATIC.effective_force, Rfc1071Force::Auto);
    assert_eq!(STATIC.tunables.portable_to_simd, tune.simd_threshold.max(1));
    #[cfg(not(feature = "std"))]
    assert_eq!(get(), STATIC);
  }

  #[test]
  fn force_override_is_clamped() {
    let ov = Overrides { force: Rfc1071Force::Avx2, portable_to_simd: None };
    let cfg = config_with(ov, Caps::NONE, Tune::PORTABLE);
    assert_eq!(cfg.effective_force, Rfc1071Force::Auto);
  }
}
