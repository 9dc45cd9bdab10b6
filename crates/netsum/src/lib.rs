//! The RFC 1071 Internet checksum, hardware accelerated.
//!
//! `netsum` computes the one's-complement checksum used by IPv4, TCP, UDP and
//! ICMP with automatic CPU feature detection and kernel selection. `no_std`
//! compatible, and SIMD-accelerated on x86_64 (SSE2, AVX2) and aarch64 (NEON).
//!
//! # Quick Start
//!
//! ```
//! use netsum::{Checksum, InternetChecksum};
//!
//! let ck = netsum::checksum(b"hello");
//! assert_eq!(ck, 48173);
//! assert_eq!(InternetChecksum::checksum(b"hello"), ck);
//!
//! // Both engines agree on every input.
//! assert_eq!(netsum::checksum_scalar(b"hello"), netsum::checksum_vector(b"hello"));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables runtime CPU detection for optimal dispatch |
//! | `alloc` | Yes | Enables the kernel test harness (implied by `std`) |
//! | `diag` | No | Explains kernel selection decisions |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! netsum = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, hardware acceleration uses compile-time feature detection only.
#![cfg_attr(not(feature = "std"), no_std)]

pub use checksum::{
  // Traits
  Checksum,
  ChecksumCombine,
  // Internet checksum
  InternetChecksum,
  Rfc1071Force,
  VerificationError,
  checksum,
  checksum_scalar,
  checksum_vector,
  combine,
  // Introspection
  DispatchInfo,
  KernelIntrospect,
  is_hardware_accelerated,
  kernel_for,
  platform_describe,
  selected_backend,
  verify,
};
#[cfg(feature = "diag")]
pub use checksum::diag;

/// CPU detection and overrides.
pub mod platform {
  pub use ::platform::{Caps, Detected, Description, OverrideError, caps, describe, has_override, try_set_override};
}
