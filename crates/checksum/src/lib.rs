//! RFC 1071 Internet checksum with hardware acceleration.
//!
//! This crate computes the one's-complement, end-around-carry 16-bit sum used
//! by the IPv4, TCP, UDP and ICMP headers. Every engine produces bit-identical
//! results; the fastest one available on the running CPU is selected once and
//! cached.
//!
//! # Engines
//!
//! | Kernel | Tier | Width | Notes |
//! |--------|------|-------|-------|
//! | `reference` | Reference | 16-bit | Fold after every word; test oracle |
//! | `portable` | Portable | 64-bit | End-around-carry scalar; universal fallback |
//! | `portable/lanes` | Portable | 16 x 32-bit | Vector algorithm in plain Rust |
//! | `x86_64/sse2` | Simd | 2 x 128-bit | x86_64 baseline |
//! | `x86_64/avx2` | Wide | 256-bit | Haswell and newer |
//! | `aarch64/neon` | Simd | 2 x 128-bit | aarch64 baseline |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, ChecksumCombine, InternetChecksum};
//!
//! let ck = checksum::checksum(b"hello");
//! assert_eq!(ck, 48173);
//!
//! // The scalar and vector engines always agree.
//! assert_eq!(checksum::checksum_scalar(b"hello"), checksum::checksum_vector(b"hello"));
//!
//! // Checksums of adjacent buffers combine.
//! let (a, b) = b"hello".split_at(3);
//! let combined = InternetChecksum::combine(InternetChecksum::checksum(a), InternetChecksum::checksum(b), a.len());
//! assert_eq!(combined, ck);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, kernel selection uses only compile-time target features.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;

#[cfg(feature = "diag")]
pub mod diag;
pub mod dispatchers;
mod introspect;
pub mod rfc1071;

#[doc(hidden)]
pub mod __internal {
  #[cfg(feature = "alloc")]
  pub use crate::rfc1071::kernel_test;
}

pub use introspect::{DispatchInfo, KernelIntrospect, is_hardware_accelerated, kernel_for, platform_describe};
pub use rfc1071::{
  InternetChecksum, Rfc1071Force, checksum, checksum_scalar, checksum_vector, combine, selected_backend, verify,
};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine, VerificationError};
