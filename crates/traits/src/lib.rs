//! Core checksum traits for netsum.
//!
//! This crate provides the foundational traits that the netsum checksum
//! engines conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | One-shot checksums over a complete buffer | RFC 1071 Internet checksum |
//! | [`ChecksumCombine`] | Joining checksums of adjacent buffers | RFC 1071 (one's-complement add) |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for "embedded checksum does not verify"
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::VerificationError;
