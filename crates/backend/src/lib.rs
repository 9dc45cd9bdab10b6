//! Backend crate: kernel selection and dispatch for netsum.
//!
//! - **Tiers**: [`KernelTier`] classifies kernels from reference to wide SIMD
//! - **Dispatch**: Compile-time or cached (runtime) kernel selection
//!
//! # Architecture
//!
//! The dispatch system has two paths:
//!
//! 1. **Compile-time selection** (zero-cost): When target features are known at compile time (`-C
//!    target-feature=...`), the algorithm crate resolves to a direct function call with `cfg!`.
//!
//! 2. **Runtime selection** (cached): For generic binaries, the [`Dispatcher`] runs its selector once
//!    and caches the chosen kernel. Subsequent calls are a single indirect call.
//!
//! # Usage
//!
//! ```
//! use backend::dispatch::{Candidate, Dispatcher, Selected, select};
//! use platform::caps::{Caps, x86};
//!
//! type SumFn = fn(&[u8]) -> u16;
//!
//! fn scalar(_: &[u8]) -> u16 { 0xFFFF }
//! fn wide(_: &[u8]) -> u16 { 0xFFFF }
//!
//! fn pick() -> Selected<SumFn> {
//!   let candidates: &[Candidate<SumFn>] = &[
//!     Candidate::new("x86_64/avx2", x86::AVX2_READY, wide),
//!     Candidate::new("portable", Caps::NONE, scalar),
//!   ];
//!   select(platform::caps(), candidates).unwrap_or(Selected::new("portable", scalar))
//! }
//!
//! static DISPATCH: Dispatcher<SumFn> = Dispatcher::new(pick);
//! assert_eq!((DISPATCH.get().func)(b""), 0xFFFF);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod dispatch;
pub mod tier;

pub use dispatch::{Candidate, Dispatcher, Selected, select};
// Re-export platform types for convenience.
pub use platform;
pub use tier::KernelTier;
