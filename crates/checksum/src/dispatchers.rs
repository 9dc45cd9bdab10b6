//! Dispatcher types for the Internet checksum.
//!
//! Each dispatcher caches kernel selection for efficient repeated calls.
//!
//! # Usage
//!
//! ```
//! use backend::dispatch::{Candidate, Selected, select};
//! use checksum::dispatchers::{Rfc1071Dispatcher, Rfc1071Fn};
//! use platform::Caps;
//!
//! fn portable(data: &[u8]) -> u16 {
//!   checksum::checksum_scalar(data)
//! }
//!
//! fn pick() -> Selected<Rfc1071Fn> {
//!   let candidates: &[Candidate<Rfc1071Fn>] = &[Candidate::new("portable", Caps::NONE, portable)];
//!   select(platform::caps(), candidates).unwrap_or(Selected::new("portable", portable))
//! }
//!
//! static DISPATCHER: Rfc1071Dispatcher = Rfc1071Dispatcher::new(pick);
//! assert_eq!((DISPATCHER.get().func)(b"hello"), 48173);
//! ```

use backend::Dispatcher;

/// Function signature for RFC 1071 kernels.
///
/// Kernels are one-shot: they take the whole buffer and return the finished
/// (complemented) checksum.
pub type Rfc1071Fn = fn(&[u8]) -> u16;

/// Dispatcher for RFC 1071 kernels.
///
/// Caches the selected kernel on first access. Thread-safe.
pub type Rfc1071Dispatcher = Dispatcher<Rfc1071Fn>;
