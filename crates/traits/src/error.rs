//! Error types shared by the checksum crates.
//!
//! Minimal, opaque error types. Individual crates may define additional
//! errors as needed.

use core::fmt;

/// Verification failed.
///
/// Returned when a buffer that embeds its own checksum (an IPv4 header, a UDP
/// datagram with its pseudo-header) does not verify. Carries no details: the
/// caller already holds the buffer and can recompute anything it needs.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(folded_sum: u16) -> Result<(), VerificationError> {
///   if folded_sum == 0xFFFF {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(verify(0xFFFF).is_ok());
/// assert!(verify(0x1234).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}
