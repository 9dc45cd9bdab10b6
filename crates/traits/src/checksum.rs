//! Checksum traits.
//!
//! - **Performance**: Zero-cost abstractions, inline-friendly
//! - **One-shot**: The whole buffer is available up front
//! - **Parallelism**: Combine operation for independently computed parts

use core::fmt::Debug;

use crate::VerificationError;

/// Checksum algorithm over a complete byte buffer.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, InternetChecksum};
///
/// let sum = InternetChecksum::checksum(b"hello");
/// assert_eq!(sum, 48173);
/// ```
///
/// # Implementor Requirements
///
/// - `checksum()` must be a pure, total function of its input
/// - every backend an implementor selects must produce the same output
pub trait Checksum {
  /// Output size in bytes.
  ///
  /// - RFC 1071: 2
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Compute the checksum of `data`.
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output;

  /// Compute the checksum of several buffers laid out back to back.
  ///
  /// Equivalent to concatenating `bufs` and calling [`checksum`](Self::checksum),
  /// without the copy. Available for algorithms that implement [`ChecksumCombine`].
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output
  where
    Self: ChecksumCombine,
  {
    let mut acc = Self::checksum(&[]);
    let mut len = 0usize;
    for buf in bufs {
      acc = Self::combine(acc, Self::checksum(buf), len);
      len = len.wrapping_add(buf.len());
    }
    acc
  }

  /// Check a buffer that carries its own checksum.
  ///
  /// Returns [`VerificationError`] when the buffer does not verify.
  fn verify(data: &[u8]) -> Result<(), VerificationError>;
}

/// Checksums whose values for adjacent buffers can be joined.
///
/// The combine operation computes `sum(A || B)` from `sum(A)`, `sum(B)`, and
/// `len(A)`. This enables computing parts of a large buffer independently
/// (for example on different threads) and joining the results.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, ChecksumCombine, InternetChecksum};
///
/// let data = b"hello world";
/// let (a, b) = data.split_at(5);
///
/// let sum_a = InternetChecksum::checksum(a);
/// let sum_b = InternetChecksum::checksum(b);
///
/// let combined = InternetChecksum::combine(sum_a, sum_b, a.len());
/// assert_eq!(combined, InternetChecksum::checksum(data));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// Given `sum_a = checksum(A)` and `sum_b = checksum(B)`, computes
  /// `checksum(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `sum_a` - Checksum of the first part (A)
  /// * `sum_b` - Checksum of the second part (B)
  /// * `len_a` - Length of the first part in bytes
  #[must_use]
  fn combine(sum_a: Self::Output, sum_b: Self::Output, len_a: usize) -> Self::Output;
}
