//! One's-complement folding.
//!
//! A fold replaces `sum` with `(sum & 0xFFFF) + (sum >> 16)`. Because
//! `2^16 ≡ 1 (mod 0xFFFF)`, folding changes the representation of an
//! end-around-carry sum but never its value modulo `0xFFFF`, and a non-zero
//! sum never folds to zero. Every kernel may therefore fold as rarely as its
//! accumulator width allows and still match the fold-per-word reference.
//!
//! Kernels that load words in native byte order finish with [`to_network`]
//! (RFC 1071 section 2(B)).

/// Fold a 32-bit end-around-carry sum to 16 bits.
#[inline]
#[must_use]
pub const fn fold32(mut sum: u32) -> u16 {
  while sum > 0xFFFF {
    sum = (sum & 0xFFFF) + (sum >> 16);
  }
  sum as u16
}

/// Fold a 64-bit end-around-carry sum to 16 bits.
#[inline]
#[must_use]
pub const fn fold64(sum: u64) -> u16 {
  // 64 -> 33 bits -> 18 bits, then the 32-bit loop finishes.
  let sum = (sum & 0xFFFF_FFFF) + (sum >> 32);
  let sum = (sum & 0xFFFF) + (sum >> 16);
  fold32(sum as u32)
}

/// Add two 64-bit partial sums with end-around carry.
#[inline(always)]
#[must_use]
#[allow(clippy::cast_lossless)] // `u64::from` is not const
pub const fn add64(a: u64, b: u64) -> u64 {
  let (sum, carry) = a.overflowing_add(b);
  sum + carry as u64
}

/// Convert a folded sum of native-order words into network byte order.
///
/// On little-endian targets this is a byte swap: swapping the bytes of every
/// word multiplies the sum by `2^8` modulo `0xFFFF`, and so does swapping the
/// folded result.
#[inline(always)]
#[must_use]
pub const fn to_network(folded: u16) -> u16 {
  folded.to_be()
}

/// Sum `data` as big-endian words, an odd final byte taking the high half.
///
/// Used for sub-chunk tails; `data` is expected to be short, but any length is
/// exact.
#[inline]
#[must_use]
pub fn sum_be_words(data: &[u8]) -> u64 {
  let (pairs, odd) = data.as_chunks::<2>();
  let mut sum = 0u64;
  for pair in pairs {
    sum = add64(sum, u64::from(u16::from_be_bytes(*pair)));
  }
  if let Some(&last) = odd.first() {
    sum = add64(sum, u64::from(last) << 8);
  }
  sum
}

/// Combine a native-order bulk sum with a tail, fold and complement.
///
/// `bulk` is the end-around-carry sum of native-order words covering a prefix
/// of even length; `tail` is the remaining bytes.
#[inline]
#[must_use]
pub fn finish(bulk: u64, tail: &[u8]) -> u16 {
  let bulk = to_network(fold64(bulk));
  !fold64(add64(u64::from(bulk), sum_be_words(tail)))
}
