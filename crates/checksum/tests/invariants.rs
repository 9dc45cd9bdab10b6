//! Checksum invariants through the public API.

use checksum::{
  Checksum, ChecksumCombine, InternetChecksum, checksum, checksum_scalar, checksum_vector, combine, verify,
};

// ─────────────────────────────────────────────────────────────────────────────
// Known Values
// ─────────────────────────────────────────────────────────────────────────────

/// IPv4 header with the checksum field zeroed.
const IPV4_HEADER: [u8; 20] = [
  0x45, 0x00, 0x00, 0x73, 0x00, 0x00, 0x40, 0x00, 0x40, 0x11, 0x00, 0x00, 0xC0, 0xA8, 0x00, 0x01, 0xC0, 0xA8, 0x00, 0xC7,
];
const IPV4_HEADER_CHECKSUM: u16 = 0xB861;

#[test]
fn empty_input() {
  assert_eq!(checksum(b""), 0xFFFF);
}

#[test]
fn single_byte_is_high_half() {
  assert_eq!(checksum(&[0x05]), 0xFAFF);
}

#[test]
fn hello() {
  assert_eq!(checksum(b"hello"), 48173);
}

#[test]
fn ipv4_header() {
  let result = checksum(&IPV4_HEADER);
  assert_eq!(result, IPV4_HEADER_CHECKSUM, "got {result:#06X}, expected {IPV4_HEADER_CHECKSUM:#06X}");
}

#[test]
fn saturated_sum_folds_to_zero() {
  // 32 words of 0xFFFF sum to 0xFFFF after folding.
  assert_eq!(checksum(&[0xFF; 64]), 0x0000);
  assert_eq!(checksum_scalar(&[0xFF; 64]), 0x0000);
  assert_eq!(checksum_vector(&[0xFF; 64]), 0x0000);
}

#[test]
fn all_zero_input_is_not_confused_with_saturated() {
  for len in [2, 32, 64, 1000] {
    assert_eq!(checksum(&vec![0u8; len]), 0xFFFF, "len={len}");
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine Equivalence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn engines_agree_on_every_length_up_to_8k() {
  let data: Vec<u8> = (0..8192u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
  for len in 0..=data.len() {
    let slice = &data[..len];
    assert_eq!(checksum_scalar(slice), checksum_vector(slice), "len={len}");
  }
}

#[test]
fn engines_agree_on_large_saturated_input() {
  // Beyond one lane spill interval (32768 chunks of 32 bytes).
  let data = vec![0xFFu8; (1 << 20) + 32 * 3 + 5];
  assert_eq!(checksum_scalar(&data), checksum_vector(&data));
  assert_eq!(checksum(&data), checksum_scalar(&data));
}

#[test]
fn matches_independent_implementation() {
  let data: Vec<u8> = (0..3000u32).map(|i| (i ^ (i >> 3)) as u8).collect();
  for len in (0..data.len()).step_by(11) {
    let slice = &data[..len];
    let expected = u16::from_be_bytes(internet_checksum::checksum(slice));
    assert_eq!(checksum(slice), expected, "len={len}");
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Combine / Verify
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn odd_length_tail_combines() {
  let data = b"an odd-length buffer!";
  assert_eq!(data.len() % 2, 1);
  let (prefix, last) = data.split_at(data.len() - 1);
  assert_eq!(combine(checksum(prefix), checksum(last), prefix.len()), checksum(data));
}

#[test]
fn trait_combine_matches_free_function() {
  let (a, b) = (b"abc".as_slice(), b"defgh".as_slice());
  assert_eq!(
    InternetChecksum::combine(InternetChecksum::checksum(a), InternetChecksum::checksum(b), a.len()),
    combine(checksum(a), checksum(b), a.len())
  );
}

#[test]
fn vectored_over_many_small_buffers() {
  let parts: Vec<Vec<u8>> = (0..17u8).map(|i| vec![i; usize::from(i % 5)]).collect();
  let refs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
  let flat: Vec<u8> = parts.concat();
  assert_eq!(InternetChecksum::checksum_vectored(&refs), checksum(&flat));
}

#[test]
fn verify_embedded_checksum() {
  let mut header = IPV4_HEADER;
  header[10..12].copy_from_slice(&IPV4_HEADER_CHECKSUM.to_be_bytes());
  assert!(verify(&header).is_ok());

  header[8] = 0x3F; // TTL changed, checksum stale
  let err = verify(&header).unwrap_err();
  assert_eq!(err.to_string(), checksum::VerificationError::new().to_string());
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Surface
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn force_modes_and_env_names_are_public() {
  use checksum::{Rfc1071Force, rfc1071};

  assert_eq!(rfc1071::FORCE_ENV, "NETSUM_RFC1071_FORCE");
  assert_eq!(rfc1071::THRESHOLD_ENV, "NETSUM_RFC1071_THRESHOLD_PORTABLE_TO_SIMD");
  assert_eq!(Rfc1071Force::parse("AVX2"), Some(Rfc1071Force::Avx2));
  assert_eq!(Rfc1071Force::default().as_str(), "auto");
}
