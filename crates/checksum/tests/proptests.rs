//! Property tests through the public API.

use checksum::{Checksum, ChecksumCombine, InternetChecksum, checksum, checksum_scalar, checksum_vector, combine};
use proptest::prelude::*;

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn scalar_equals_vector(data in proptest::collection::vec(any::<u8>(), 0..=8192)) {
    prop_assert_eq!(checksum_scalar(&data), checksum_vector(&data));
  }

  #[test]
  fn auto_equals_scalar(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(checksum(&data), checksum_scalar(&data));
  }

  #[test]
  fn matches_independent_implementation(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    prop_assert_eq!(checksum(&data), u16::from_be_bytes(internet_checksum::checksum(&data)));
  }

  #[test]
  fn combine_at_any_split(data in proptest::collection::vec(any::<u8>(), 0..=1024), split in any::<prop::sample::Index>()) {
    let split = split.index(data.len() + 1);
    let (a, b) = data.split_at(split);
    prop_assert_eq!(combine(checksum(a), checksum(b), a.len()), checksum(&data));
  }

  #[test]
  fn vectored_equals_contiguous(parts in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..=64), 0..=8)) {
    let refs: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
    prop_assert_eq!(InternetChecksum::checksum_vectored(&refs), checksum(&parts.concat()));
  }

  #[test]
  fn embedding_the_checksum_verifies(mut data in proptest::collection::vec(any::<u8>(), 2..=512)) {
    data[0] = 0;
    data[1] = 0;
    let ck = checksum(&data);
    data[..2].copy_from_slice(&ck.to_be_bytes());
    prop_assert!(InternetChecksum::verify(&data).is_ok());
  }

  #[test]
  fn odd_tail_combines(data in proptest::collection::vec(any::<u8>(), 0..=512).prop_filter("odd", |d| d.len() % 2 == 1)) {
    let (prefix, last) = data.split_at(data.len() - 1);
    prop_assert_eq!(InternetChecksum::combine(checksum(prefix), checksum(last), prefix.len()), checksum(&data));
  }
}
