//! Property tests for the RFC 1071 kernels.

use alloc::vec::Vec;

use proptest::prelude::*;

use super::{combine, kernel_test::verify_rfc1071_kernels, portable};
use crate::common::{fold::fold32, reference::rfc1071_reference};

proptest! {
  #[test]
  fn portable_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(portable::rfc1071_portable(&data), rfc1071_reference(&data));
  }

  #[test]
  fn lanes_match_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(portable::rfc1071_lanes(&data), rfc1071_reference(&data));
  }

  #[test]
  fn all_kernels_agree(data in proptest::collection::vec(any::<u8>(), 0..=8192)) {
    prop_assert!(verify_rfc1071_kernels(&data).is_ok());
  }

  #[test]
  fn all_kernels_agree_at_offsets(
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    offset in 0usize..32,
  ) {
    let offset = offset.min(data.len());
    prop_assert!(verify_rfc1071_kernels(&data[offset..]).is_ok());
  }

  #[test]
  fn combine_matches_concatenation(
    a in proptest::collection::vec(any::<u8>(), 0..=300),
    b in proptest::collection::vec(any::<u8>(), 0..=300),
  ) {
    let mut ab: Vec<u8> = a.clone();
    ab.extend_from_slice(&b);
    let combined = combine(rfc1071_reference(&a), rfc1071_reference(&b), a.len());
    prop_assert_eq!(combined, rfc1071_reference(&ab));
  }

  #[test]
  fn fold_is_idempotent(v in any::<u32>()) {
    let once = fold32(v);
    prop_assert_eq!(fold32(u32::from(once)), once);
  }
}
