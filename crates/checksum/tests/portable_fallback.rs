//! Tests verifying the portable fallback is always reachable.
//!
//! `NETSUM_FORCE_PORTABLE` is set before anything touches platform detection,
//! so every dispatcher in this test binary sees a CPU with no SIMD features.
//! The vector engine must then run its plain-Rust lane kernel, and results
//! must not change.

use checksum::{Checksum, InternetChecksum, KernelIntrospect};

fn force_portable() {
  use std::sync::Once;
  static INIT: Once = Once::new();
  INIT.call_once(|| {
    // SAFETY: runs once, before any other code in this binary reads the environment.
    unsafe { std::env::set_var("NETSUM_FORCE_PORTABLE", "1") };
  });
}

#[test]
fn caps_are_empty() {
  force_portable();
  assert!(platform::caps().is_empty(), "caps: {:?}", platform::caps());
}

#[test]
fn vector_engine_falls_back_to_lanes() {
  force_portable();
  assert_eq!(checksum::rfc1071::vector_backend(), "portable/lanes");
  assert_eq!(checksum::checksum_vector(b"hello"), 48173);
}

#[test]
fn auto_selection_never_picks_simd() {
  force_portable();
  for len in [0, 1, 64, 1024, 1 << 20] {
    let name = InternetChecksum::kernel_name_for_len(len);
    assert!(name.starts_with("portable") || name == "reference", "len={len} kernel={name}");
  }
}

#[test]
fn results_match_known_values() {
  force_portable();
  assert_eq!(InternetChecksum::checksum(b""), 0xFFFF);
  assert_eq!(InternetChecksum::checksum(&[0x05]), 0xFAFF);
  assert_eq!(InternetChecksum::checksum(b"hello"), 48173);
  assert_eq!(InternetChecksum::checksum(&[0xFF; 64]), 0x0000);
}

#[test]
fn engines_still_agree() {
  force_portable();
  let data: Vec<u8> = (0..5000u32).map(|i| (i * 7 + (i >> 5)) as u8).collect();
  for len in (0..data.len()).step_by(13) {
    let slice = &data[..len];
    assert_eq!(checksum::checksum_scalar(slice), checksum::checksum_vector(slice), "len={len}");
  }
}
