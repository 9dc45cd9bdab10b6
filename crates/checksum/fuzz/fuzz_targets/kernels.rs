//! Cross-kernel equivalence fuzzing for RFC 1071.
//!
//! Verifies that ALL available kernels on the current platform produce
//! identical results for any input. This catches:
//!
//! - SIMD kernel bugs (chunk boundaries, tail handling, byte order)
//! - Lane accumulation and reduction errors
//! - Dispatch issues between the scalar and vector engines
//!
//! The oracle is the fold-per-word reference implementation.

#![no_main]

use checksum::__internal::kernel_test::{run_all_rfc1071_kernels, verify_rfc1071_kernels};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let results = run_all_rfc1071_kernels(data);

  if results.len() >= 2 {
    let expected = results[0].checksum;
    for result in &results[1..] {
      assert_eq!(
        result.checksum, expected,
        "rfc1071 kernel mismatch: {} produced 0x{:04X}, but {} produced 0x{:04X}, len={}",
        result.name, result.checksum, results[0].name, expected, data.len()
      );
    }
  }

  verify_rfc1071_kernels(data).expect("rfc1071 kernel verification failed");
  assert_eq!(checksum::checksum_scalar(data), checksum::checksum_vector(data));
});
