//! Combine fuzzing: `combine(ck(A), ck(B), len(A)) == ck(A || B)` at any split.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
  split: u16,
  data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
  let split = usize::from(input.split) % (input.data.len() + 1);
  let (a, b) = input.data.split_at(split);

  let combined = checksum::combine(checksum::checksum(a), checksum::checksum(b), a.len());
  assert_eq!(combined, checksum::checksum(input.data), "split={split} len={}", input.data.len());
});
