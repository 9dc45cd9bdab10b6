//! Basic usage: checksum, verify, and combine.
//!
//! Run: `cargo run -p checksum --example basic`

use checksum::{Checksum, ChecksumCombine, InternetChecksum};

fn main() {
  // An ICMP echo request with a zeroed checksum field.
  let mut packet = [0x08, 0x00, 0x00, 0x00, 0x12, 0x34, 0x00, 0x01, b'p', b'i', b'n', b'g'];

  let ck = InternetChecksum::checksum(&packet);
  println!("icmp checksum: {ck:#06x}");

  packet[2..4].copy_from_slice(&ck.to_be_bytes());
  match InternetChecksum::verify(&packet) {
    Ok(()) => println!("packet verifies"),
    Err(e) => println!("packet rejected: {e}"),
  }

  // Header and payload checksummed separately, then combined.
  let (header, payload) = packet.split_at(8);
  let combined =
    InternetChecksum::combine(InternetChecksum::checksum(header), InternetChecksum::checksum(payload), header.len());
  println!("combined: {combined:#06x} (whole: {:#06x})", InternetChecksum::checksum(&packet));
}
