//! Print the detected platform and the kernel chosen at each buffer size.
//!
//! Run: `cargo run -p checksum --example introspect`
//!
//! Try `NETSUM_RFC1071_FORCE=portable` or `NETSUM_FORCE_PORTABLE=1`.

use checksum::{DispatchInfo, InternetChecksum, KernelIntrospect};

fn main() {
  println!("{}", DispatchInfo::current());
  println!("backend: {}", InternetChecksum::backend_name());

  for len in [0, 20, 63, 64, 127, 128, 1500, 65536] {
    println!("{len:>6} bytes -> {}", InternetChecksum::kernel_name_for_len(len));
  }
}
