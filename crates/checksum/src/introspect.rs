//! Kernel dispatch introspection for verifying optimization.
//!
//! This module provides APIs to inspect which kernels are selected for the
//! current platform, without impacting hot-path performance.
//!
//! # Examples
//!
//! ```
//! use checksum::{DispatchInfo, InternetChecksum, KernelIntrospect};
//!
//! // Platform-level info
//! let info = DispatchInfo::current();
//! println!("{info}");
//!
//! // Per-length kernel selection
//! println!("backend: {}", InternetChecksum::backend_name());
//! println!("@ 16B: {}", InternetChecksum::kernel_name_for_len(16));
//! println!("@ 4KB: {}", InternetChecksum::kernel_name_for_len(4096));
//! ```

use core::fmt;

/// Information about the current dispatch configuration.
///
/// A zero-allocation view of the detected CPU capabilities, the tuning preset
/// and the selected vector kernel.
///
/// # Examples
///
/// ```
/// use checksum::DispatchInfo;
///
/// let info = DispatchInfo::current();
/// println!("{info}");
/// // Example output: "Caps(x86_64, [sse2, avx, avx2]) (x86_64 AVX2) vector=x86_64/avx2"
/// ```
#[derive(Clone, Copy)]
pub struct DispatchInfo {
  platform: platform::Description,
  vector: &'static str,
}

impl DispatchInfo {
  /// Returns dispatch info for the current platform.
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    Self { platform: platform::describe(), vector: crate::rfc1071::vector_backend() }
  }

  /// Returns the platform description (arch, features, tuning).
  #[inline]
  #[must_use]
  pub fn platform(&self) -> platform::Description {
    self.platform
  }

  /// Returns the vector engine kernel name.
  #[inline]
  #[must_use]
  pub fn vector_kernel(&self) -> &'static str {
    self.vector
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} vector={}", self.platform, self.vector)
  }
}

impl fmt::Debug for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchInfo")
      .field("platform", &format_args!("{}", self.platform))
      .field("vector", &self.vector)
      .finish()
  }
}

/// Whether a hardware vector kernel is available on this CPU.
///
/// `false` means every engine runs plain Rust (no SIMD, or
/// `NETSUM_FORCE_PORTABLE` is set).
#[inline]
#[must_use]
pub fn is_hardware_accelerated() -> bool {
  crate::rfc1071::policy().has_simd()
}

/// Describe the detected platform (arch, features, tuning).
#[inline]
#[must_use]
pub fn platform_describe() -> platform::Description {
  platform::describe()
}

/// Returns the kernel name selected for a specific algorithm and buffer size.
///
/// # Examples
///
/// ```
/// use checksum::{InternetChecksum, kernel_for};
///
/// let small = kernel_for::<InternetChecksum>(8);
/// let large = kernel_for::<InternetChecksum>(65536);
/// println!("Small buffers: {small}");
/// println!("Large buffers: {large}");
/// ```
#[inline]
#[must_use]
pub fn kernel_for<T: KernelIntrospect>(len: usize) -> &'static str {
  T::kernel_name_for_len(len)
}

/// Trait for types that support kernel introspection.
pub trait KernelIntrospect {
  /// Returns the kernel name that would be selected for a buffer of `len` bytes.
  ///
  /// e.g. `"portable"` for short buffers, `"x86_64/avx2"` for long ones on a
  /// Haswell-or-newer CPU.
  fn kernel_name_for_len(len: usize) -> &'static str;

  /// Returns the currently selected backend name.
  ///
  /// This reflects the kernel used for a 1 KiB buffer, unless a force mode is
  /// active.
  fn backend_name() -> &'static str;
}
