//! Kernel dispatch: selection and caching.
//!
//! - [`Candidate`]: A kernel with capability requirements
//! - [`Selected`]: The result of kernel selection
//! - [`select`]: Choose the best kernel from a candidate list
//! - [`Dispatcher`]: Caches a selector's result for repeated calls

use platform::Caps;

// ─────────────────────────────────────────────────────────────────────────────
// Core Types
// ─────────────────────────────────────────────────────────────────────────────

/// A candidate kernel with capability requirements.
///
/// Candidates are ordered from best to worst. The first candidate whose
/// requirements are satisfied by the detected capabilities wins.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<F> {
  /// Human-readable name for diagnostics (e.g., "x86_64/avx2").
  pub name: &'static str,
  /// Required CPU capabilities. Must be a subset of detected caps.
  pub requires: Caps,
  /// The kernel function pointer.
  pub func: F,
}

impl<F> Candidate<F> {
  /// Create a new candidate.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, requires: Caps, func: F) -> Self {
    Self { name, requires, func }
  }
}

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  /// Create a new selected result.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Select the best kernel from a candidate list.
///
/// Returns the first candidate whose `requires` is satisfied by `caps`, or
/// `None` if none is. A list ending in a `Caps::NONE` candidate always
/// selects something.
///
/// `const`, so a selection over compile-time capabilities folds to a constant.
#[inline]
#[must_use]
pub const fn select<F: Copy>(caps: Caps, mut candidates: &[Candidate<F>]) -> Option<Selected<F>> {
  while let Some((c, rest)) = candidates.split_first() {
    if caps.has(c.requires) {
      return Some(Selected::new(c.name, c.func));
    }
    candidates = rest;
  }
  None
}

// ─────────────────────────────────────────────────────────────────────────────
// Dispatcher
// ─────────────────────────────────────────────────────────────────────────────

/// Caches the kernel chosen by a selector function.
///
/// Under `std` the selector runs once (`OnceLock`). Without `std` there is no
/// cache and the selector runs on every call; prefer a `const` [`select`] over
/// `platform::detect::caps_static()` there.
///
/// # Example
///
/// ```
/// use backend::{Dispatcher, Selected};
///
/// fn portable(_: &[u8]) -> u16 { 0 }
/// fn pick() -> Selected<fn(&[u8]) -> u16> { Selected::new("portable", portable) }
///
/// static DISPATCH: Dispatcher<fn(&[u8]) -> u16> = Dispatcher::new(pick);
/// assert_eq!(DISPATCH.backend_name(), "portable");
/// ```
pub struct Dispatcher<F: Copy + 'static> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<Selected<F>>,
  /// The selector function that chooses the best kernel.
  selector: fn() -> Selected<F>,
}

impl<F: Copy + 'static> Dispatcher<F> {
  /// Create a new dispatcher with the given selector function.
  #[must_use]
  pub const fn new(selector: fn() -> Selected<F>) -> Self {
    Self {
      #[cfg(feature = "std")]
      inner: std::sync::OnceLock::new(),
      selector,
    }
  }

  /// Get the selected kernel, initializing on first call.
  #[inline]
  #[must_use]
  pub fn get(&self) -> Selected<F> {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(|| (self.selector)())
    }

    #[cfg(not(feature = "std"))]
    {
      (self.selector)()
    }
  }

  /// Get the name of the selected backend.
  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.get().name
  }
}

impl<F: Copy + 'static> core::fmt::Debug for Dispatcher<F> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Dispatcher").field("backend", &self.backend_name()).finish()
  }
}
