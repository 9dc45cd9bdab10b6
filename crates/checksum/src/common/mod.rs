//! Arithmetic shared by every RFC 1071 kernel.

pub mod fold;
pub mod reference;
