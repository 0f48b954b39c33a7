//! Shared utilities (replay discovery for batch extraction).

#[cfg(feature = "cli")]
pub mod fs;
