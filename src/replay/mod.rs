//! ROFL container parsing.
//!
//! This module contains the types and functions for validating a replay
//! container, selecting its layout generation from the embedded version
//! string, locating the metadata segment, and decoding it.
//!
//! Start with [`reader::Replay`] to open a `.rofl` file, then call
//! [`reader::Replay::metadata`].

pub mod constants;
pub mod format;
pub mod layout;
pub mod metadata;
pub mod participant;
pub mod reader;
pub mod version;
