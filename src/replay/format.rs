//! Magic signature validation.
//!
//! Every ROFL container begins with the four ASCII bytes `RIOT`. Nothing
//! else about the container is checked here.

use crate::replay::constants::{ROFL_MAGIC, SIZE_MAGIC};
use crate::RoflError;

/// Returns true if `data` starts with the `RIOT` magic.
pub fn has_rofl_magic(data: &[u8]) -> bool {
    data.len() >= SIZE_MAGIC && &data[..SIZE_MAGIC] == ROFL_MAGIC
}

/// Validate the container magic, failing with [`RoflError::InvalidFormat`].
pub fn validate_magic(data: &[u8]) -> Result<(), RoflError> {
    if data.len() < SIZE_MAGIC {
        return Err(RoflError::InvalidFormat(format!(
            "buffer is {} bytes, too short for the {}-byte magic",
            data.len(),
            SIZE_MAGIC
        )));
    }
    if !has_rofl_magic(data) {
        return Err(RoflError::InvalidFormat(format!(
            "This file is not a valid ROFL file (magic {:02X?})",
            &data[..SIZE_MAGIC]
        )));
    }
    Ok(())
}
