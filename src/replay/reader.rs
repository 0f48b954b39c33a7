//! ROFL replay file I/O.
//!
//! Provides [`Replay`], the primary entry point for reading `.rofl` files.
//! Opening a replay loads the whole file, validates the `RIOT` magic and
//! selects the container layout from the version window. The metadata
//! segment is located and decoded on each call to [`Replay::metadata`].

use std::path::Path;

use crate::replay::constants::ROFL_EXTENSION;
use crate::replay::format::validate_magic;
use crate::replay::layout::Layout;
use crate::replay::metadata::Metadata;
use crate::replay::version::{detect_layout, ReadWarning, VersionTag};
use crate::RoflError;

/// An opened ROFL replay, held fully in memory.
#[derive(Debug)]
pub struct Replay {
    data: Vec<u8>,
    layout: Layout,
    version: Option<VersionTag>,
    warnings: Vec<ReadWarning>,
}

impl Replay {
    /// Open a `.rofl` file.
    ///
    /// Fails with [`RoflError::FileNotFound`] if the path does not exist and
    /// [`RoflError::InvalidExtension`] if it does not end in `.rofl`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RoflError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RoflError::FileNotFound(path.display().to_string()));
        }
        if !has_rofl_extension(path) {
            return Err(RoflError::InvalidExtension(path.display().to_string()));
        }

        let data = std::fs::read(path)
            .map_err(|e| RoflError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), size = data.len(), "loaded replay");

        Self::from_bytes(data)
    }

    /// Create a replay from an in-memory buffer.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rofl::replay::reader::Replay;
    ///
    /// let data: Vec<u8> = std::fs::read("match.rofl").unwrap();
    /// let replay = Replay::from_bytes(data).unwrap();
    /// println!("Layout: {}", replay.layout());
    /// ```
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RoflError> {
        validate_magic(&data)?;
        let detection = detect_layout(&data)?;

        Ok(Replay {
            data,
            layout: detection.layout,
            version: detection.version,
            warnings: detection.warning.into_iter().collect(),
        })
    }

    /// Locate and decode the embedded metadata.
    ///
    /// Every call re-reads the same buffer with the same layout, so repeated
    /// calls return equal values.
    pub fn metadata(&self) -> Result<Metadata, RoflError> {
        let segment = self.metadata_segment()?;
        Metadata::decode(segment)
    }

    /// Raw bytes of the metadata segment.
    pub fn metadata_segment(&self) -> Result<&[u8], RoflError> {
        self.layout.locate_segment(&self.data)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Release parsed from the version window, if it matched the pattern.
    pub fn version(&self) -> Option<VersionTag> {
        self.version
    }

    /// Non-fatal conditions recorded while opening the replay.
    pub fn warnings(&self) -> &[ReadWarning] {
        &self.warnings
    }

    pub fn file_size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Returns true if the path ends in `.rofl`.
pub fn has_rofl_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == ROFL_EXTENSION)
}
