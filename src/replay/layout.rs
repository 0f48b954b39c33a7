//! Metadata segment location for both container generations.
//!
//! Legacy containers (before 14.10) carry a 26-byte [`FileInfo`] descriptor
//! at absolute offset 262. The metadata segment spans
//! `[metadata_offset, payload_header_offset)`.
//!
//! Trailer containers (14.11 and later) end with a 4-byte little-endian
//! length `L`; the metadata segment is the `L` bytes immediately before it.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::fmt;

use crate::replay::constants::*;
use crate::RoflError;

/// Container generation, chosen once per buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layout {
    /// Fixed-offset descriptor block (pre-14.10 containers).
    Legacy,
    /// Trailing length prefix (14.11+ containers).
    Trailer,
}

impl Layout {
    /// Locate the metadata segment inside `data`.
    pub fn locate_segment(self, data: &[u8]) -> Result<&[u8], RoflError> {
        let (start, end) = match self {
            Layout::Legacy => FileInfo::read(data)?.metadata_range(data.len())?,
            Layout::Trailer => trailer_range(data)?,
        };
        tracing::debug!(layout = ?self, start, end, "located metadata segment");
        Ok(&data[start..end])
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Legacy => write!(f, "legacy"),
            Layout::Trailer => write!(f, "trailer"),
        }
    }
}

/// Legacy descriptor block (26 bytes at offset 262).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Header marker. Bytes 0-1.
    pub header: u16,
    /// File id. Bytes 2-5.
    pub file: u32,
    /// Start of the metadata segment. Bytes 6-9.
    pub metadata_offset: u32,
    /// Present in every legacy container but never consulted. Bytes 10-13.
    pub reserved: u32,
    /// Start of the payload header, which ends the metadata segment. Bytes 14-17.
    pub payload_header_offset: u32,
    /// Payload header value. Bytes 18-21.
    pub payload_header: u32,
    /// Start of the payload. Bytes 22-25.
    pub payload_offset: u32,
}

impl FileInfo {
    /// Parse a descriptor block from a byte slice.
    ///
    /// The slice must be at least SIZE_FILE_INFO (26) bytes.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < SIZE_FILE_INFO {
            return None;
        }

        Some(FileInfo {
            header: LittleEndian::read_u16(&data[FI_HEADER..]),
            file: LittleEndian::read_u32(&data[FI_FILE..]),
            metadata_offset: LittleEndian::read_u32(&data[FI_METADATA_OFFSET..]),
            reserved: LittleEndian::read_u32(&data[FI_RESERVED..]),
            payload_header_offset: LittleEndian::read_u32(&data[FI_PAYLOAD_HEADER_OFFSET..]),
            payload_header: LittleEndian::read_u32(&data[FI_PAYLOAD_HEADER..]),
            payload_offset: LittleEndian::read_u32(&data[FI_PAYLOAD_OFFSET..]),
        })
    }

    /// Read the descriptor block at its fixed position in a container.
    pub fn read(data: &[u8]) -> Result<Self, RoflError> {
        let end = FILE_INFO_OFFSET + SIZE_FILE_INFO;
        data.get(FILE_INFO_OFFSET..end)
            .and_then(FileInfo::parse)
            .ok_or(RoflError::OffsetOutOfRange {
                what: "File info block",
                start: FILE_INFO_OFFSET as u64,
                end: end as u64,
                len: data.len() as u64,
            })
    }

    /// Metadata segment bounds, checked against a buffer of `len` bytes.
    pub fn metadata_range(&self, len: usize) -> Result<(usize, usize), RoflError> {
        let start = self.metadata_offset as usize;
        let end = self.payload_header_offset as usize;
        if start > end || end > len {
            return Err(RoflError::OffsetOutOfRange {
                what: "Metadata segment",
                start: start as u64,
                end: end as u64,
                len: len as u64,
            });
        }
        Ok((start, end))
    }
}

/// Metadata segment bounds from the trailing length prefix.
fn trailer_range(data: &[u8]) -> Result<(usize, usize), RoflError> {
    let len = data.len();
    if len < SIZE_TRAILER_LENGTH {
        return Err(RoflError::OffsetOutOfRange {
            what: "Metadata length prefix",
            start: 0,
            end: SIZE_TRAILER_LENGTH as u64,
            len: len as u64,
        });
    }

    let end = len - SIZE_TRAILER_LENGTH;
    let metadata_len = LittleEndian::read_u32(&data[end..]) as usize;
    if metadata_len > end {
        return Err(RoflError::OffsetOutOfRange {
            what: "Metadata segment",
            start: 0,
            end: metadata_len as u64 + SIZE_TRAILER_LENGTH as u64,
            len: len as u64,
        });
    }
    Ok((end - metadata_len, end))
}
