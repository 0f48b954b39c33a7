/// ROFL container structure constants.
///
/// Offsets are absolute byte positions from the start of the file unless
/// noted otherwise. All multi-byte integers are little-endian.
// Magic signature
pub const ROFL_MAGIC: &[u8; 4] = b"RIOT";
pub const SIZE_MAGIC: usize = 4;

// Version window (ASCII, e.g. "13.24" or "9.1." style with a trailing dot)
pub const VERSION_OFFSET: usize = 15;
pub const VERSION_END: usize = 20;

// Legacy descriptor block ("file info", 26 bytes)
pub const FILE_INFO_OFFSET: usize = 262;
pub const SIZE_FILE_INFO: usize = 26;
pub const FI_HEADER: usize = 0; // 2 bytes - header marker
pub const FI_FILE: usize = 2; // 4 bytes - file id
pub const FI_METADATA_OFFSET: usize = 6; // 4 bytes - metadata segment start
pub const FI_RESERVED: usize = 10; // 4 bytes - unused by extraction
pub const FI_PAYLOAD_HEADER_OFFSET: usize = 14; // 4 bytes - end of metadata segment
pub const FI_PAYLOAD_HEADER: usize = 18; // 4 bytes - payload header value
pub const FI_PAYLOAD_OFFSET: usize = 22; // 4 bytes - payload start

// Trailer layout
pub const SIZE_TRAILER_LENGTH: usize = 4;

// Release boundaries
pub const RELEASE_WITHOUT_METADATA: (u32, u32) = (14, 10);
pub const FIRST_TRAILER_RELEASE: (u32, u32) = (14, 11);

pub const ROFL_EXTENSION: &str = "rofl";
