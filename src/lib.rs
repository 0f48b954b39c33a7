//! League of Legends replay metadata toolkit.
//!
//! The `rofl-utils` crate (library name `rofl`) reads the JSON match summary
//! embedded in `.rofl` replay containers without touching the game
//! simulation payload. Two container generations are supported: the legacy
//! layout, where a descriptor block at a fixed offset bounds the metadata,
//! and the trailer layout (14.11 onwards), where the last four bytes hold the
//! metadata length. Release 14.10 shipped without embedded metadata and is
//! rejected.
//!
//! # CLI Reference
//!
//! ```text
//! rofl match.rofl match.json            # extract one replay
//! rofl replays/ out/                    # extract every replay in a directory
//! rofl --summary match.rofl match.json  # also print a participant scoreboard
//! ```
//!
//! All invocations accept `--color <auto|always|never>`, `--compact` and
//! `-v/--verbose`. See the [`cli`] module for details.
//!
//! # Library API
//!
//! ```no_run
//! use rofl::replay::reader::Replay;
//!
//! let replay = Replay::open("match.rofl").unwrap();
//! let metadata = replay.metadata().unwrap();
//! println!("Game length: {} ms", metadata.game_length);
//! for p in metadata.participants() {
//!     println!("{} ({}): {}", p.name(), p.champion(), p.performance_score());
//! }
//! ```
//!
//! ## Key entry points
//!
//! | Type / Function | Purpose |
//! |-----------------|---------|
//! | [`Replay`](replay::reader::Replay) | Open a `.rofl` file or buffer, read its metadata |
//! | [`Metadata`](replay::metadata::Metadata) | Decoded match summary with per-participant stats |
//! | [`Participant`](replay::participant::Participant) | Typed view over one participant's stat record |
//! | [`detect_layout`](replay::version::detect_layout) | Version window parsing and layout selection |
//! | [`Layout`](replay::layout::Layout) | Locate the metadata segment for a container generation |
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`replay::constants`] | Container offsets, sizes and release boundaries |
//! | [`replay::format`] | Magic signature validation |
//! | [`replay::version`] | Version string parsing and layout selection |
//! | [`replay::layout`] | Legacy descriptor block and trailer length prefix |
//! | [`replay::metadata`] | Two-stage JSON decoding into [`Metadata`](replay::metadata::Metadata) |
//! | [`replay::participant`] | Stat accessors and performance score |
//! | [`replay::reader`] | File/buffer loading and the read pipeline |
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | on | Builds the `rofl` binary (clap, colored, rayon, indicatif, tracing-subscriber). |

#[cfg(feature = "cli")]
pub mod cli;
pub mod replay;
pub mod util;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

use thiserror::Error;

/// Errors returned by `rofl` operations.
#[derive(Error, Debug)]
pub enum RoflError {
    /// The input path does not exist.
    #[error("File {0} does not exist")]
    FileNotFound(String),

    /// The input path does not carry the `.rofl` extension.
    #[error("File {0} is not a ROFL file")]
    InvalidExtension(String),

    /// The buffer does not start with the `RIOT` magic signature.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The container was written by a release with no extractable metadata.
    #[error("Unsupported ROFL version: {0}")]
    UnsupportedVersion(String),

    /// A computed segment boundary falls outside the buffer.
    #[error("{what} [{start}, {end}) is out of range for a {len}-byte buffer")]
    OffsetOutOfRange {
        what: &'static str,
        start: u64,
        end: u64,
        len: u64,
    },

    /// JSON decoding of the metadata segment or its nested stats failed.
    #[error("Decode error: {0}")]
    Decode(String),

    /// An I/O error occurred (read, write, or directory listing failure).
    #[error("I/O error: {0}")]
    Io(String),

    /// One or more replays in a batch could not be extracted.
    #[error("{failed} of {total} replays failed")]
    BatchFailed { failed: usize, total: usize },

    /// An invalid argument was supplied.
    #[error("Invalid argument: {0}")]
    Argument(String),
}
