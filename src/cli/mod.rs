//! CLI implementation for the `rofl` binary.
//!
//! The binary takes an input and an output path. A `.rofl` input is read once
//! and its metadata written as JSON to the output file; a directory input is
//! treated as a replay folder and every replay in it is extracted into the
//! output directory. Argument parsing uses clap derive macros, with the
//! [`app::Cli`] struct shared between `main.rs` and `build.rs` (for man page
//! and completion generation) via `include!()`.
//!
//! [`extract::execute`] takes an options struct and a `writer: &mut dyn Write`
//! for status output, so output can be captured in tests. The `wprintln!`
//! macro wraps `writeln!` to convert `io::Error` into `RoflError`.

pub mod app;
pub mod extract;

/// Write a line to the given writer, converting io::Error to RoflError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::RoflError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::RoflError::Io(e.to_string()))
    };
}

pub(crate) use wprintln;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a styled progress bar for batch extraction.
pub(crate) fn create_progress_bar(count: u64, unit: &str) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {} ({{eta}})",
            unit
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    let pb = ProgressBar::new(count);
    pb.set_style(style);
    pb
}
