//! Version string parsing and layout selection.
//!
//! Bytes 15..20 of the container hold the game release as ASCII, e.g.
//! `"13.24"` or `"9.12."`. A single trailing `.` is stripped, then the text
//! must be two digits, a dot, and one or two digits.
//!
//! The parsed release decides how the metadata segment is located:
//! - 14.11 and later use the [`Layout::Trailer`] length prefix
//! - 14.10 has no embedded metadata and is rejected
//! - everything older uses the [`Layout::Legacy`] descriptor block
//!
//! A window that does not match the pattern is not fatal. Detection falls
//! back to [`Layout::Legacy`] and records a [`ReadWarning`].

use serde::Serialize;
use std::fmt;

use crate::replay::constants::*;
use crate::replay::layout::Layout;
use crate::RoflError;

/// Game release parsed from the version window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VersionTag {
    pub major: u32,
    pub minor: u32,
}

impl VersionTag {
    /// Parse `NN.N` or `NN.NN` (ASCII digits only).
    pub fn parse(text: &str) -> Option<Self> {
        let (major, minor) = text.split_once('.')?;
        if major.len() != 2 || !(1..=2).contains(&minor.len()) {
            return None;
        }
        if !major.bytes().chain(minor.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(VersionTag {
            major: major.parse().ok()?,
            minor: minor.parse().ok()?,
        })
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Non-fatal conditions noticed while reading a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ReadWarning {
    /// The version window did not match `NN.N(N)`; the legacy layout was assumed.
    VersionPatternMismatch { raw: String },
}

impl fmt::Display for ReadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadWarning::VersionPatternMismatch { raw } => write!(
                f,
                "Version string does not match the expected pattern: {:?}",
                raw
            ),
        }
    }
}

/// Outcome of inspecting the version window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub layout: Layout,
    /// Parsed release, or None when the window did not match.
    pub version: Option<VersionTag>,
    pub warning: Option<ReadWarning>,
}

/// Lossy text of the version window, untrimmed.
///
/// Buffers shorter than the window yield whatever part of it exists.
fn version_window(data: &[u8]) -> String {
    let end = data.len().min(VERSION_END);
    let window = data.get(VERSION_OFFSET..end).unwrap_or(&[]);
    String::from_utf8_lossy(window).into_owned()
}

fn strip_trailing_dot(raw: &str) -> &str {
    raw.strip_suffix('.').unwrap_or(raw)
}

/// Raw text of the version window with one trailing `.` removed.
pub fn version_text(data: &[u8]) -> String {
    strip_trailing_dot(&version_window(data)).to_string()
}

/// Map a release to its layout.
///
/// Fails with [`RoflError::UnsupportedVersion`] for 14.10.
pub fn select_layout(version: VersionTag) -> Result<Layout, RoflError> {
    let release = (version.major, version.minor);
    if release == RELEASE_WITHOUT_METADATA {
        return Err(RoflError::UnsupportedVersion(format!(
            "{} (metadata was removed in {}.{} and reintroduced in {}.{})",
            version,
            RELEASE_WITHOUT_METADATA.0,
            RELEASE_WITHOUT_METADATA.1,
            FIRST_TRAILER_RELEASE.0,
            FIRST_TRAILER_RELEASE.1
        )));
    }
    if release >= FIRST_TRAILER_RELEASE {
        Ok(Layout::Trailer)
    } else {
        Ok(Layout::Legacy)
    }
}

/// Inspect the version window of a validated container and pick its layout.
pub fn detect_layout(data: &[u8]) -> Result<Detection, RoflError> {
    let raw = version_window(data);

    let version = match VersionTag::parse(strip_trailing_dot(&raw)) {
        Some(v) => v,
        None => {
            let warning = ReadWarning::VersionPatternMismatch { raw };
            tracing::debug!(%warning, "falling back to legacy layout");
            return Ok(Detection {
                layout: Layout::Legacy,
                version: None,
                warning: Some(warning),
            });
        }
    };

    let layout = select_layout(version)?;
    tracing::debug!(%version, ?layout, "selected replay layout");
    Ok(Detection {
        layout,
        version: Some(version),
        warning: None,
    })
}
