//! Metadata segment decoding.
//!
//! The segment is a UTF-8 JSON object:
//!
//! ```text
//! {"gameLength":1834021,"lastGameChunkId":62,"lastKeyFrameId":31,
//!  "statsJson":"[{\"NAME\":\"...\",\"CHAMPIONS_KILLED\":\"4\",...},...]"}
//! ```
//!
//! `statsJson` is itself JSON, encoded as a string. Decoding happens in two
//! stages so each can fail on its own: [`decode_record`] parses the outer
//! object into a [`RawMetadata`], then [`decode_stats`] parses the nested
//! string into one [`StatRecord`] per participant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::replay::participant::Participant;
use crate::RoflError;

/// One participant's stats: stat name to stat value, both as strings.
pub type StatRecord = BTreeMap<String, String>;

/// The outer metadata object, with `statsJson` still encoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetadata {
    pub game_length: u64,
    pub last_game_chunk_id: u32,
    pub last_key_frame_id: u32,
    pub stats_json: String,
}

/// Decoded match summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Game length in milliseconds.
    pub game_length: u64,
    pub last_game_chunk_id: u32,
    pub last_key_frame_id: u32,
    /// One record per participant, in the order the replay lists them.
    pub stats_json: Vec<StatRecord>,
}

/// First stage: parse the segment bytes as the outer metadata object.
pub fn decode_record(segment: &[u8]) -> Result<RawMetadata, RoflError> {
    serde_json::from_slice(segment)
        .map_err(|e| RoflError::Decode(format!("metadata segment: {}", e)))
}

/// Second stage: parse the nested `statsJson` string.
pub fn decode_stats(stats_json: &str) -> Result<Vec<StatRecord>, RoflError> {
    serde_json::from_str(stats_json).map_err(|e| RoflError::Decode(format!("statsJson: {}", e)))
}

impl Metadata {
    /// Decode a metadata segment, running both stages.
    pub fn decode(segment: &[u8]) -> Result<Self, RoflError> {
        let raw = decode_record(segment)?;
        Self::from_raw(raw)
    }

    /// Build from an already-parsed outer object.
    pub fn from_raw(raw: RawMetadata) -> Result<Self, RoflError> {
        let stats_json = decode_stats(&raw.stats_json)?;
        Ok(Metadata {
            game_length: raw.game_length,
            last_game_chunk_id: raw.last_game_chunk_id,
            last_key_frame_id: raw.last_key_frame_id,
            stats_json,
        })
    }

    /// Parse the canonical serialization produced by [`Metadata::to_json`].
    pub fn from_json(json: &str) -> Result<Self, RoflError> {
        serde_json::from_str(json).map_err(|e| RoflError::Decode(e.to_string()))
    }

    /// Canonical single-line JSON. Stat keys are emitted in sorted order.
    pub fn to_json(&self) -> Result<String, RoflError> {
        serde_json::to_string(self).map_err(|e| RoflError::Decode(e.to_string()))
    }

    /// Canonical JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, RoflError> {
        serde_json::to_string_pretty(self).map_err(|e| RoflError::Decode(e.to_string()))
    }

    pub fn game_duration(&self) -> Duration {
        Duration::from_millis(self.game_length)
    }

    /// Number of participant stat records.
    pub fn participant_count(&self) -> usize {
        self.stats_json.len()
    }

    /// Typed views over the participant stat records, in record order.
    pub fn participants(&self) -> impl Iterator<Item = Participant<'_>> {
        self.stats_json.iter().map(Participant::new)
    }
}
