//! WebAssembly bindings for replay metadata extraction.
//!
//! Each exported function accepts raw file bytes as `&[u8]` (via wasm-bindgen)
//! and returns a JSON string. These are thin wrappers over the same library
//! code used by the CLI.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::replay::participant::ParticipantSummary;
use crate::replay::reader::Replay;

fn to_js_err(e: crate::RoflError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(val: &T) -> Result<String, JsValue> {
    serde_json::to_string(val).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns the replay's metadata in canonical JSON form.
///
/// The object has `gameLength`, `lastGameChunkId`, `lastKeyFrameId` and
/// `statsJson` (an array of string-to-string stat records, one per
/// participant). Returns an error string for any read or decode failure.
#[wasm_bindgen]
pub fn get_metadata(data: &[u8]) -> Result<String, JsValue> {
    let replay = Replay::from_bytes(data.to_vec()).map_err(to_js_err)?;
    let metadata = replay.metadata().map_err(to_js_err)?;
    metadata.to_json().map_err(to_js_err)
}

/// Returns a JSON array of per-participant summaries with performance scores.
#[wasm_bindgen]
pub fn get_participant_summaries(data: &[u8]) -> Result<String, JsValue> {
    let replay = Replay::from_bytes(data.to_vec()).map_err(to_js_err)?;
    let metadata = replay.metadata().map_err(to_js_err)?;
    let summaries: Vec<ParticipantSummary> = metadata.participants().map(|p| p.summary()).collect();
    to_json(&summaries)
}
