//! Criterion benchmarks for rofl-utils core operations.
//!
//! Benchmarks cover:
//! - Layout detection (validate_magic + detect_layout)
//! - Metadata segment location for both layouts
//! - Full read (Replay::from_bytes + metadata) for both layouts
//! - Participant scoring

use byteorder::{ByteOrder, LittleEndian};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use rofl::replay::constants::*;
use rofl::replay::format::validate_magic;
use rofl::replay::layout::Layout;
use rofl::replay::metadata::Metadata;
use rofl::replay::reader::Replay;
use rofl::replay::version::detect_layout;

const PAYLOAD_SIZE: usize = 4 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Synthetic replay builders (mirrors integration test helpers)
// ---------------------------------------------------------------------------

/// Ten participants with a realistic spread of stat keys.
fn build_metadata_json() -> String {
    let records: Vec<serde_json::Value> = (0..10)
        .map(|i| {
            serde_json::json!({
                "NAME": format!("Player{}", i),
                "SKIN": "Ahri",
                "TEAM": if i < 5 { "100" } else { "200" },
                "WIN": if i < 5 { "Win" } else { "Fail" },
                "CHAMPIONS_KILLED": (i * 2).to_string(),
                "NUM_DEATHS": (i % 4).to_string(),
                "ASSISTS": (i + 3).to_string(),
                "MINIONS_KILLED": (120 + i * 10).to_string(),
                "NEUTRAL_MINIONS_KILLED": (i * 4).to_string(),
                "TOTAL_DAMAGE_DEALT_TO_CHAMPIONS": (15000 + i * 1000).to_string(),
                "VISION_SCORE": (10 + i).to_string(),
            })
        })
        .collect();
    serde_json::json!({
        "gameLength": 1_834_021,
        "lastGameChunkId": 62,
        "lastKeyFrameId": 31,
        "statsJson": serde_json::Value::Array(records).to_string(),
    })
    .to_string()
}

fn build_header(version: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; FILE_INFO_OFFSET];
    data[..4].copy_from_slice(ROFL_MAGIC);
    data[VERSION_OFFSET..VERSION_OFFSET + version.len()].copy_from_slice(version);
    data
}

fn build_legacy_replay(meta: &[u8]) -> Vec<u8> {
    let mut data = build_header(b"13.24");
    let start = FILE_INFO_OFFSET + SIZE_FILE_INFO;
    let mut fi = [0u8; SIZE_FILE_INFO];
    LittleEndian::write_u32(&mut fi[FI_METADATA_OFFSET..], start as u32);
    LittleEndian::write_u32(&mut fi[FI_PAYLOAD_HEADER_OFFSET..], (start + meta.len()) as u32);
    data.extend_from_slice(&fi);
    data.extend_from_slice(meta);
    data.resize(data.len() + PAYLOAD_SIZE, 0x5A);
    data
}

fn build_trailer_replay(meta: &[u8]) -> Vec<u8> {
    let mut data = build_header(b"14.11");
    data.resize(data.len() + PAYLOAD_SIZE, 0x5A);
    data.extend_from_slice(meta);
    data.extend_from_slice(&(meta.len() as u32).to_le_bytes());
    data
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_detection(c: &mut Criterion) {
    let meta = build_metadata_json();
    let data = build_trailer_replay(meta.as_bytes());

    c.bench_function("detect_layout", |b| {
        b.iter(|| {
            validate_magic(black_box(&data)).unwrap();
            detect_layout(black_box(&data)).unwrap()
        })
    });
}

fn bench_locate_segment(c: &mut Criterion) {
    let meta = build_metadata_json();
    let legacy = build_legacy_replay(meta.as_bytes());
    let trailer = build_trailer_replay(meta.as_bytes());

    let mut group = c.benchmark_group("locate_segment");
    group.bench_function("legacy", |b| {
        b.iter(|| Layout::Legacy.locate_segment(black_box(&legacy)).unwrap().len())
    });
    group.bench_function("trailer", |b| {
        b.iter(|| Layout::Trailer.locate_segment(black_box(&trailer)).unwrap().len())
    });
    group.finish();
}

fn bench_full_read(c: &mut Criterion) {
    let meta = build_metadata_json();
    let mut group = c.benchmark_group("full_read");
    group.throughput(Throughput::Bytes(meta.len() as u64));

    for (name, data) in [
        ("legacy", build_legacy_replay(meta.as_bytes())),
        ("trailer", build_trailer_replay(meta.as_bytes())),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let replay = Replay::from_bytes(data.clone()).unwrap();
                replay.metadata().unwrap()
            })
        });
    }
    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let metadata = Metadata::decode(build_metadata_json().as_bytes()).unwrap();

    c.bench_function("performance_score", |b| {
        b.iter(|| {
            black_box(&metadata)
                .participants()
                .map(|p| p.performance_score())
                .sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    bench_detection,
    bench_locate_segment,
    bench_full_read,
    bench_scoring
);
criterion_main!(benches);
