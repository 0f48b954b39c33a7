use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use rayon::prelude::*;

use crate::cli::{create_progress_bar, wprintln};
use crate::replay::metadata::Metadata;
use crate::replay::reader::Replay;
use crate::replay::version::ReadWarning;
use crate::util::fs::find_replay_files;
use crate::RoflError;

/// Options for metadata extraction.
pub struct ExtractOptions {
    /// Replay file, or a directory of replays.
    pub input: String,
    /// Output JSON file, or output directory when `input` is a directory.
    pub output: String,
    pub compact: bool,
    pub summary: bool,
    /// Show a progress bar in batch mode.
    pub progress: bool,
}

/// Metadata read from one replay together with its warnings.
struct Extracted {
    metadata: Metadata,
    warnings: Vec<ReadWarning>,
}

/// Extract replay metadata to JSON.
///
/// In **single mode** the input is one `.rofl` file and the output a JSON
/// file path. Any failure is returned as the error.
///
/// In **batch mode** (input is a directory) every `.rofl` file found in the
/// directory and its immediate subdirectories is read in parallel, and
/// `<stem>.json` is written for each into the output directory, under the
/// same subdirectory the replay was found in. Failing
/// replays are reported and skipped; if any failed the call returns
/// [`RoflError::BatchFailed`] after the rest have been written.
///
/// Read warnings go to stderr; `writer` only receives results.
pub fn execute(opts: &ExtractOptions, writer: &mut dyn Write) -> Result<(), RoflError> {
    let input = Path::new(&opts.input);
    let output = Path::new(&opts.output);

    if input.is_dir() {
        return execute_batch(opts, input, output, writer);
    }

    let extracted = extract_one(input, output, opts.compact)?;
    print_warnings(input, &extracted.warnings);
    wprintln!(
        writer,
        "{} {} -> {}",
        "Parsed successfully:".green(),
        input.display(),
        output.display()
    )?;

    if opts.summary {
        wprintln!(writer)?;
        print_summary(writer, &extracted.metadata)?;
    }

    Ok(())
}

fn execute_batch(
    opts: &ExtractOptions,
    input: &Path,
    output: &Path,
    writer: &mut dyn Write,
) -> Result<(), RoflError> {
    let files = find_replay_files(input)?;
    if files.is_empty() {
        wprintln!(writer, "No .rofl files found in {}.", input.display())?;
        return Ok(());
    }

    std::fs::create_dir_all(output)
        .map_err(|e| RoflError::Io(format!("Cannot create {}: {}", output.display(), e)))?;

    let pb = opts
        .progress
        .then(|| create_progress_bar(files.len() as u64, "replays"));

    let results: Vec<(PathBuf, PathBuf, Result<Extracted, RoflError>)> = files
        .par_iter()
        .map(|path| {
            let out_path = output.join(json_output_path(input, path));
            let result = create_parent_dir(&out_path)
                .and_then(|()| extract_one(path, &out_path, opts.compact));
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            (path.clone(), out_path, result)
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let total = results.len();
    let mut failed = 0usize;

    for (path, out_path, result) in &results {
        match result {
            Ok(extracted) => {
                print_warnings(path, &extracted.warnings);
                wprintln!(
                    writer,
                    "{} {} -> {}",
                    "OK".green(),
                    path.display(),
                    out_path.display()
                )?;
                if opts.summary {
                    print_summary(writer, &extracted.metadata)?;
                    wprintln!(writer)?;
                }
            }
            Err(e) => {
                failed += 1;
                wprintln!(writer, "{} {}: {}", "FAILED".red(), path.display(), e)?;
            }
        }
    }

    wprintln!(writer)?;
    wprintln!(
        writer,
        "Extracted {} of {} replays into {}",
        total - failed,
        total,
        output.display()
    )?;

    if failed > 0 {
        return Err(RoflError::BatchFailed { failed, total });
    }
    Ok(())
}

/// Read one replay and write its metadata JSON to `output`.
fn extract_one(input: &Path, output: &Path, compact: bool) -> Result<Extracted, RoflError> {
    let replay = Replay::open(input)?;
    let metadata = replay.metadata()?;

    let json = if compact {
        metadata.to_json()?
    } else {
        metadata.to_json_pretty()?
    };
    std::fs::write(output, json)
        .map_err(|e| RoflError::Io(format!("Cannot write {}: {}", output.display(), e)))?;

    Ok(Extracted {
        metadata,
        warnings: replay.warnings().to_vec(),
    })
}

/// Output path of a batch replay, relative to the output directory.
///
/// `<root>/week1/NA1-4321.rofl` becomes `week1/NA1-4321.json`, so replays
/// sharing a file name in different subdirectories do not collide.
fn json_output_path(root: &Path, path: &Path) -> PathBuf {
    let relative = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => path.file_name().map(Path::new).unwrap_or(path),
    };
    relative.with_extension("json")
}

fn create_parent_dir(path: &Path) -> Result<(), RoflError> {
    match path.parent() {
        Some(parent) => std::fs::create_dir_all(parent)
            .map_err(|e| RoflError::Io(format!("Cannot create {}: {}", parent.display(), e))),
        None => Ok(()),
    }
}

fn print_warnings(replay: &Path, warnings: &[ReadWarning]) {
    for w in warnings {
        eprintln!("{} {}: {}", "Warning:".yellow(), replay.display(), w);
    }
}

fn print_summary(writer: &mut dyn Write, meta: &Metadata) -> Result<(), RoflError> {
    wprintln!(
        writer,
        "Game length: {}  Participants: {}  Last chunk: {}  Last keyframe: {}",
        format_duration(meta.game_duration()),
        meta.participant_count(),
        meta.last_game_chunk_id,
        meta.last_key_frame_id
    )?;
    wprintln!(
        writer,
        "  {:<20} {:<14} {:>4} {:>10} {:>5} {:>4} {:>7}",
        "Name",
        "Champion",
        "Team",
        "K/D/A",
        "CS",
        "W/L",
        "Score"
    )?;

    for p in meta.participants() {
        let kda = format!("{}/{}/{}", p.kills(), p.deaths(), p.assists());
        let result = if p.win() { "W".green() } else { "L".red() };
        wprintln!(
            writer,
            "  {:<20} {:<14} {:>4} {:>10} {:>5} {:>4} {:>7.2}",
            p.name(),
            p.champion(),
            p.team(),
            kda,
            p.creep_score(),
            result,
            p.performance_score()
        )?;
    }
    Ok(())
}

/// Format as `mm:ss`, with minutes unbounded.
fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
