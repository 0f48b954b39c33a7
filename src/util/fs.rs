//! Replay folder scanning for batch extraction.

use std::path::{Path, PathBuf};

use crate::replay::reader::has_rofl_extension;
use crate::RoflError;

/// Subdirectory levels below the input folder that are searched.
/// Replay folders are usually sorted one level deep (by week, region, ...).
const SCAN_DEPTH: usize = 1;

/// Collect `.rofl` files from `dir` and its immediate subdirectories,
/// sorted by path.
pub fn find_replay_files(dir: &Path) -> Result<Vec<PathBuf>, RoflError> {
    let mut found = Vec::new();
    scan(dir, SCAN_DEPTH, &mut found)?;
    found.sort();
    Ok(found)
}

fn scan(dir: &Path, depth: usize, found: &mut Vec<PathBuf>) -> Result<(), RoflError> {
    let unreadable =
        |e: std::io::Error| RoflError::Io(format!("Cannot scan replay folder {}: {}", dir.display(), e));

    let paths = std::fs::read_dir(dir)
        .map_err(unreadable)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(unreadable)?;

    for path in paths {
        if path.is_dir() {
            if depth > 0 {
                scan(&path, depth - 1, found)?;
            }
        } else if has_rofl_extension(&path) {
            found.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_folder() {
        let dir = TempDir::new().unwrap();
        assert!(find_replay_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_only_rofl_files_are_collected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("NA1-123.rofl"), b"data").unwrap();
        fs::write(dir.path().join("NA1-123.json"), b"{}").unwrap();
        fs::write(dir.path().join("readme.txt"), b"text").unwrap();

        let files = find_replay_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("NA1-123.rofl"));
    }

    #[test]
    fn test_subfolders_sorted() {
        let dir = TempDir::new().unwrap();
        let subdir = dir.path().join("approved");
        fs::create_dir(&subdir).unwrap();
        fs::write(subdir.join("b.rofl"), b"data").unwrap();
        fs::write(dir.path().join("a.rofl"), b"data").unwrap();

        let files = find_replay_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.rofl"));
        assert!(files[1].ends_with("approved/b.rofl"));
    }

    #[test]
    fn test_deeper_folders_are_skipped() {
        let dir = TempDir::new().unwrap();
        let deep = dir.path().join("2024").join("week1");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("too-deep.rofl"), b"data").unwrap();
        fs::write(dir.path().join("2024").join("kept.rofl"), b"data").unwrap();

        let files = find_replay_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("2024/kept.rofl"));
    }

    #[test]
    fn test_missing_folder() {
        let result = find_replay_files(Path::new("/nonexistent/dir"));
        assert!(matches!(result, Err(RoflError::Io(msg)) if msg.contains("/nonexistent/dir")));
    }
}
