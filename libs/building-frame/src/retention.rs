//! # Output Retention
//!
//! Caller-side cleanup of file-mode output. The generator never deletes
//! anything; a caller that wants a bounded output directory calls
//! [`prune_generated`] after writing.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use config::constants::{OUTPUT_EXTENSION, OUTPUT_PREFIX};

/// Fields recovered from a generated filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    pub material: String,
    pub num_floors: u32,
    pub timestamp: i64,
    /// Collision suffix, 0 when absent.
    pub counter: u32,
}

/// Parses `building_{material}_{floors}_floors_{timestamp}[-{n}].glb`.
///
/// # Example
///
/// ```rust
/// use building_frame::retention::parse_generated_name;
///
/// let name = parse_generated_name("building_steel_3_floors_1700000000-2.glb").unwrap();
/// assert_eq!((name.num_floors, name.timestamp, name.counter), (3, 1700000000, 2));
/// assert!(parse_generated_name("notes.txt").is_none());
/// ```
pub fn parse_generated_name(file_name: &str) -> Option<GeneratedName> {
    let body = file_name
        .strip_prefix(OUTPUT_PREFIX)?
        .strip_suffix(OUTPUT_EXTENSION)?
        .strip_suffix('.')?;
    let (head, tail) = body.rsplit_once("_floors_")?;
    let (material, floors) = head.rsplit_once('_')?;

    let (timestamp, counter) = match tail.split_once('-') {
        Some((ts, n)) => (ts.parse().ok()?, n.parse().ok()?),
        None => (tail.parse().ok()?, 0),
    };

    Some(GeneratedName {
        material: material.to_string(),
        num_floors: floors.parse().ok()?,
        timestamp,
        counter,
    })
}

/// Deletes generated files in `dir` beyond the newest `keep`.
///
/// Files are ordered by the timestamp in their names, then by modification
/// time, then by collision counter. Anything not named like generator
/// output is left alone. Returns the paths that were removed. A file that
/// cannot be removed is logged and skipped.
///
/// # Errors
///
/// Fails only when `dir` cannot be listed.
pub fn prune_generated(dir: &Path, keep: usize) -> io::Result<Vec<PathBuf>> {
    prune(dir, keep, None)
}

/// Like [`prune_generated`], but `written` is always kept and counts as the
/// newest file.
///
/// Use this right after a file-mode generation so the file just returned
/// survives even when other output carries the same timestamp.
pub fn prune_generated_keeping(
    dir: &Path,
    keep: usize,
    written: &Path,
) -> io::Result<Vec<PathBuf>> {
    prune(dir, keep, written.file_name())
}

struct Candidate {
    timestamp: i64,
    modified: Option<SystemTime>,
    counter: u32,
    path: PathBuf,
}

impl Candidate {
    fn age_key(&self) -> (i64, Option<SystemTime>, u32) {
        (self.timestamp, self.modified, self.counter)
    }
}

fn prune(dir: &Path, keep: usize, protected: Option<&OsStr>) -> io::Result<Vec<PathBuf>> {
    let mut generated = Vec::new();
    let mut keep = keep;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if protected == Some(file_name.as_os_str()) {
            keep = keep.saturating_sub(1);
            continue;
        }
        if let Some(parsed) = file_name.to_str().and_then(parse_generated_name) {
            generated.push(Candidate {
                timestamp: parsed.timestamp,
                modified: metadata.modified().ok(),
                counter: parsed.counter,
                path: entry.path(),
            });
        }
    }

    // Newest first
    generated.sort_by(|a, b| b.age_key().cmp(&a.age_key()));

    let mut removed = Vec::new();
    for Candidate { path, .. } in generated.into_iter().skip(keep) {
        match fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("removed old output {}", path.display());
                removed.push(path);
            }
            Err(err) => log::warn!("could not remove {}: {err}", path.display()),
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"glTF").unwrap();
        path
    }

    fn set_age(path: &Path, seconds_ago: u64) {
        let when = SystemTime::now() - Duration::from_secs(seconds_ago);
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(when)
            .unwrap();
    }

    #[test]
    fn parses_plain_name() {
        assert_eq!(
            parse_generated_name("building_wood_1_floors_42.glb"),
            Some(GeneratedName {
                material: "wood".into(),
                num_floors: 1,
                timestamp: 42,
                counter: 0,
            })
        );
    }

    #[test]
    fn rejects_foreign_names() {
        for name in [
            "building_wood_1_floors_42.gltf",
            "house_wood_1_floors_42.glb",
            "building_wood_x_floors_42.glb",
            "building_wood_1_floors_soon.glb",
            "building_wood_1_floors_42-a.glb",
        ] {
            assert!(parse_generated_name(name).is_none(), "{name}");
        }
    }

    #[test]
    fn keeps_newest_files() {
        let dir = tempfile::tempdir().unwrap();
        let oldest = touch(dir.path(), "building_wood_1_floors_100.glb");
        let older = touch(dir.path(), "building_steel_2_floors_200.glb");
        let newer = touch(dir.path(), "building_wood_1_floors_300.glb");
        let newest = touch(dir.path(), "building_wood_1_floors_300-1.glb");

        let mut removed = prune_generated(dir.path(), 2).unwrap();
        removed.sort();

        assert_eq!(removed, vec![oldest.clone(), older.clone()]);
        assert!(!oldest.exists());
        assert!(!older.exists());
        assert!(newer.exists());
        assert!(newest.exists());
    }

    #[test]
    fn parses_material_with_underscore() {
        let name = parse_generated_name("building_unknown_material_2_floors_7.glb").unwrap();
        assert_eq!(name.material, "unknown_material");
        assert_eq!((name.num_floors, name.timestamp), (2, 7));
    }

    #[test]
    fn same_second_orders_by_write_time() {
        let dir = tempfile::tempdir().unwrap();
        // Alphabetically "10" sorts before "2", write order is the reverse
        let first = touch(dir.path(), "building_wood_2_floors_1700000000.glb");
        let second = touch(dir.path(), "building_wood_10_floors_1700000000.glb");
        set_age(&first, 60);
        set_age(&second, 1);

        let removed = prune_generated(dir.path(), 1).unwrap();

        assert_eq!(removed, vec![first.clone()]);
        assert!(second.exists());
    }

    #[test]
    fn written_file_is_always_kept() {
        let dir = tempfile::tempdir().unwrap();
        let written = touch(dir.path(), "building_wood_10_floors_1700000000.glb");
        let other = touch(dir.path(), "building_wood_2_floors_1700000000.glb");
        // Even when the other file looks newer
        set_age(&written, 60);
        set_age(&other, 1);

        let removed = prune_generated_keeping(dir.path(), 1, &written).unwrap();

        assert_eq!(removed, vec![other]);
        assert!(written.exists());
    }

    #[test]
    fn written_file_survives_keep_zero() {
        let dir = tempfile::tempdir().unwrap();
        let written = touch(dir.path(), "building_steel_1_floors_5.glb");
        touch(dir.path(), "building_steel_1_floors_4.glb");

        let removed = prune_generated_keeping(dir.path(), 0, &written).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(written.exists());
    }

    #[test]
    fn leaves_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let notes = touch(dir.path(), "notes.txt");
        touch(dir.path(), "building_wood_1_floors_1.glb");

        let removed = prune_generated(dir.path(), 0).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(notes.exists());
    }

    #[test]
    fn nothing_to_prune_under_limit() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "building_wood_1_floors_1.glb");
        assert!(prune_generated(dir.path(), 2).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(prune_generated(&dir.path().join("absent"), 2).is_err());
    }
}
