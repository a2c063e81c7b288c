use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::marker::coord::BlockCoord;

/// Result classification of a batch mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// At least one coordinate changed and the file was rewritten.
    Ok,
    /// Every requested coordinate was already present.
    AlreadyExists,
    /// No requested coordinate was present.
    NotFound,
    /// The file could not be read or written; in-memory state rolled back.
    IoError,
}

/// Outcome of a batch mutation: status plus the coordinates that actually changed.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub status: BatchStatus,
    pub changed: HashSet<BlockCoord>,
}

impl BatchOutcome {
    fn unchanged(status: BatchStatus) -> Self {
        Self {
            status,
            changed: HashSet::new(),
        }
    }
}

/// On-disk record for one marked block.
#[derive(Serialize, Deserialize)]
struct CoordRecord {
    x: i32,
    y: i32,
    z: i32,
}

/// Durable set of marked block coordinates backed by one JSON file.
///
/// The file is read once on first use and rewritten in full after every
/// successful mutation. A failed rewrite rolls the in-memory set back, so
/// memory and disk never disagree. All failures stay inside this type as
/// [`BatchStatus`] values; nothing here panics or returns errors.
#[derive(Resource)]
pub struct CoordStore {
    path: PathBuf,
    blocks: HashSet<BlockCoord>,
    loaded: bool,
}

impl CoordStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            blocks: HashSet::new(),
            loaded: false,
        }
    }

    /// Store rooted at the platform config directory.
    pub fn at_default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(
            base.join(constants::storage::APP_CONFIG_DIR)
                .join(constants::storage::COORDS_FILE_NAME),
        )
    }

    /// File name shown in user-facing messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Reads the backing file on first call; later calls return immediately.
    ///
    /// A missing file is created (with parent directories). Empty, unparseable
    /// or wrongly shaped content is treated as an empty set. Returns `false`
    /// only when the file system itself refuses, in which case the store stays
    /// unloaded and the next call retries.
    pub fn ensure_loaded(&mut self) -> bool {
        if self.loaded {
            return true;
        }
        match self.read_file() {
            Ok(blocks) => {
                info!(
                    "Loaded {} marked block(s) from {}",
                    blocks.len(),
                    self.path.display()
                );
                self.blocks = blocks;
                self.loaded = true;
                true
            }
            Err(err) => {
                error!("Failed to read {}: {}", self.path.display(), err);
                false
            }
        }
    }

    /// Independent copy of the current coordinate set.
    pub fn snapshot(&self) -> HashSet<BlockCoord> {
        self.blocks.clone()
    }

    /// Adds every requested coordinate not yet present, then persists.
    ///
    /// `changed` in the outcome holds exactly the additions. A batch where
    /// nothing is new reports [`BatchStatus::AlreadyExists`] without touching
    /// the file.
    pub fn store_all(&mut self, positions: &HashSet<BlockCoord>) -> BatchOutcome {
        if !self.ensure_loaded() {
            return BatchOutcome::unchanged(BatchStatus::IoError);
        }
        let added: HashSet<BlockCoord> = positions.difference(&self.blocks).copied().collect();
        if added.is_empty() {
            return BatchOutcome::unchanged(BatchStatus::AlreadyExists);
        }
        self.blocks.extend(added.iter().copied());
        if let Err(err) = self.write_file() {
            error!("Failed to write {}: {}", self.path.display(), err);
            for pos in &added {
                self.blocks.remove(pos);
            }
            return BatchOutcome::unchanged(BatchStatus::IoError);
        }
        BatchOutcome {
            status: BatchStatus::Ok,
            changed: added,
        }
    }

    /// Removes every requested coordinate that is present, then persists.
    ///
    /// `changed` in the outcome holds exactly the removals. A batch where
    /// nothing is present reports [`BatchStatus::NotFound`] without touching
    /// the file.
    pub fn remove_all(&mut self, positions: &HashSet<BlockCoord>) -> BatchOutcome {
        if !self.ensure_loaded() {
            return BatchOutcome::unchanged(BatchStatus::IoError);
        }
        let removed: HashSet<BlockCoord> = positions.intersection(&self.blocks).copied().collect();
        if removed.is_empty() {
            return BatchOutcome::unchanged(BatchStatus::NotFound);
        }
        for pos in &removed {
            self.blocks.remove(pos);
        }
        if let Err(err) = self.write_file() {
            error!("Failed to write {}: {}", self.path.display(), err);
            self.blocks.extend(removed.iter().copied());
            return BatchOutcome::unchanged(BatchStatus::IoError);
        }
        BatchOutcome {
            status: BatchStatus::Ok,
            changed: removed,
        }
    }

    fn ensure_file_exists(&self) -> io::Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, b"{}")
    }

    fn read_file(&self) -> io::Result<HashSet<BlockCoord>> {
        self.ensure_file_exists()?;
        let contents = fs::read_to_string(&self.path)?;
        Ok(parse_records(&contents))
    }

    fn write_file(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // 1-based running index keeps the file shape stable for hand editing.
        let mut records = BTreeMap::new();
        for (index, pos) in self.blocks.iter().enumerate() {
            records.insert(
                (index + 1) as u32,
                CoordRecord {
                    x: pos.x,
                    y: pos.y,
                    z: pos.z,
                },
            );
        }
        let json = serde_json::to_vec_pretty(&records)?;
        fs::write(&self.path, json)
    }
}

/// Decodes the stored mapping leniently.
///
/// Anything other than a JSON object at the top level, including an empty or
/// unparseable file, yields an empty set. Entries without all three numeric
/// fields are skipped.
fn parse_records(contents: &str) -> HashSet<BlockCoord> {
    let Ok(root) = serde_json::from_str::<serde_json::Value>(contents) else {
        if !contents.trim().is_empty() {
            warn!("Coordinate file is not valid JSON, starting from an empty set");
        }
        return HashSet::new();
    };
    let Some(entries) = root.as_object() else {
        if !root.is_null() {
            warn!("Coordinate file has an unexpected shape, starting from an empty set");
        }
        return HashSet::new();
    };
    let mut blocks = HashSet::new();
    for record in entries.values() {
        let Some(fields) = record.as_object() else {
            continue;
        };
        let (Some(x), Some(y), Some(z)) = (
            int_field(fields, "x"),
            int_field(fields, "y"),
            int_field(fields, "z"),
        ) else {
            continue;
        };
        blocks.insert(BlockCoord::new(x, y, z));
    }
    blocks
}

fn int_field(fields: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<i32> {
    let value = fields.get(key)?;
    if let Some(whole) = value.as_i64() {
        return i32::try_from(whole).ok();
    }
    // Fractional values truncate toward zero.
    value.as_f64().map(|f| f as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn coord_set(coords: &[(i32, i32, i32)]) -> HashSet<BlockCoord> {
        coords
            .iter()
            .map(|&(x, y, z)| BlockCoord::new(x, y, z))
            .collect()
    }

    fn store_in(dir: &Path) -> CoordStore {
        CoordStore::new(dir.join("coords.json"))
    }

    #[test]
    fn ensure_loaded_creates_missing_file_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("coords.json");
        let mut store = CoordStore::new(path.clone());

        assert!(store.ensure_loaded());
        assert!(store.is_loaded());
        assert!(path.exists());
        assert!(store.snapshot().is_empty());
        // Second call is a no-op.
        assert!(store.ensure_loaded());
    }

    #[test]
    fn ensure_loaded_reports_failure_and_stays_retryable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, b"a file, not a directory").unwrap();
        let mut store = CoordStore::new(blocker.join("coords.json"));

        assert!(!store.ensure_loaded());
        assert!(!store.is_loaded());

        fs::remove_file(&blocker).unwrap();
        assert!(store.ensure_loaded());
        assert!(store.is_loaded());
    }

    #[test]
    fn store_all_reports_additions_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        assert!(store.ensure_loaded());

        let batch = coord_set(&[(0, 0, 0), (0, 1, 0)]);
        let outcome = store.store_all(&batch);
        assert_eq!(outcome.status, BatchStatus::Ok);
        assert_eq!(outcome.changed, batch);

        let on_disk = fs::read_to_string(dir.path().join("coords.json")).unwrap();
        let again = store.store_all(&batch);
        assert_eq!(again.status, BatchStatus::AlreadyExists);
        assert!(again.changed.is_empty());
        // Nothing changed, so the file was not rewritten.
        assert_eq!(
            fs::read_to_string(dir.path().join("coords.json")).unwrap(),
            on_disk
        );
    }

    #[test]
    fn partially_new_batch_reports_only_the_new_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.store_all(&coord_set(&[(0, 0, 0), (0, 1, 0)]));

        let outcome = store.store_all(&coord_set(&[(0, 0, 0), (5, 5, 5)]));
        assert_eq!(outcome.status, BatchStatus::Ok);
        assert_eq!(outcome.changed, coord_set(&[(5, 5, 5)]));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_all_mirrors_store_all() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.store_all(&coord_set(&[(0, 0, 0), (0, 1, 0), (5, 5, 5)]));

        let missing = store.remove_all(&coord_set(&[(9, 9, 9)]));
        assert_eq!(missing.status, BatchStatus::NotFound);
        assert!(missing.changed.is_empty());

        let outcome = store.remove_all(&coord_set(&[(0, 0, 0), (0, 1, 0), (5, 5, 5), (9, 9, 9)]));
        assert_eq!(outcome.status, BatchStatus::Ok);
        assert_eq!(outcome.changed, coord_set(&[(0, 0, 0), (0, 1, 0), (5, 5, 5)]));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_write_rolls_back_additions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coords.json");
        let mut store = CoordStore::new(path.clone());
        store.store_all(&coord_set(&[(1, 2, 3)]));

        // A directory at the file path makes every rewrite fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let outcome = store.store_all(&coord_set(&[(4, 5, 6)]));
        assert_eq!(outcome.status, BatchStatus::IoError);
        assert!(outcome.changed.is_empty());
        assert_eq!(store.snapshot(), coord_set(&[(1, 2, 3)]));

        fs::remove_dir(&path).unwrap();
        let retry = store.store_all(&coord_set(&[(4, 5, 6)]));
        assert_eq!(retry.status, BatchStatus::Ok);
        assert_eq!(store.snapshot(), coord_set(&[(1, 2, 3), (4, 5, 6)]));
    }

    #[test]
    fn failed_first_write_leaves_the_store_empty_and_retryable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coords.json");
        let mut store = CoordStore::new(path.clone());
        assert!(store.ensure_loaded());

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let outcome = store.store_all(&coord_set(&[(1, 2, 3)]));
        assert_eq!(outcome.status, BatchStatus::IoError);
        assert!(store.snapshot().is_empty());

        fs::remove_dir(&path).unwrap();
        let retry = store.store_all(&coord_set(&[(1, 2, 3)]));
        assert_eq!(retry.status, BatchStatus::Ok);
        assert_eq!(retry.changed, coord_set(&[(1, 2, 3)]));

        let mut reread = CoordStore::new(path);
        assert!(reread.ensure_loaded());
        assert_eq!(reread.snapshot(), coord_set(&[(1, 2, 3)]));
    }

    #[test]
    fn failed_write_rolls_back_removals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coords.json");
        let mut store = CoordStore::new(path.clone());
        store.store_all(&coord_set(&[(1, 2, 3), (4, 5, 6)]));

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let outcome = store.remove_all(&coord_set(&[(1, 2, 3)]));
        assert_eq!(outcome.status, BatchStatus::IoError);
        assert_eq!(store.snapshot(), coord_set(&[(1, 2, 3), (4, 5, 6)]));
    }

    #[test]
    fn stores_a_vertical_pair_then_removes_one_half() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        let pair = coord_set(&[(10, 64, 10), (10, 65, 10)]);
        let stored = store.store_all(&pair);
        assert_eq!(stored.status, BatchStatus::Ok);
        assert_eq!(stored.changed, pair);

        let removed = store.remove_all(&coord_set(&[(10, 64, 10)]));
        assert_eq!(removed.status, BatchStatus::Ok);
        assert_eq!(removed.changed, coord_set(&[(10, 64, 10)]));
        assert_eq!(store.snapshot(), coord_set(&[(10, 65, 10)]));
    }

    #[test]
    fn round_trips_through_a_fresh_instance() {
        let dir = tempfile::tempdir().unwrap();
        let stored = coord_set(&[(0, 64, 0), (-12, 70, 300), (7, -3, 7)]);
        {
            let mut store = store_in(dir.path());
            assert_eq!(store.store_all(&stored).status, BatchStatus::Ok);
        }
        let mut reread = store_in(dir.path());
        assert!(reread.ensure_loaded());
        assert_eq!(reread.snapshot(), stored);
    }

    #[test]
    fn file_uses_one_based_indices() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.store_all(&coord_set(&[(1, 2, 3), (4, 5, 6)]));

        let raw = fs::read_to_string(dir.path().join("coords.json")).unwrap();
        let root: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entries = root.as_object().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains_key("1"));
        assert!(entries.contains_key("2"));
        for record in entries.values() {
            let fields = record.as_object().unwrap();
            assert!(fields.contains_key("x"));
            assert!(fields.contains_key("y"));
            assert!(fields.contains_key("z"));
        }
    }

    #[test]
    fn parse_treats_non_mapping_content_as_empty() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("   \n").is_empty());
        assert!(parse_records("null").is_empty());
        assert!(parse_records("this is not json").is_empty());
        assert!(parse_records("[1, 2, 3]").is_empty());
        assert!(parse_records("42").is_empty());
    }

    #[test]
    fn parse_skips_malformed_entries_and_keeps_the_rest() {
        let contents = r#"{
            "1": {"x": 1, "y": 2, "z": 3},
            "2": {"x": 1, "y": 2},
            "3": {"x": "east", "y": 2, "z": 3},
            "4": "not a record",
            "5": {"x": -4.9, "y": 7.2, "z": 0.0}
        }"#;
        let parsed = parse_records(contents);
        assert_eq!(parsed, coord_set(&[(1, 2, 3), (-4, 7, 0)]));
    }

    #[test]
    fn parse_ignores_index_keys() {
        let contents = r#"{"900": {"x": 1, "y": 1, "z": 1}, "banana": {"x": 2, "y": 2, "z": 2}}"#;
        assert_eq!(parse_records(contents), coord_set(&[(1, 1, 1), (2, 2, 2)]));
    }

    #[test]
    fn snapshot_is_independent_of_later_mutations() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.store_all(&coord_set(&[(1, 1, 1)]));

        let snapshot = store.snapshot();
        store.store_all(&coord_set(&[(2, 2, 2)]));
        assert_eq!(snapshot, coord_set(&[(1, 1, 1)]));
        assert_eq!(store.len(), 2);
    }
}
