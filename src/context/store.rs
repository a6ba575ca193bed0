use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::demo::demo_contexts;
use super::ContextRecord;
use crate::error::Result;

/// Per-user context collections with lazy demo seeding.
///
/// A store built with `new` lives for the process only; `load_or_create` and
/// `save` add JSON persistence between runs. Mutation goes through `&mut
/// self`, so concurrent callers wrap the store in a `Mutex` (or give each
/// user a single writer), which also serializes seeding.
pub struct ContextStore {
    users: HashMap<String, Vec<ContextRecord>>,
    data_path: Option<PathBuf>,
}

impl ContextStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        ContextStore {
            users: HashMap::new(),
            data_path: None,
        }
    }

    /// Load from file if it exists, otherwise start empty at that path
    pub fn load_or_create(path: PathBuf) -> Self {
        if path.exists() {
            Self::load(&path).unwrap_or_else(|_| ContextStore {
                users: HashMap::new(),
                data_path: Some(path),
            })
        } else {
            ContextStore {
                users: HashMap::new(),
                data_path: Some(path),
            }
        }
    }

    /// Load all collections from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let users: HashMap<String, Vec<ContextRecord>> = serde_json::from_str(&content)?;
        Ok(ContextStore {
            users,
            data_path: Some(path.to_path_buf()),
        })
    }

    /// Save all collections to the store's JSON file; no-op without a path
    pub fn save(&self) -> Result<()> {
        let path = match &self.data_path {
            Some(path) => path,
            None => return Ok(()),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.users)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Return the user's collection, seeding the demo corpus on first access.
    ///
    /// Seeding happens at most once per user: a collection that already
    /// exists, even an empty one, is returned as-is.
    pub fn get_or_seed(&mut self, user_id: &str) -> &[ContextRecord] {
        self.users
            .entry(user_id.to_string())
            .or_insert_with(demo_contexts)
    }

    /// Append one record, seeding the collection first for an unknown user.
    /// Id uniqueness within a collection is the caller's responsibility.
    pub fn append(&mut self, user_id: &str, record: ContextRecord) {
        self.users
            .entry(user_id.to_string())
            .or_insert_with(demo_contexts)
            .push(record);
    }

    /// Replace a user's collection wholesale (import path and tests)
    pub fn insert_collection(&mut self, user_id: &str, records: Vec<ContextRecord>) {
        self.users.insert(user_id.to_string(), records);
    }

    /// Records currently held for a user, without triggering a seed
    pub fn records(&self, user_id: &str) -> Option<&[ContextRecord]> {
        self.users.get(user_id).map(|records| records.as_slice())
    }

    /// Get statistics
    pub fn stats(&self) -> StoreStats {
        let mut stats = StoreStats {
            total_users: self.users.len(),
            total_records: 0,
            by_kind: BTreeMap::new(),
        };

        for records in self.users.values() {
            stats.total_records += records.len();
            for record in records {
                *stats
                    .by_kind
                    .entry(record.kind.as_str().to_string())
                    .or_insert(0) += 1;
            }
        }

        stats
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StoreStats {
    pub total_users: usize,
    pub total_records: usize,
    pub by_kind: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{EmotionProfile, RecordKind};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample_record(id: &str) -> ContextRecord {
        ContextRecord {
            id: id.to_string(),
            content: "夜にゆっくり散歩した".to_string(),
            date: Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).single().unwrap(),
            emotions: EmotionProfile::new(3.8, &["落ち着き"]),
            keywords: vec!["散歩".to_string()],
            embedding: None,
            kind: RecordKind::Diary,
            parent_id: None,
        }
    }

    #[test]
    fn seeding_happens_at_most_once() {
        let mut store = ContextStore::new();
        let first = store.get_or_seed("alice").len();
        let second = store.get_or_seed("alice").len();
        assert_eq!(first, 5);
        assert_eq!(second, 5);
    }

    #[test]
    fn existing_empty_collection_is_not_reseeded() {
        let mut store = ContextStore::new();
        store.insert_collection("alice", Vec::new());
        assert!(store.get_or_seed("alice").is_empty());
    }

    #[test]
    fn append_seeds_unknown_user_first() {
        let mut store = ContextStore::new();
        store.append("bob", sample_record("r1"));
        assert_eq!(store.records("bob").unwrap().len(), 6);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = ContextStore::new();
        store.insert_collection("carol", Vec::new());
        store.append("carol", sample_record("r1"));
        store.append("carol", sample_record("r2"));
        let ids: Vec<&str> = store
            .records("carol")
            .unwrap()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }

    #[test]
    fn collections_for_different_users_do_not_interact() {
        let mut store = ContextStore::new();
        store.append("alice", sample_record("a"));
        store.insert_collection("bob", Vec::new());
        assert_eq!(store.records("alice").unwrap().len(), 6);
        assert!(store.records("bob").unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contexts.json");

        let mut store = ContextStore::load_or_create(path.clone());
        store.get_or_seed("alice");
        store.append("alice", sample_record("extra"));
        store.save().unwrap();

        let reloaded = ContextStore::load(&path).unwrap();
        let records = reloaded.records("alice").unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[5].id, "extra");
        // Seeded embeddings survive the round trip
        assert!(records[0].embedding.is_some());
    }

    #[test]
    fn load_or_create_tolerates_missing_file() {
        let tmp = TempDir::new().unwrap();
        let store = ContextStore::load_or_create(tmp.path().join("nope.json"));
        assert_eq!(store.stats().total_users, 0);
    }

    #[test]
    fn stats_count_records_by_kind() {
        let mut store = ContextStore::new();
        store.get_or_seed("alice");
        let mut answer = sample_record("ans");
        answer.kind = RecordKind::Answer;
        store.append("alice", answer);

        let stats = store.stats();
        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.total_records, 6);
        assert_eq!(stats.by_kind.get("diary"), Some(&5));
        assert_eq!(stats.by_kind.get("answer"), Some(&1));
    }
}
