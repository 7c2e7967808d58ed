//! Save store: high scores plus generic per-game ints and strings
//!
//! The whole [`SaveData`] is loaded once when the store is opened and
//! written back in full after every mutation, on suspend and on exit.
//! Write failures are logged and otherwise ignored.

use super::backend::PreferenceBackend;
use super::save_data::SaveData;
use crate::consts::SAVE_KEY;
use crate::highscores::HighScoreTable;

/// Persistent key/value store for every mini-game
pub struct SaveStore {
    backend: Box<dyn PreferenceBackend>,
    key: String,
    data: SaveData,
}

impl std::fmt::Debug for SaveStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveStore")
            .field("key", &self.key)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl SaveStore {
    /// Open the store under the default namespace key
    pub fn open(backend: impl PreferenceBackend + 'static) -> Self {
        Self::open_with_key(backend, SAVE_KEY)
    }

    /// Open the store under a custom namespace key
    pub fn open_with_key(backend: impl PreferenceBackend + 'static, key: &str) -> Self {
        let data = match backend.read(key) {
            Ok(Some(json)) if !json.is_empty() => match SaveData::from_json(&json) {
                Ok(data) => {
                    log::info!(
                        "Loaded save data ({} high scores)",
                        data.high_scores.len()
                    );
                    data
                }
                Err(e) => {
                    log::warn!("Save data under `{key}` is corrupt, starting fresh: {e}");
                    SaveData::default()
                }
            },
            Ok(_) => {
                log::info!("No save data found, starting fresh");
                SaveData::default()
            }
            Err(e) => {
                log::warn!("Could not read save data, starting fresh: {e}");
                SaveData::default()
            }
        };

        Self {
            backend: Box::new(backend),
            key: key.to_string(),
            data,
        }
    }

    // === High scores ===

    /// Best score for a game (0 if never played)
    pub fn high_score(&self, game_id: &str) -> u32 {
        self.data.high_scores.get(game_id)
    }

    /// Store `score` if it beats the current best; returns true if it did
    pub fn try_save_high_score(&mut self, game_id: &str, score: u32) -> bool {
        if !self.data.high_scores.try_record(game_id, score) {
            return false;
        }
        log::info!("New high score for {game_id}: {score}");
        self.write();
        true
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.data.high_scores
    }

    // === Generic data ===

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.data.ints.insert(key.to_string(), value);
        self.write();
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.data.ints.get(key).copied().unwrap_or(default)
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.data.strings.insert(key.to_string(), value.to_string());
        self.write();
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.data
            .strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Wipe everything and persist the empty state
    pub fn clear_all(&mut self) {
        self.data = SaveData::default();
        log::info!("Save data cleared");
        self.write();
    }

    // === Lifecycle ===

    /// App is being backgrounded
    pub fn on_suspend(&mut self) {
        self.write();
    }

    /// App is exiting
    pub fn on_exit(&mut self) {
        self.write();
    }

    fn write(&mut self) {
        let json = match self.data.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not serialize save data: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.write(&self.key, &json) {
            log::warn!("Could not write save data: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::backend::{MemoryBackend, StorageError};

    /// Backend whose writes always fail
    struct ReadOnly;

    impl PreferenceBackend for ReadOnly {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_try_save_keeps_higher() {
        let mut store = SaveStore::open(MemoryBackend::new());
        assert!(store.try_save_high_score("Stack Tower", 5));
        assert!(!store.try_save_high_score("Stack Tower", 3));
        assert_eq!(store.high_score("Stack Tower"), 5);
    }

    #[test]
    fn test_try_save_replaces_lower() {
        let mut store = SaveStore::open(MemoryBackend::new());
        store.try_save_high_score("Stack Tower", 5);
        assert!(store.try_save_high_score("Stack Tower", 7));
        assert_eq!(store.high_score("Stack Tower"), 7);
    }

    #[test]
    fn test_every_mutation_is_flushed() {
        let backend = MemoryBackend::new();
        let mut store = SaveStore::open(backend.clone());
        assert!(backend.get(SAVE_KEY).is_none());

        store.set_int("coins", 4);
        assert!(backend.get(SAVE_KEY).unwrap().contains("coins"));

        store.set_string("skin", "red");
        store.try_save_high_score("Stack Tower", 9);

        let reopened = SaveStore::open(backend);
        assert_eq!(reopened.get_int("coins", 0), 4);
        assert_eq!(reopened.get_string("skin", ""), "red");
        assert_eq!(reopened.high_score("Stack Tower"), 9);
    }

    #[test]
    fn test_rejected_score_does_not_write() {
        let backend = MemoryBackend::new();
        let mut store = SaveStore::open(backend.clone());
        assert!(!store.try_save_high_score("Stack Tower", 0));
        assert!(backend.get(SAVE_KEY).is_none());
    }

    #[test]
    fn test_defaults_for_missing_keys() {
        let store = SaveStore::open(MemoryBackend::new());
        assert_eq!(store.get_int("nope", 42), 42);
        assert_eq!(store.get_string("nope", "fallback"), "fallback");
        assert_eq!(store.high_score("nope"), 0);
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let backend = MemoryBackend::new();
        backend.put(SAVE_KEY, "not json at all");
        let store = SaveStore::open(backend);
        assert!(store.high_scores().is_empty());
    }

    #[test]
    fn test_negative_high_score_keeps_other_data_on_disk() {
        let backend = MemoryBackend::new();
        backend.put(
            SAVE_KEY,
            r#"{"hsKeys":["Stack Tower","Other"],"hsValues":[12,-1],
                "intKeys":["coins"],"intValues":[40],
                "strKeys":["skin"],"strValues":["red"]}"#,
        );
        let mut store = SaveStore::open(backend.clone());
        assert_eq!(store.high_score("Stack Tower"), 12);
        assert_eq!(store.high_score("Other"), 0);
        assert_eq!(store.get_int("coins", 0), 40);

        store.set_int("x", 1);

        let reopened = SaveStore::open(backend);
        assert_eq!(reopened.high_score("Stack Tower"), 12);
        assert_eq!(reopened.get_int("coins", 0), 40);
        assert_eq!(reopened.get_int("x", 0), 1);
        assert_eq!(reopened.get_string("skin", ""), "red");
    }

    #[test]
    fn test_clear_all_persists_empty_state() {
        let backend = MemoryBackend::new();
        let mut store = SaveStore::open(backend.clone());
        store.try_save_high_score("a", 3);
        store.clear_all();
        assert_eq!(store.high_score("a"), 0);
        assert_eq!(SaveStore::open(backend).high_score("a"), 0);
    }

    #[test]
    fn test_suspend_and_exit_flush() {
        let backend = MemoryBackend::new();
        let mut store = SaveStore::open(backend.clone());
        store.on_suspend();
        assert!(backend.get(SAVE_KEY).is_some());
        store.on_exit();
        assert!(backend.get(SAVE_KEY).is_some());
    }

    #[test]
    fn test_write_failures_are_not_surfaced() {
        let mut store = SaveStore::open(ReadOnly);
        assert!(store.try_save_high_score("a", 3));
        assert_eq!(store.high_score("a"), 3);
    }

    #[test]
    fn test_custom_namespace_key() {
        let backend = MemoryBackend::new();
        let mut store = SaveStore::open_with_key(backend.clone(), "OtherSave");
        store.set_int("x", 1);
        assert!(backend.get("OtherSave").is_some());
        assert!(backend.get(SAVE_KEY).is_none());
    }
}
