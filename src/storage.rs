use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub const KEY_PLAYERS: &str = "wolfpack_players";
pub const KEY_META: &str = "wolfpack_meta";
pub const KEY_LOGS: &str = "wolfpack_logs";
pub const KEY_SETUP_CONFIG: &str = "wolfpack_setup_config";
pub const KEY_AI_CONFIG: &str = "wolfpack_ai_config";

/// Key to JSON-blob store backed by one file per key. All failures are
/// swallowed; in-memory state stays authoritative.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Store under the user's config directory.
    pub fn open() -> Self {
        let mut root = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push("wolfpack");
        Self::at(root)
    }

    /// Store rooted at an arbitrary directory.
    pub fn at(root: PathBuf) -> Self {
        fs::create_dir_all(&root).ok();
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load a key, falling back to the default on any failure.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.try_load(key).unwrap_or_default()
    }

    /// Load a key, or None if it is absent or unparseable.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        fs::read_to_string(self.key_path(key))
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            let _ = fs::write(self.key_path(key), json);
        }
    }

    pub fn clear(&self, key: &str) {
        let _ = fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{AiConfig, SetupConfig};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_store() -> Store {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        Store::at(std::env::temp_dir().join(format!("wolfpack_store_{nanos}")))
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store();
        let config = AiConfig {
            api_key: "sk-test".into(),
            ..AiConfig::default()
        };
        store.save(KEY_AI_CONFIG, &config);

        let back: AiConfig = store.load(KEY_AI_CONFIG);
        assert_eq!(back, config);
    }

    #[test]
    fn missing_key_loads_default() {
        let store = temp_store();
        let setup: SetupConfig = store.load(KEY_SETUP_CONFIG);
        assert_eq!(setup, SetupConfig::default());
        assert!(store.try_load::<SetupConfig>(KEY_SETUP_CONFIG).is_none());
    }

    #[test]
    fn corrupt_file_loads_default() {
        let store = temp_store();
        fs::write(store.key_path(KEY_SETUP_CONFIG), "{not valid json").unwrap();
        let setup: SetupConfig = store.load(KEY_SETUP_CONFIG);
        assert_eq!(setup, SetupConfig::default());
        assert!(store.try_load::<SetupConfig>(KEY_SETUP_CONFIG).is_none());
    }

    #[test]
    fn clear_removes_only_the_named_key() {
        let store = temp_store();
        store.save(KEY_SETUP_CONFIG, &SetupConfig::default());
        store.save(KEY_AI_CONFIG, &AiConfig::default());

        store.clear(KEY_SETUP_CONFIG);
        assert!(store.try_load::<SetupConfig>(KEY_SETUP_CONFIG).is_none());
        assert!(store.try_load::<AiConfig>(KEY_AI_CONFIG).is_some());

        // Clearing an absent key is a no-op.
        store.clear(KEY_SETUP_CONFIG);
    }
}
