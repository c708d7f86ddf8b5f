use anyhow::Result;

#[cfg(not(target_arch = "wasm32"))]
use {
    anyhow::Context,
    serde_json::{Map, Value},
    std::{fs, path::PathBuf},
};

/// Durable string key/value store (the browser's localStorage, or a JSON file natively).
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// Must be durable by the time it returns.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Native stand-in for localStorage: one JSON object keyed by storage key.
/// Values that are themselves JSON are stored inline (`{"selectedCoins": ["BTC"]}`).
#[cfg(not(target_arch = "wasm32"))]
pub struct JsonFileStorage {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let map = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(map)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.read_map() {
            Ok(map) => map.get(key).map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            Err(e) => {
                log::warn!("Ignoring unreadable storage file: {:#}", e);
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut map = self.read_map().unwrap_or_default();
        let stored = serde_json::from_str::<Value>(value)
            .unwrap_or_else(|_| Value::String(value.to_string()));
        map.insert(key.to_string(), stored);
        let text = serde_json::to_string_pretty(&map)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let storage =
            Self::local_storage().ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("localStorage write failed: {:?}", e))
    }
}

#[cfg(test)]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// In-process storage. Clones share the same items.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let s = Self::default();
        s.items.borrow_mut().insert(key.to_string(), value.to_string());
        s
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The platform's durable storage.
pub fn default_storage() -> Box<dyn KeyValueStorage> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(JsonFileStorage::new(crate::config::PERSISTENCE.selection.path))
    }
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserStorage)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("coin_watch_{}_{}.json", name, std::process::id()));
        let _ = fs::remove_file(&p);
        p
    }

    #[test]
    fn file_storage_round_trips_and_keeps_other_keys() {
        let path = temp_path("round_trip");
        let mut s = JsonFileStorage::new(&path);
        assert_eq!(s.get_item("selectedCoins"), None);

        s.set_item("other", "x").unwrap();
        s.set_item("selectedCoins", r#"["BTC"]"#).unwrap();

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(reopened.get_item("selectedCoins").as_deref(), Some(r#"["BTC"]"#));
        assert_eq!(reopened.get_item("other").as_deref(), Some("x"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn selection_is_stored_as_a_json_array() {
        let path = temp_path("array_layout");
        let mut s = JsonFileStorage::new(&path);
        s.set_item("selectedCoins", r#"["BTC","ETH"]"#).unwrap();

        let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["selectedCoins"], serde_json::json!(["BTC", "ETH"]));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn hand_written_array_layout_loads() {
        let path = temp_path("hand_written");
        fs::write(&path, r#"{ "selectedCoins": ["BTC","ETH"] }"#).unwrap();
        let s = JsonFileStorage::new(&path);
        assert_eq!(s.get_item("selectedCoins").as_deref(), Some(r#"["BTC","ETH"]"#));

        let store = crate::models::SelectionStore::load(Box::new(JsonFileStorage::new(&path)));
        let names: Vec<&str> = store.symbols().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["BTC", "ETH"]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_reads_as_missing_and_is_overwritten() {
        let path = temp_path("corrupt");
        fs::write(&path, "{not json").unwrap();
        let mut s = JsonFileStorage::new(&path);
        assert_eq!(s.get_item("selectedCoins"), None);

        s.set_item("selectedCoins", "[]").unwrap();
        assert_eq!(s.get_item("selectedCoins").as_deref(), Some("[]"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn memory_storage_clones_share_items() {
        let a = MemoryStorage::default();
        let mut b = a.clone();
        b.set_item("k", "v").unwrap();
        assert_eq!(a.get_item("k").as_deref(), Some("v"));
    }
}
