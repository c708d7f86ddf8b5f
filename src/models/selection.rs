use thiserror::Error;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{config::SELECTION, data::KeyValueStorage, domain::Symbol};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The set is full. The caller resolves it with [`SelectionStore::replace`].
    #[error("selection already holds the maximum of {capacity} coins")]
    CapacityExceeded { capacity: usize },
}

/// Ordered, bounded set of tracked symbols, written through to durable storage.
pub struct SelectionStore {
    symbols: Vec<Symbol>,
    capacity: usize,
    storage: Box<dyn KeyValueStorage>,
    storage_key: &'static str,
}

impl SelectionStore {
    /// Load the persisted selection. Missing or corrupt data yields an empty set.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        Self::load_with(storage, SELECTION.capacity, SELECTION.storage_key)
    }

    pub fn load_with(
        storage: Box<dyn KeyValueStorage>,
        capacity: usize,
        storage_key: &'static str,
    ) -> Self {
        let symbols = storage
            .get_item(storage_key)
            .map(|raw| decode_selection(&raw, capacity))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Loaded selection: {:?}", symbols);
        }

        Self {
            symbols,
            capacity,
            storage,
            storage_key,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append `symbol`. Already present is a successful no-op.
    pub fn add(&mut self, symbol: Symbol) -> Result<(), SelectionError> {
        if self.contains(&symbol) {
            return Ok(());
        }
        if self.is_full() {
            return Err(SelectionError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.symbols.push(symbol);
        self.persist();
        Ok(())
    }

    /// Remove `old` and append `new` at the end. No-op if `old` is absent.
    pub fn replace(&mut self, old: &Symbol, new: Symbol) {
        if !self.contains(old) {
            return;
        }
        self.symbols.retain(|s| s != old);
        if !self.symbols.contains(&new) {
            self.symbols.push(new);
        }
        self.persist();
    }

    /// Idempotent.
    pub fn remove(&mut self, symbol: &Symbol) {
        self.symbols.retain(|s| s != symbol);
        self.persist();
    }

    fn persist(&mut self) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Saving selection: {:?}", self.symbols);
        }
        let encoded = match serde_json::to_string(&self.symbols) {
            Ok(s) => s,
            Err(e) => {
                log::error!("Failed to encode selection: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(self.storage_key, &encoded) {
            log::error!("Failed to persist selection: {:#}", e);
        }
    }
}

/// Lenient decode: bad entries are skipped, duplicates dropped, length capped.
fn decode_selection(raw: &str, capacity: usize) -> Vec<Symbol> {
    let Ok(entries) = serde_json::from_str::<Vec<String>>(raw) else {
        log::warn!("Persisted selection is corrupt. Starting empty.");
        return Vec::new();
    };
    let mut out: Vec<Symbol> = Vec::with_capacity(capacity);
    for sym in entries.iter().filter_map(|e| Symbol::new(e)) {
        if out.len() == capacity {
            break;
        }
        if !out.contains(&sym) {
            out.push(sym);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStorage;

    const KEY: &str = "selectedCoins";

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    fn names(store: &SelectionStore) -> Vec<&str> {
        store.symbols().iter().map(Symbol::as_str).collect()
    }

    fn store_with(items: &[&str]) -> (SelectionStore, MemoryStorage) {
        let backing = MemoryStorage::default();
        let mut store = SelectionStore::load_with(Box::new(backing.clone()), 5, KEY);
        for s in items {
            store.add(sym(s)).unwrap();
        }
        (store, backing)
    }

    #[test]
    fn sixth_add_fails_and_leaves_set_unchanged() {
        let (mut store, backing) = store_with(&["BTC", "ETH", "SOL", "ADA", "XRP"]);
        let before = backing.get_item(KEY);

        let err = store.add(sym("DOGE")).unwrap_err();
        assert_eq!(err, SelectionError::CapacityExceeded { capacity: 5 });
        assert_eq!(names(&store), vec!["BTC", "ETH", "SOL", "ADA", "XRP"]);
        assert_eq!(backing.get_item(KEY), before);
    }

    #[test]
    fn adding_existing_symbol_is_noop_even_when_full() {
        let (mut store, _) = store_with(&["BTC", "ETH", "SOL", "ADA", "XRP"]);
        assert!(store.add(sym("eth")).is_ok());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn replace_appends_new_symbol_at_end() {
        let (mut store, backing) = store_with(&["BTC", "SOL", "ADA"]);
        store.replace(&sym("BTC"), sym("ETH"));
        assert_eq!(names(&store), vec!["SOL", "ADA", "ETH"]);
        assert_eq!(backing.get_item(KEY).as_deref(), Some(r#"["SOL","ADA","ETH"]"#));
    }

    #[test]
    fn replace_with_absent_old_is_noop() {
        let (mut store, _) = store_with(&["BTC", "SOL"]);
        store.replace(&sym("DOGE"), sym("ETH"));
        assert_eq!(names(&store), vec!["BTC", "SOL"]);
    }

    #[test]
    fn remove_is_idempotent_and_persists() {
        let (mut store, backing) = store_with(&["BTC", "SOL"]);
        store.remove(&sym("BTC"));
        store.remove(&sym("BTC"));
        assert_eq!(names(&store), vec!["SOL"]);
        assert_eq!(backing.get_item(KEY).as_deref(), Some(r#"["SOL"]"#));
    }

    #[test]
    fn every_mutation_is_visible_to_a_fresh_load() {
        let (mut store, backing) = store_with(&["BTC"]);
        store.add(sym("eth")).unwrap();
        let reloaded = SelectionStore::load_with(Box::new(backing.clone()), 5, KEY);
        assert_eq!(names(&reloaded), vec!["BTC", "ETH"]);
    }

    #[test]
    fn missing_or_corrupt_storage_loads_empty() {
        let empty = SelectionStore::load_with(Box::new(MemoryStorage::default()), 5, KEY);
        assert!(empty.is_empty());

        let corrupt = MemoryStorage::with_item(KEY, "{oops");
        let store = SelectionStore::load_with(Box::new(corrupt), 5, KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn load_normalises_dedups_and_truncates() {
        let raw = r#"["btc","BTC","eth","","sol","ada","xrp","doge"]"#;
        let store = SelectionStore::load_with(Box::new(MemoryStorage::with_item(KEY, raw)), 5, KEY);
        assert_eq!(names(&store), vec!["BTC", "ETH", "SOL", "ADA", "XRP"]);
    }
}
