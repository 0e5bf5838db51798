use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

/// Volatile store for tests and guest sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("mathgames_stars"), None);

        store.set("mathgames_stars", "4".to_string()).unwrap();
        assert_eq!(store.get("mathgames_stars").as_deref(), Some("4"));
        assert_eq!(store.len(), 1);

        store.remove("mathgames_stars").unwrap();
        store.remove("mathgames_stars").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_iter() {
        let store: MemoryStore = [("a", "1"), ("b", "2")].into_iter().collect();
        assert!(store.contains_key("a"));
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }
}
