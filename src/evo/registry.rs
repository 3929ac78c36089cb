//! Name-keyed registries for criteria and agents.

use indexmap::IndexMap;

/// An ordered, name-keyed collection.
///
/// Registration order is preserved; re-registering a name replaces the
/// entry in place so its position never changes.
#[derive(Debug)]
pub struct Registry<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `item` under `name`, returning the entry it replaced.
    pub fn register(&mut self, name: impl Into<String>, item: T) -> Option<T> {
        self.entries.insert(name.into(), item)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Registration index of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The entry at `index` in registration order.
    pub fn get_index(&self, index: usize) -> Option<(&str, &T)> {
        self.entries
            .get_index(index)
            .map(|(name, item)| (name.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, item)| (name.as_str(), item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_preserves_order() {
        let mut reg = Registry::new();
        reg.register("b", 1);
        reg.register("a", 2);
        reg.register("c", 3);
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut reg = Registry::new();
        reg.register("x", 1);
        reg.register("y", 2);
        assert_eq!(reg.register("x", 10), Some(1));
        assert_eq!(reg.get_index(0), Some(("x", &10)));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.position("y"), Some(1));
    }

    #[test]
    fn test_unknown_name() {
        let reg: Registry<u8> = Registry::new();
        assert!(reg.get("nope").is_none());
        assert!(!reg.contains("nope"));
        assert!(reg.is_empty());
    }
}
