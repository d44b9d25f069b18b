use ustr::{Ustr, UstrMap};

/// Insertion-ordered storage with lookup by interned name
pub struct UstrIndexMap<T> {
    storage: Vec<T>,
    keys: Vec<Ustr>,
    map: UstrMap<usize>,
}

impl<T> Default for UstrIndexMap<T> {
    fn default() -> Self {
        UstrIndexMap::new()
    }
}

impl<T> UstrIndexMap<T> {
    pub fn new() -> UstrIndexMap<T> {
        UstrIndexMap {
            storage: Vec::new(),
            keys: Vec::new(),
            map: Default::default(),
        }
    }

    /// Key/value pairs in insertion order
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (&str, &T)> {
        self.keys.iter().map(|k| k.as_str()).zip(self.storage.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.as_str())
    }

    pub fn get(&self, key: &Ustr) -> Option<&T> {
        self.map.get(key).map(|id| &self.storage[*id])
    }

    pub fn contains_key(&self, key: &Ustr) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a value. A repeated key keeps its original position and has its value replaced.
    pub fn insert(&mut self, key: Ustr, value: T) {
        if let Some(id) = self.map.get(&key) {
            self.storage[*id] = value;
            return;
        }

        self.map.insert(key, self.storage.len());
        self.storage.push(value);
        self.keys.push(key);
    }
}
