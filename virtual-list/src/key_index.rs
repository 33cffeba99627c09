use crate::key::{ItemKey, KeyIndexMap};

/// Maps stable item keys to their current logical index.
///
/// The index is rebuilt in a single pass whenever the item sequence is replaced; it is never
/// patched incrementally.
#[derive(Clone, Debug)]
pub struct KeyIndex<K> {
    map: KeyIndexMap<K>,
}

impl<K: ItemKey> KeyIndex<K> {
    pub fn new() -> Self {
        Self {
            map: KeyIndexMap::<K>::new(),
        }
    }

    pub fn from_items<T>(items: &[T], get_key: impl Fn(&T) -> K) -> Self {
        let mut index = Self::new();
        index.rebuild(items, get_key);
        index
    }

    /// Replaces the mapping with the keys of `items`.
    ///
    /// Keys are expected to be unique. On a duplicate the later index wins.
    pub fn rebuild<T>(&mut self, items: &[T], get_key: impl Fn(&T) -> K) {
        self.map.clear();
        #[cfg(feature = "std")]
        self.map.reserve(items.len());

        for (i, item) in items.iter().enumerate() {
            if let Some(_prev) = self.map.insert(get_key(item), i) {
                vwarn!(prev = _prev, next = i, "KeyIndex: duplicate item key");
            }
        }
        vdebug!(items = items.len(), keys = self.map.len(), "KeyIndex::rebuild");
    }

    pub fn get(&self, key: &K) -> Option<usize> {
        self.map.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: ItemKey> Default for KeyIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
