use std::{
    borrow::Borrow,
    collections::{hash_map::Entry, HashMap},
    fmt,
    hash::Hash,
};

use thiserror::Error;

/// Two items produced the same key while building a [`UniqueIndex`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate index key {0:?}")]
pub struct DuplicateKey<K: fmt::Debug>(pub K);

/// Read-only lookup table where every item has its own key
#[derive(Debug, Clone)]
pub struct UniqueIndex<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> UniqueIndex<K, V>
where
    K: Hash + Eq + fmt::Debug,
{
    /// Put every item into the index under the key extracted by `key_of`.
    ///
    /// # Errors
    /// The first key produced twice.
    pub fn try_build<I, F>(items: I, key_of: F) -> Result<Self, DuplicateKey<K>>
    where
        I: IntoIterator<Item = V>,
        F: Fn(&V) -> K,
    {
        let mut entries = HashMap::new();
        for item in items {
            match entries.entry(key_of(&item)) {
                Entry::Occupied(existing) => {
                    let (key, _) = existing.remove_entry();
                    return Err(DuplicateKey(key));
                }
                Entry::Vacant(slot) => {
                    let _ = slot.insert(item);
                }
            }
        }

        Ok(Self { entries })
    }

    /// Put every item into the index under the key extracted by `key_of`.
    /// Use it for the items with the statically known unique keys.
    ///
    /// # Panics
    /// Some key is produced twice.
    pub fn build<I, F>(items: I, key_of: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: Fn(&V) -> K,
    {
        Self::try_build(items, key_of).unwrap_or_else(|err| panic!("{}", err))
    }

    /// The item with the given key, if any
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// The number of the indexed items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is there no item at all?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_keys() {
        let index = UniqueIndex::try_build(["north", "east", "southwest"], |s| s.len()).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(&4), Some(&"east"));
        assert_eq!(index.get(&7), None);
    }

    #[test]
    fn borrowed_lookup() {
        let index = UniqueIndex::build(vec![(1, "N"), (2, "NE")], |&(_, abbr)| abbr.to_string());
        assert_eq!(index.get("NE"), Some(&(2, "NE")));
        assert!(index.get("ne").is_none());
    }

    #[test]
    fn empty() {
        let index = UniqueIndex::try_build(Vec::<u8>::new(), |&x| x).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn duplicate_is_reported() {
        let err = UniqueIndex::try_build(["N", "NE", "E", "NE"], |s| *s).unwrap_err();
        assert_eq!(err, DuplicateKey("NE"));
        assert_eq!(err.to_string(), "duplicate index key \"NE\"");
    }

    #[test]
    #[should_panic(expected = "duplicate index key 'S'")]
    fn duplicate_panics_on_build() {
        let _index = UniqueIndex::build(["S", "SW", "SE"], |s| s.chars().next().unwrap());
    }
}
