use core::borrow::Borrow;

/// A key-value pair stored in a [`HashTable`](crate::HashTable).
///
/// Entries are created by [`HashTable::insert`](crate::HashTable::insert)
/// and never change afterwards. Each insertion produces its own entry, so a
/// table may hold several entries with equal keys, or even equal keys and
/// values.
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashTable;
///
/// let mut table = HashTable::new();
/// let entry = table.insert("answer", 42);
/// assert_eq!(entry.key(), &"answer");
/// assert_eq!(entry.value(), &42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub(crate) fn key_eq<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let candidate: &Q = self.key.borrow();
        candidate == key
    }

    /// Returns the key of this entry.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of this entry.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_parts()
    }
}
