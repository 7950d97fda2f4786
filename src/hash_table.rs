use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::DefaultHashBuilder;
use crate::chain::Chain;
use crate::chain::Cursor;
use crate::entry::Entry;
use crate::primes::next_prime;
use crate::universal::UniversalHash;
use crate::universal::capacity_overflow;
use crate::universal::hash_code;

/// Size estimate used by [`HashTable::new`]; `70 / 0.7` lands on 101 buckets.
const DEFAULT_SIZE_ESTIMATE: usize = 70;

/// Seed used when the OS entropy source is unavailable.
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// `entries / buckets > 0.7`, computed exactly.
#[inline(always)]
fn exceeds_target_load_factor(entries: usize, buckets: usize) -> bool {
    entries as u128 * 10 > buckets as u128 * 7
}

/// `ceil(size_estimate / 0.7)`, computed exactly.
#[inline(always)]
fn target_load_factor_inverse(size_estimate: usize) -> u128 {
    (size_estimate as u128 * 10).div_ceil(7)
}

/// Smallest prime bucket count at or above `target`, never below 2.
fn prime_bucket_count<C>(target: u128) -> usize {
    let max_buckets = isize::MAX as usize / core::mem::size_of::<Option<C>>().max(1);
    if target > max_buckets as u128 {
        capacity_overflow();
    }

    next_prime((target as u64).max(2))
        .and_then(|buckets| usize::try_from(buckets).ok())
        .unwrap_or_else(|| capacity_overflow())
}

fn empty_buckets<C>(len: usize) -> Box<[Option<C>]> {
    (0..len).map(|_| None).collect()
}

fn os_seeded_rng() -> SmallRng {
    SmallRng::try_from_os_rng().unwrap_or_else(|_| SmallRng::seed_from_u64(FALLBACK_SEED))
}

/// Statistics about bucket usage, for tuning and debugging.
///
/// Only compiled with the `stats` feature (and in tests).
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    /// Number of entries in the table
    pub entries: usize,
    /// Length of the bucket array (always prime)
    pub buckets: usize,
    /// Number of buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Insertions that landed in an already populated bucket
    pub collisions: usize,
    /// Load factor (entries / buckets)
    pub load_factor: f64,
    /// Prime modulus of the current universal hash function
    pub modulus: u64,
}

#[cfg(any(test, feature = "stats"))]
impl TableStats {
    /// Pretty-print the statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.entries,
            self.buckets,
            self.load_factor * 100.0
        );
        println!(
            "Bucket Usage: {}/{} ({:.2}% occupied)",
            self.occupied_buckets,
            self.buckets,
            if self.buckets == 0 {
                0.0
            } else {
                (self.occupied_buckets as f64 / self.buckets as f64) * 100.0
            }
        );
        println!("Longest Chain: {}", self.longest_chain);
        println!("Collisions: {}", self.collisions);
        println!("Modulus: {}", self.modulus);
    }
}

/// A separately chained hash table with universal hashing.
///
/// `HashTable<K, V, S, C>` maps keys to values and allows any number of
/// entries per key: every [`insert`](HashTable::insert) adds a new
/// [`Entry`], even when an equal key is already present.
///
/// Keys are hashed with the [`BuildHasher`] `S`, folded to a 32-bit code, and
/// mapped to a bucket with a randomly drawn function
/// `((a * code + b) mod p) mod N`, where `N` (the bucket count) and `p` are
/// primes and `p` exceeds every hash code. Each bucket is a [`Chain`] `C` of
/// entries in insertion order.
///
/// The table grows before an insertion would push the load factor above
/// 0.7: the bucket count roughly doubles to the next prime, a new hash
/// function is drawn, and every entry is moved to its new bucket.
///
/// ## Example
///
/// ```rust
/// use chain_hash::HashTable;
///
/// let mut table = HashTable::new();
/// table.insert("apple", 3);
/// table.insert("pear", 5);
/// table.insert("apple", 7);
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.find_all("apple").count(), 2);
/// assert_eq!(table.find("pear").map(|e| *e.value()), Some(5));
///
/// let removed = table.remove("pear").unwrap();
/// assert_eq!(removed.into_parts(), ("pear", 5));
/// assert!(table.find("pear").is_none());
/// ```
pub struct HashTable<K, V, S = DefaultHashBuilder, C = Vec<Entry<K, V>>> {
    buckets: Box<[Option<C>]>,

    populated: usize,
    collisions: usize,

    family: UniversalHash,
    rng: SmallRng,
    hash_builder: S,

    _phantom: PhantomData<Entry<K, V>>,
}

impl<K, V, S, C> Debug for HashTable<K, V, S, C>
where
    K: Debug,
    V: Debug,
    C: Chain<Entry<K, V>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for entry in self.iter() {
            map.entry(entry.key(), entry.value());
        }
        map.finish()
    }
}

/// The clone keeps the current hash function, so entries stay in the same
/// buckets, but its generator is reseeded: after their next resize the two
/// tables draw different functions.
impl<K, V, S, C> Clone for HashTable<K, V, S, C>
where
    S: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            populated: self.populated,
            collisions: self.collisions,
            family: self.family,
            rng: SmallRng::from_rng(&mut self.rng.clone()),
            hash_builder: self.hash_builder.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq,
{
    /// Creates an empty table sized for about 70 entries (101 buckets),
    /// using the default hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let table: HashTable<u64, String> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 101);
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty table expected to hold about `size_estimate` entries.
    ///
    /// The bucket count is the smallest prime at or above
    /// `size_estimate / 0.7`, so the table reaches its target load factor
    /// at the estimated size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let table: HashTable<u64, u64> = HashTable::with_size_estimate(10);
    /// assert_eq!(table.bucket_count(), 17);
    /// ```
    pub fn with_size_estimate(size_estimate: usize) -> Self {
        Self::with_size_estimate_and_hasher(size_estimate, DefaultHashBuilder::default())
    }
}

impl<K, V, S, C> HashTable<K, V, S, C>
where
    C: Chain<Entry<K, V>>,
{
    /// Returns the number of entries in the table.
    ///
    /// Entries with equal keys (or equal keys and values) each count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, "a");
    /// table.insert(1, "a");
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the length of the bucket array. Always prime.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of entries to buckets.
    ///
    /// Never above 0.7 right after an insertion.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.buckets.len() as f64
    }

    /// Returns how many insertions landed in a bucket that already held
    /// entries.
    ///
    /// Entries moved during a resize are not counted, and
    /// [`clear`](HashTable::clear) does not reset the counter.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Returns a reference to the table's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns an iterator over all entries, bucket by bucket, each bucket in
    /// chain order.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.populated,
        }
    }
}

impl<K, V, S, C> HashTable<K, V, S, C>
where
    K: Hash + Eq,
    S: BuildHasher,
    C: Chain<Entry<K, V>>,
{
    /// Creates an empty table with the default size estimate and the given
    /// hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    ///
    /// use chain_hash::HashTable;
    ///
    /// let mut table: HashTable<&str, i32, _> = HashTable::with_hasher(RandomState::new());
    /// table.insert("a", 1);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_size_estimate_and_hasher(DEFAULT_SIZE_ESTIMATE, hash_builder)
    }

    /// Creates an empty table expected to hold about `size_estimate` entries,
    /// using the given hasher builder.
    ///
    /// The multiplier and offset of the hash function are drawn from a
    /// generator seeded by the operating system.
    pub fn with_size_estimate_and_hasher(size_estimate: usize, hash_builder: S) -> Self {
        Self::with_rng(size_estimate, hash_builder, os_seeded_rng())
    }

    /// Creates an empty table whose hash functions are drawn from a generator
    /// seeded with `seed`.
    ///
    /// With a deterministic hasher builder this makes bucket placement, and
    /// therefore iteration order, reproducible across runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::DefaultHasher;
    /// use std::hash::BuildHasherDefault;
    ///
    /// use chain_hash::HashTable;
    ///
    /// type Fixed = BuildHasherDefault<DefaultHasher>;
    ///
    /// let mut a: HashTable<u32, u32, Fixed> = HashTable::with_seed_and_hasher(100, Fixed::default(), 7);
    /// let mut b: HashTable<u32, u32, Fixed> = HashTable::with_seed_and_hasher(100, Fixed::default(), 7);
    /// for i in 0..500 {
    ///     a.insert(i, i);
    ///     b.insert(i, i);
    /// }
    /// assert!(a.iter().eq(b.iter()));
    /// ```
    pub fn with_seed_and_hasher(size_estimate: usize, hash_builder: S, seed: u64) -> Self {
        Self::with_rng(size_estimate, hash_builder, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(size_estimate: usize, hash_builder: S, mut rng: SmallRng) -> Self {
        let buckets = prime_bucket_count::<C>(target_load_factor_inverse(size_estimate));
        let family = UniversalHash::new(buckets, &mut rng);

        Self {
            buckets: empty_buckets(buckets),
            populated: 0,
            collisions: 0,
            family,
            rng,
            hash_builder,
            _phantom: PhantomData,
        }
    }

    #[inline]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let code = hash_code(self.hash_builder.hash_one(key));
        self.family.compress(code, self.buckets.len())
    }

    /// Inserts a new entry and returns a reference to it.
    ///
    /// Existing entries with an equal key are left in place; the table then
    /// holds one more entry for that key. If the insertion would take the
    /// load factor above 0.7, the table grows first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// let entry = table.insert("key", 1);
    /// assert_eq!(*entry.value(), 1);
    ///
    /// table.insert("key", 2);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> &Entry<K, V> {
        if exceeds_target_load_factor(self.populated + 1, self.buckets.len()) {
            self.resize();
        }

        let index = self.bucket_index(&key);
        let chain = self.buckets[index].get_or_insert_with(C::default);
        if !chain.is_empty() {
            self.collisions += 1;
        }
        self.populated += 1;

        chain.append(Entry::new(key, value))
    }

    /// Returns the first entry, in chain order, whose key equals `key`.
    ///
    /// When several entries share the key, which one is returned is only
    /// stable until the next resize.
    ///
    /// The key may be any borrowed form of the table's key type, but `Hash`
    /// and `Eq` on the borrowed form must match those for the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(String::from("hello"), 42);
    ///
    /// let found = table.find("hello").unwrap();
    /// assert_eq!(found.value(), &42);
    /// assert!(table.find("world").is_none());
    /// ```
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.populated == 0 {
            return None;
        }

        self.buckets[self.bucket_index(key)]
            .as_ref()?
            .iter()
            .find(|entry| entry.key_eq(key))
    }

    /// Returns an iterator over every entry whose key equals `key`, in chain
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert('x', 1);
    /// table.insert('y', 2);
    /// table.insert('x', 3);
    ///
    /// let mut values: Vec<i32> = table.find_all(&'x').map(|e| *e.value()).collect();
    /// values.sort();
    /// assert_eq!(values, [1, 3]);
    /// ```
    pub fn find_all<'a, Q>(&'a self, key: &'a Q) -> impl Iterator<Item = &'a Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .as_ref()
            .into_iter()
            .flat_map(|chain| chain.iter())
            .filter(move |entry| entry.key_eq(key))
    }

    /// Returns `true` if at least one entry has a key equal to `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes and returns the first entry, in chain order, whose key equals
    /// `key`.
    ///
    /// Only one entry is removed per call, even if several share the key.
    /// Returns `None`, leaving the table unchanged, if no key matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(7, "a");
    /// table.insert(7, "b");
    ///
    /// assert!(table.remove(&7).is_some());
    /// assert!(table.remove(&7).is_some());
    /// assert!(table.remove(&7).is_none());
    /// assert!(table.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.populated == 0 {
            return None;
        }

        let index = self.bucket_index(key);
        let mut cursor = self.buckets[index].as_mut()?.cursor();
        let removed = loop {
            if cursor.next()?.key_eq(key) {
                break cursor.remove_current();
            }
        }?;

        self.populated -= 1;
        Some(removed)
    }

    /// Removes every entry.
    ///
    /// The bucket count and hash function are kept, so a cleared table
    /// refills without resizing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, 1);
    /// let buckets = table.bucket_count();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert!(table.find(&1).is_none());
    /// assert_eq!(table.bucket_count(), buckets);
    /// ```
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
        self.populated = 0;
    }

    /// Removes every entry and returns them as an iterator.
    ///
    /// The table is empty as soon as `drain` returns. Entries the iterator
    /// does not yield are dropped with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("a", 1);
    /// table.insert("b", 2);
    ///
    /// let mut drained: Vec<(&str, i32)> = table.drain().map(|e| e.into_parts()).collect();
    /// drained.sort();
    /// assert_eq!(drained, [("a", 1), ("b", 2)]);
    /// assert!(table.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V, C> {
        let len = self.buckets.len();
        let buckets = core::mem::replace(&mut self.buckets, empty_buckets(len));
        let remaining = core::mem::replace(&mut self.populated, 0);

        Drain {
            inner: IntoIter::new(buckets, remaining),
            _table: PhantomData,
        }
    }

    /// Grows the bucket array to the next prime at or above twice its length,
    /// draws a new hash function, and moves every entry.
    #[cold]
    #[inline(never)]
    fn resize(&mut self) {
        let doubled = (self.buckets.len() as u128) * 2;
        let buckets = prime_bucket_count::<C>(doubled);
        self.family.grow(buckets, &mut self.rng);

        let old = core::mem::replace(&mut self.buckets, empty_buckets(buckets));
        for entry in old.into_vec().into_iter().flatten().flatten() {
            self.place(entry);
        }
    }

    /// Appends an existing entry to its bucket without touching the entry
    /// count, the collision counter, or the load factor check.
    #[inline]
    fn place(&mut self, entry: Entry<K, V>) {
        let index = self.bucket_index(entry.key());
        self.buckets[index]
            .get_or_insert_with(C::default)
            .append(entry);
    }

    /// Returns bucket usage statistics.
    ///
    /// Requires the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn stats(&self) -> TableStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for chain in self.buckets.iter().flatten() {
            if !chain.is_empty() {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(chain.len());
        }

        TableStats {
            entries: self.populated,
            buckets: self.buckets.len(),
            occupied_buckets,
            longest_chain,
            collisions: self.collisions,
            load_factor: self.load_factor(),
            modulus: self.family.modulus(),
        }
    }

    /// Computes a histogram of chain lengths.
    ///
    /// Index `i` of the result holds the number of buckets whose chain has
    /// exactly `i` entries; empty and never-used buckets both count towards
    /// index 0. The counts sum to [`bucket_count`](HashTable::bucket_count).
    ///
    /// Requires the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_length_histogram(&self) -> Vec<usize> {
        let mut hist = alloc::vec![0usize];
        for bucket in self.buckets.iter() {
            let len = bucket.as_ref().map_or(0, |chain| chain.len());
            if hist.len() <= len {
                hist.resize(len + 1, 0);
            }
            hist[len] += 1;
        }
        hist
    }
}

impl<K, V, S, C> Default for HashTable<K, V, S, C>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    C: Chain<Entry<K, V>>,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S, C> Extend<(K, V)> for HashTable<K, V, S, C>
where
    K: Hash + Eq,
    S: BuildHasher,
    C: Chain<Entry<K, V>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S, C> FromIterator<(K, V)> for HashTable<K, V, S, C>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    C: Chain<Entry<K, V>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let size_estimate = iter.size_hint().0.max(DEFAULT_SIZE_ESTIMATE);
        let mut table = Self::with_size_estimate_and_hasher(size_estimate, S::default());
        table.extend(iter);
        table
    }
}

impl<'a, K, V, S, C> IntoIterator for &'a HashTable<K, V, S, C>
where
    C: Chain<Entry<K, V>>,
{
    type IntoIter = Iter<'a, K, V, C>;
    type Item = &'a Entry<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S, C> IntoIterator for HashTable<K, V, S, C>
where
    C: Chain<Entry<K, V>>,
{
    type IntoIter = IntoIter<K, V, C>;
    type Item = Entry<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets, self.populated)
    }
}

/// An iterator over the entries of a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, K, V, C>
where
    C: Chain<Entry<K, V>> + 'a,
    K: 'a,
    V: 'a,
{
    buckets: core::slice::Iter<'a, Option<C>>,
    chain: Option<C::Iter<'a>>,
    remaining: usize,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: Chain<Entry<K, V>> + 'a,
    K: 'a,
    V: 'a,
{
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(entry);
            }

            // Chain iterators need not be fused, so an exhausted one is
            // never polled again.
            self.chain = None;
            self.chain = self.buckets.next()?.as_ref().map(|chain| chain.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C>
where
    C: Chain<Entry<K, V>> + 'a,
    K: 'a,
    V: 'a,
{
}

impl<'a, K, V, C> FusedIterator for Iter<'a, K, V, C>
where
    C: Chain<Entry<K, V>> + 'a,
    K: 'a,
    V: 'a,
{
}

/// An owning iterator over the entries of a [`HashTable`].
///
/// This struct is created by the `into_iter` method on [`HashTable`].
pub struct IntoIter<K, V, C>
where
    C: Chain<Entry<K, V>>,
{
    inner: core::iter::Flatten<core::iter::Flatten<alloc::vec::IntoIter<Option<C>>>>,
    remaining: usize,
    _marker: PhantomData<Entry<K, V>>,
}

impl<K, V, C> IntoIter<K, V, C>
where
    C: Chain<Entry<K, V>>,
{
    fn new(buckets: Box<[Option<C>]>, remaining: usize) -> Self {
        Self {
            inner: buckets.into_vec().into_iter().flatten().flatten(),
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<K, V, C> Iterator for IntoIter<K, V, C>
where
    C: Chain<Entry<K, V>>,
{
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> where C: Chain<Entry<K, V>> {}

/// A draining iterator over the entries of a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`].
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, K, V, C>
where
    C: Chain<Entry<K, V>>,
{
    inner: IntoIter<K, V, C>,
    _table: PhantomData<&'a mut Box<[Option<C>]>>,
}

impl<K, V, C> Iterator for Drain<'_, K, V, C>
where
    C: Chain<Entry<K, V>>,
{
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, C> ExactSizeIterator for Drain<'_, K, V, C> where C: Chain<Entry<K, V>> {}
