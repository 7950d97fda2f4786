#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod chain;

mod entry;

/// A separately chained hash table with universal hashing.
///
/// This module provides [`HashTable`], its iterators, and (with the `stats`
/// feature) `TableStats`.
pub mod hash_table;

pub mod primes;

mod universal;

pub use chain::Chain;
pub use chain::Cursor;
pub use entry::Entry;
pub use hash_table::HashTable;
#[cfg(feature = "stats")]
pub use hash_table::TableStats;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Hasher builder used by [`HashTable::new`].
        ///
        /// `foldhash::fast::RandomState` when the `foldhash` feature is on,
        /// otherwise the standard library's `RandomState`.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// Hasher builder used by [`HashTable::new`].
        ///
        /// The standard library's `RandomState`; enable the `foldhash`
        /// feature for a faster default.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// Hasher builder used by [`HashTable::new`].
        ///
        /// Neither `foldhash` nor `std` is enabled, so keys are hashed with
        /// unkeyed SipHash-2-4. Supply a keyed builder through
        /// [`HashTable::with_hasher`] for inputs an attacker controls.
        #[allow(deprecated)]
        pub type DefaultHashBuilder = core::hash::BuildHasherDefault<core::hash::SipHasher>;
    }
}
