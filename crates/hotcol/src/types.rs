//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a category index in fitted vocabularies.
///
/// These are constrained to be unsigned primitive integers;
/// such that the widest column offset of an encoder fits in `T::max()`.
pub trait IndexType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IndexType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type HCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> HCHashMap<K, V> {
            HCHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> HCHashMap<K, V> {
            HCHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type HCHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type HCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> HCHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> HCHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type HCHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type HCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> HCHashMap<K, V> {
            HCHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> HCHashMap<K, V> {
            HCHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type HCHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Static check that a value is [`Send`].
pub fn check_is_send<T: Send>(_val: &T) {}

/// Static check that a value is [`Sync`].
pub fn check_is_sync<T: Sync>(_val: &T) {}
