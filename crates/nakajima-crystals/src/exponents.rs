//! Sparse exponent maps over `(index, level)` keys.
//!
//! Zero exponents are never stored, so two maps are equal exactly when they
//! describe the same monomial. Every transform returns a new map.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use nakajima_integers::Integer;
use num_traits::Zero;
use rustc_hash::FxHashMap;

/// Level `k` of a variable `Y_{i,k}` or `A_{i,k}`.
pub type Level = i64;

/// A variable key `(i, k)`.
pub type Key = (usize, Level);

/// Map from `(index, level)` to a nonzero exponent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExponentMap {
    entries: FxHashMap<Key, Integer>,
}

impl ExponentMap {
    /// The empty map, i.e. the identity monomial.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the exponent stored at `(index, level)`.
    #[must_use]
    pub fn get(&self, index: usize, level: Level) -> Option<&Integer> {
        self.entries.get(&(index, level))
    }

    /// Number of stored (nonzero) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true for the identity monomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Integer)> {
        self.entries.iter()
    }

    /// Entries sorted by `(index, level)`, the canonical display order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(Key, &Integer)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(&k, v)| (k, v)).collect();
        entries.sort_unstable_by_key(|&(k, _)| k);
        entries
    }

    /// The levels stored for `index`, in ascending order.
    #[must_use]
    pub fn row(&self, index: usize) -> BTreeMap<Level, Integer> {
        self.entries
            .iter()
            .filter(|((i, _), _)| *i == index)
            .map(|(&(_, k), v)| (k, v.clone()))
            .collect()
    }

    /// Returns true if some entry has the given index.
    #[must_use]
    pub fn mentions(&self, index: usize) -> bool {
        self.entries.keys().any(|&(i, _)| i == index)
    }

    /// Adds `delta` to the exponent at `key`, removing the entry if it
    /// becomes zero.
    pub(crate) fn accumulate(&mut self, key: Key, delta: &Integer) {
        if delta.is_zero() {
            return;
        }
        let entry = self.entries.entry(key).or_insert_with(Integer::zero);
        *entry += delta;
        if entry.is_zero() {
            self.entries.remove(&key);
        }
    }

    /// Returns the product of this monomial with `factor`, given as a list
    /// of exponent deltas.
    #[must_use]
    pub fn multiplied<'a, I>(&self, factor: I) -> Self
    where
        I: IntoIterator<Item = &'a (Key, Integer)>,
    {
        let mut result = self.clone();
        for (key, delta) in factor {
            result.accumulate(*key, delta);
        }
        result
    }
}

impl Hash for ExponentMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent: hash the canonical ordering
        let sorted = self.sorted();
        sorted.len().hash(state);
        for (key, value) in sorted {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl FromIterator<(Key, Integer)> for ExponentMap {
    fn from_iter<T: IntoIterator<Item = (Key, Integer)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.accumulate(key, &value);
        }
        map
    }
}
