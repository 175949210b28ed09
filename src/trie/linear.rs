//! A hash-map-backed keyword container for small key sets.
//!
//! Scanning checks every key against the tail of the input at every position,
//! so it costs O(input × keys) but needs no compilation step.

use std::collections::VecDeque;

use hashbrown::HashMap;

use super::error::TrieError;
use super::key::IntoKey;
use super::keyword_map::KeywordMap;
use super::matches::Match;
use super::unit_trait::TrieUnit;

/// Keyword container storing keys in a hash map.
///
/// Iteration order of [`items`](KeywordMap::items) is unspecified.
#[derive(Clone, Debug)]
pub struct LinearMap<C: TrieUnit, V> {
    entries: HashMap<Vec<C>, V>,
}

impl<C: TrieUnit, V> LinearMap<C, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        LinearMap {
            entries: HashMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        LinearMap {
            entries: HashMap::with_capacity(capacity),
        }
    }
}

impl<C: TrieUnit, V> Default for LinearMap<C, V> {
    fn default() -> Self {
        LinearMap::new()
    }
}

impl<C: TrieUnit, V> KeywordMap<C, V> for LinearMap<C, V> {
    fn insert(&mut self, key: impl IntoKey<C>, value: V) -> Result<Option<V>, TrieError> {
        let key = key.collect_key();
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }
        Ok(self.entries.insert(key.into_vec(), value))
    }

    fn remove(&mut self, key: impl IntoKey<C>) -> Result<V, TrieError> {
        let key = key.collect_key();
        self.entries
            .remove(key.as_slice())
            .ok_or(TrieError::KeyNotFound)
    }

    fn get(&self, key: impl IntoKey<C>) -> Option<&V> {
        let key = key.collect_key();
        self.entries.get(key.as_slice())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn items<'a>(&'a self) -> impl Iterator<Item = (Vec<C>, &'a V)>
    where
        V: 'a,
    {
        self.entries.iter().map(|(key, value)| (key.clone(), value))
    }

    fn find_iter<I>(&mut self, input: I) -> impl Iterator<Item = Match<C>>
    where
        I: IntoIterator<Item = C>,
    {
        let longest = self.entries.keys().map(Vec::len).max().unwrap_or(0);
        LinearFindIter {
            map: self,
            input: input.into_iter(),
            window: VecDeque::with_capacity(longest),
            longest,
            position: 0,
            pending: Vec::new(),
        }
    }
}

/// Scan over a [`LinearMap`].
struct LinearFindIter<'m, C: TrieUnit, V, I> {
    map: &'m LinearMap<C, V>,
    input: I,
    window: VecDeque<C>,
    longest: usize,
    position: usize,
    /// Matches ending at `position`, shortest first, popped from the back.
    pending: Vec<Match<C>>,
}

impl<C: TrieUnit, V, I: Iterator<Item = C>> Iterator for LinearFindIter<'_, C, V, I> {
    type Item = Match<C>;

    fn next(&mut self) -> Option<Match<C>> {
        loop {
            if let Some(m) = self.pending.pop() {
                return Some(m);
            }
            let unit = self.input.next()?;
            self.position += 1;
            self.window.push_back(unit);
            if self.window.len() > self.longest {
                self.window.pop_front();
            }
            let tail = self.window.make_contiguous();
            self.pending.extend(
                self.map
                    .entries
                    .keys()
                    .filter(|key| tail.ends_with(key))
                    .map(|key| Match::new(self.position, key.clone())),
            );
            self.pending.sort_by_key(Match::len);
        }
    }
}
