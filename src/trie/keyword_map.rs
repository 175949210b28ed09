use super::ac_trie::AcTrie;
use super::error::TrieError;
use super::key::IntoKey;
use super::matches::Match;
use super::replace::{select_leftmost_longest, splice};
use super::unit_trait::TrieUnit;

/// The capabilities shared by every keyword container: mutation, lookup and
/// scanning for key occurrences.
///
/// [`AcTrie`] scans in time linear in the input; [`LinearMap`](super::LinearMap)
/// checks every key at every position and suits a handful of keys. Both report
/// matches in the same order: by end position, longest first among matches
/// with the same end.
///
/// # Examples
///
/// ```
/// use libactrie::trie::{AcTrie, KeywordMap, LinearMap};
///
/// fn tag<M: KeywordMap<char, &'static str>>(mut map: M) -> Vec<(usize, usize)> {
///     map.insert("ab", "x").unwrap();
///     map.insert("bc", "y").unwrap();
///     map.find_iter("abc".chars()).map(|m| m.span()).collect()
/// }
///
/// assert_eq!(tag(AcTrie::new()), tag(LinearMap::new()));
/// ```
pub trait KeywordMap<C: TrieUnit, V> {
    /// Inserts a key, returning the value previously stored under it.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptyKey`] if the key has no units.
    fn insert(&mut self, key: impl IntoKey<C>, value: V) -> Result<Option<V>, TrieError>;

    /// Removes a key, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyNotFound`] if the key is not stored.
    fn remove(&mut self, key: impl IntoKey<C>) -> Result<V, TrieError>;

    /// Returns the value stored under the key.
    fn get(&self, key: impl IntoKey<C>) -> Option<&V>;

    /// Returns the number of keys.
    fn len(&self) -> usize;

    /// Returns an iterator over all `(key, value)` pairs.
    fn items<'a>(&'a self) -> impl Iterator<Item = (Vec<C>, &'a V)>
    where
        V: 'a;

    /// Returns a lazy iterator over all key occurrences in `input`.
    fn find_iter<I>(&mut self, input: I) -> impl Iterator<Item = Match<C>>
    where
        I: IntoIterator<Item = C>;

    /// True if there are no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the key is stored.
    fn contains_key(&self, key: impl IntoKey<C>) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyNotFound`] if the key is not stored.
    fn try_get(&self, key: impl IntoKey<C>) -> Result<&V, TrieError> {
        self.get(key).ok_or(TrieError::KeyNotFound)
    }

    /// Returns the value stored under the key, or `default` if there is none.
    fn get_or<'a>(&'a self, key: impl IntoKey<C>, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Inserts `value` only if the key is absent, and returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptyKey`] if the key has no units.
    fn setdefault(&mut self, key: impl IntoKey<C>, value: V) -> Result<&V, TrieError> {
        let key = key.collect_key();
        if !self.contains_key(key.as_slice()) {
            self.insert(key.as_slice(), value)?;
        }
        self.try_get(key)
    }

    /// Returns an iterator over all keys.
    fn keys<'a>(&'a self) -> impl Iterator<Item = Vec<C>>
    where
        V: 'a,
    {
        self.items().map(|(key, _)| key)
    }

    /// Returns an iterator over all values.
    fn values<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.items().map(|(_, value)| value)
    }

    /// Returns the matched units of every key occurrence in `input`.
    fn find_all<I>(&mut self, input: I) -> Vec<Vec<C>>
    where
        I: IntoIterator<Item = C>,
    {
        self.find_iter(input).map(Match::into_text).collect()
    }

    /// Replaces non-overlapping key occurrences, leftmost-longest first, with
    /// the units returned by `replacer`.
    fn replace_all<I, F, R>(&mut self, input: I, mut replacer: F) -> Vec<C>
    where
        I: IntoIterator<Item = C>,
        F: FnMut(&Match<C>, &V) -> R,
        R: IntoIterator<Item = C>,
    {
        let input: Vec<C> = input.into_iter().collect();
        let matches: Vec<Match<C>> = self.find_iter(input.iter().cloned()).collect();
        let selected = select_leftmost_longest(matches);
        splice(&input, &selected, |m| {
            self.get(m.text()).map(|value| replacer(m, value))
        })
    }
}

impl<C: TrieUnit, V> KeywordMap<C, V> for AcTrie<C, V> {
    fn insert(&mut self, key: impl IntoKey<C>, value: V) -> Result<Option<V>, TrieError> {
        AcTrie::insert(self, key, value)
    }

    fn remove(&mut self, key: impl IntoKey<C>) -> Result<V, TrieError> {
        AcTrie::remove(self, key)
    }

    fn get(&self, key: impl IntoKey<C>) -> Option<&V> {
        AcTrie::get(self, key)
    }

    fn len(&self) -> usize {
        AcTrie::len(self)
    }

    fn items<'a>(&'a self) -> impl Iterator<Item = (Vec<C>, &'a V)>
    where
        V: 'a,
    {
        AcTrie::items(self)
    }

    fn find_iter<I>(&mut self, input: I) -> impl Iterator<Item = Match<C>>
    where
        I: IntoIterator<Item = C>,
    {
        AcTrie::find_iter(self, input)
    }

    fn setdefault(&mut self, key: impl IntoKey<C>, value: V) -> Result<&V, TrieError> {
        AcTrie::setdefault(self, key, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::LinearMap;

    fn exercise<M: KeywordMap<char, u32>>(mut map: M) {
        assert!(map.is_empty());
        assert_eq!(map.insert("he", 1), Ok(None));
        assert_eq!(map.insert("she", 2), Ok(None));
        assert_eq!(map.insert("he", 3), Ok(Some(1)));
        assert_eq!(map.insert("", 0), Err(TrieError::EmptyKey));
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("she"));
        assert!(!map.contains_key("sh"));
        assert_eq!(map.get_or("sh", &7), &7);
        assert_eq!(map.try_get("x"), Err(TrieError::KeyNotFound));
        assert_eq!(map.setdefault("his", 4), Ok(&4));
        assert_eq!(map.setdefault("his", 5), Ok(&4));

        let mut keys: Vec<String> = map.keys().map(|k| k.into_iter().collect()).collect();
        keys.sort();
        assert_eq!(keys, ["he", "his", "she"]);
        let mut values: Vec<u32> = map.values().copied().collect();
        values.sort();
        assert_eq!(values, [2, 3, 4]);

        let spans: Vec<_> = map.find_iter("ushe".chars()).map(|m| m.span()).collect();
        assert_eq!(spans, [(1, 4), (2, 4)]);
        assert_eq!(map.find_all("his".chars()), [vec!['h', 'i', 's']]);

        let out: String = map
            .replace_all("she said his".chars(), |_, v| char::from_digit(*v, 10))
            .into_iter()
            .collect();
        assert_eq!(out, "2 said 4");

        assert_eq!(map.remove("he"), Ok(3));
        assert_eq!(map.remove("he"), Err(TrieError::KeyNotFound));
        assert_eq!(map.find_iter("ushe".chars()).count(), 1);
        assert_eq!(map.len(), 2);
    }

    fn sorted_values<'v, M: KeywordMap<char, &'v str>>(map: &M) -> Vec<&'v str> {
        let mut values: Vec<&str> = map.values().copied().collect();
        values.sort();
        values
    }

    #[test]
    fn trait_iterators_borrow_values() {
        fn check<'v, M: KeywordMap<char, &'v str> + Default>(names: &'v [String]) {
            let mut map = M::default();
            for (key, name) in ["a", "b"].into_iter().zip(names) {
                map.insert(key, name.as_str()).unwrap();
            }
            assert_eq!(sorted_values(&map), ["alpha", "beta"]);
            assert_eq!(map.items().count(), 2);
            assert_eq!(map.keys().count(), 2);
        }

        let names = [String::from("beta"), String::from("alpha")];
        check::<AcTrie<char, &str>>(&names);
        check::<LinearMap<char, &str>>(&names);
    }

    #[test]
    fn ac_trie_capabilities() {
        exercise(AcTrie::new());
    }

    #[test]
    fn linear_map_capabilities() {
        exercise(LinearMap::new());
    }
}
