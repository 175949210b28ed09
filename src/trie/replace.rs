//! Replacement of key occurrences.
//!
//! A scan reports overlapping matches; replacement needs a non-overlapping
//! subset. The leftmost match wins, the longest one if several start at the
//! same position, and anything overlapping a chosen match is dropped.

use std::cmp::Reverse;

use super::ac_trie::AcTrie;
use super::keyword_map::KeywordMap;
use super::matches::Match;
use super::unit_trait::TrieUnit;

/// Picks non-overlapping matches, leftmost first, longest first among equal
/// starts. The result is sorted by start.
pub(crate) fn select_leftmost_longest<C>(mut matches: Vec<Match<C>>) -> Vec<Match<C>> {
    matches.sort_by_key(|m| (m.start(), Reverse(m.end())));
    let found = matches.len();
    let mut covered = 0;
    matches.retain(|m| {
        let keep = m.start() >= covered;
        if keep {
            covered = m.end();
        }
        keep
    });
    tracing::trace!(found, selected = matches.len(), "selected matches to replace");
    matches
}

/// Copies `input`, substituting each selected match with its replacement.
/// A match whose replacement is `None` is copied through unchanged.
pub(crate) fn splice<C, R, F>(input: &[C], selected: &[Match<C>], mut replacement: F) -> Vec<C>
where
    C: Clone,
    R: IntoIterator<Item = C>,
    F: FnMut(&Match<C>) -> Option<R>,
{
    let mut output = Vec::with_capacity(input.len());
    let mut cursor = 0;
    for m in selected {
        output.extend_from_slice(&input[cursor..m.start()]);
        match replacement(m) {
            Some(units) => output.extend(units),
            None => output.extend_from_slice(&input[m.start()..m.end()]),
        }
        cursor = m.end();
    }
    output.extend_from_slice(&input[cursor..]);
    output
}

impl<C: TrieUnit, V> AcTrie<C, V> {
    /// Replaces key occurrences in `input` with the units returned by
    /// `replacer`, which receives the match and the key's value.
    ///
    /// Overlapping occurrences are resolved leftmost-longest: the match that
    /// starts first is replaced (the longest of those starting together) and
    /// every match overlapping it is left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use libactrie::trie::AcTrie;
    ///
    /// let mut trie = AcTrie::new();
    /// trie.insert("ab", 'X').unwrap();
    /// trie.insert("bc", 'Y').unwrap();
    /// let out: String = trie
    ///     .replace_all("abc".chars(), |_, v| [*v])
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(out, "Xc");
    /// ```
    pub fn replace_all<I, F, R>(&mut self, input: I, replacer: F) -> Vec<C>
    where
        I: IntoIterator<Item = C>,
        F: FnMut(&Match<C>, &V) -> R,
        R: IntoIterator<Item = C>,
    {
        KeywordMap::replace_all(self, input, replacer)
    }
}

impl<V> AcTrie<char, V> {
    /// [`replace_all`](AcTrie::replace_all) over a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use libactrie::trie::AcTrie;
    ///
    /// let mut trie = AcTrie::new();
    /// trie.insert("colour", "color").unwrap();
    /// trie.insert("flavour", "flavor").unwrap();
    /// let out = trie.replace_all_str("colour and flavour", |_, v| *v);
    /// assert_eq!(out, "color and flavor");
    /// ```
    pub fn replace_all_str<F, S>(&mut self, text: &str, mut replacer: F) -> String
    where
        F: FnMut(&Match<char>, &V) -> S,
        S: AsRef<str>,
    {
        self.replace_all(text.chars(), |m, value| {
            replacer(m, value).as_ref().chars().collect::<Vec<char>>()
        })
        .into_iter()
        .collect()
    }
}
