//! The matching loop.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::ac_trie::AcTrie;
use super::error::TrieError;
use super::matches::Match;
use super::node_arena::NodeId;
use super::unit_trait::TrieUnit;

/// A lazy iterator over every occurrence of every key of an [`AcTrie`] in an
/// input sequence, overlapping and nested occurrences included.
///
/// Matches come in order of their end position; matches sharing an end come
/// longest first. The input is pulled one unit at a time and only the last
/// `longest key` units are retained, so it may be an unbounded stream.
///
/// Created by [`AcTrie::find_iter`] and [`AcTrie::try_find_iter`].
pub struct FindIter<'t, C: TrieUnit, V, I> {
    trie: &'t AcTrie<C, V>,
    input: I,
    state: NodeId,
    /// Units consumed so far.
    position: usize,
    /// The most recent units, at most `trie.max_depth` of them.
    window: VecDeque<C>,
    /// Next terminal state to report at the current position.
    pending: Option<NodeId>,
}

impl<'t, C: TrieUnit, V, I: Iterator<Item = C>> FindIter<'t, C, V, I> {
    fn new(trie: &'t AcTrie<C, V>, input: I) -> Self {
        debug_assert!(trie.compiled, "scanning a stale automaton");
        FindIter {
            trie,
            input,
            state: NodeId::ROOT,
            position: 0,
            window: VecDeque::with_capacity(trie.max_depth),
            pending: None,
        }
    }

    /// Number of input units consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self, unit: C) {
        self.state = self.trie.next_state(self.state, &unit);
        self.position += 1;
        self.window.push_back(unit);
        if self.window.len() > self.trie.max_depth {
            self.window.pop_front();
        }
        let node = &self.trie.arena[self.state];
        self.pending = if node.is_terminal() {
            Some(self.state)
        } else {
            node.output()
        };
    }

    fn emit(&self, depth: usize) -> Match<C> {
        let text = self
            .window
            .range(self.window.len() - depth..)
            .cloned()
            .collect();
        Match::new(self.position, text)
    }
}

impl<C: TrieUnit, V, I: Iterator<Item = C>> Iterator for FindIter<'_, C, V, I> {
    type Item = Match<C>;

    fn next(&mut self) -> Option<Match<C>> {
        loop {
            if let Some(id) = self.pending {
                let node = &self.trie.arena[id];
                self.pending = node.output();
                return Some(self.emit(node.depth()));
            }
            let unit = self.input.next()?;
            self.advance(unit);
        }
    }
}

impl<C: TrieUnit, V, I: FusedIterator<Item = C>> FusedIterator for FindIter<'_, C, V, I> {}

impl<C: TrieUnit, V> AcTrie<C, V> {
    /// Returns a lazy iterator over all key occurrences in `input`, compiling
    /// the automaton first if the key set changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use libactrie::trie::AcTrie;
    ///
    /// let mut trie = AcTrie::new();
    /// trie.insert("ab", ()).unwrap();
    /// trie.insert("bc", ()).unwrap();
    /// let found: Vec<_> = trie
    ///     .find_iter("abc".chars())
    ///     .map(|m| (m.to_text(), m.span()))
    ///     .collect();
    /// assert_eq!(found, [("ab".to_string(), (0, 2)), ("bc".to_string(), (1, 3))]);
    /// ```
    pub fn find_iter<I>(&mut self, input: I) -> FindIter<'_, C, V, I::IntoIter>
    where
        I: IntoIterator<Item = C>,
    {
        self.compile();
        FindIter::new(self, input.into_iter())
    }

    /// Like [`find_iter`](AcTrie::find_iter) but on a shared borrow, so several
    /// scans can run at once over the same compiled trie.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::StaleAutomaton`] if keys were inserted or removed
    /// since the last [`compile`](AcTrie::compile).
    pub fn try_find_iter<I>(&self, input: I) -> Result<FindIter<'_, C, V, I::IntoIter>, TrieError>
    where
        I: IntoIterator<Item = C>,
    {
        if !self.compiled {
            return Err(TrieError::StaleAutomaton);
        }
        Ok(FindIter::new(self, input.into_iter()))
    }

    /// Returns the matched units of every key occurrence in `input`, in
    /// [`find_iter`](AcTrie::find_iter) order.
    pub fn find_all<I>(&mut self, input: I) -> Vec<Vec<C>>
    where
        I: IntoIterator<Item = C>,
    {
        self.find_iter(input).map(Match::into_text).collect()
    }
}
