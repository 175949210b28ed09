use smallvec::SmallVec;

use super::error::TrieError;
use super::key::{IntoKey, KEY_INLINE};
use super::node::Node;
use super::node_arena::{NodeArena, NodeId};
use super::unit_trait::TrieUnit;

/// A map from keys to values that is also an Aho-Corasick automaton over its
/// keys.
///
/// Keys are sequences of units (`char`s for string keys, or any [`TrieUnit`]
/// such as word tokens). Nodes live in an index arena; the failure and output
/// links that turn the prefix tree into an automaton are computed by
/// [`compile`](AcTrie::compile), which [`find_iter`](AcTrie::find_iter) runs on
/// demand after the key set changes.
///
/// # Examples
///
/// ```
/// use libactrie::trie::AcTrie;
///
/// let mut trie = AcTrie::new();
/// for (key, value) in [("he", 1), ("she", 2), ("his", 3), ("hers", 4)] {
///     trie.insert(key, value).unwrap();
/// }
/// assert_eq!(trie.get("she"), Some(&2));
/// assert!(!trie.contains_key("sh"));
///
/// let spans: Vec<_> = trie.find_iter("ushers".chars()).map(|m| m.span()).collect();
/// assert_eq!(spans, [(1, 4), (2, 4), (2, 6)]);
///
/// trie.remove("he").unwrap();
/// assert_eq!(trie.find_all("ushers".chars()).len(), 2);
/// ```
#[derive(Clone)]
pub struct AcTrie<C: TrieUnit, V> {
    pub(crate) arena: NodeArena<Node<C, V>>,
    len: usize,
    /// False once the key set changed since the last compilation.
    pub(crate) compiled: bool,
    /// Depth of the deepest node as of the last compilation.
    pub(crate) max_depth: usize,
}

impl<C: TrieUnit, V> AcTrie<C, V> {
    /// Creates an empty trie.
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::new(0));
        debug_assert_eq!(root, NodeId::ROOT);
        AcTrie {
            arena,
            len: 0,
            compiled: true,
            max_depth: 0,
        }
    }

    /// Builds a trie from `(key, value)` pairs. Later duplicates overwrite
    /// earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptyKey`] if any key is empty.
    pub fn try_from_iter<K, I>(pairs: I) -> Result<Self, TrieError>
    where
        K: IntoKey<C>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut trie = AcTrie::new();
        for (key, value) in pairs {
            trie.insert(key, value)?;
        }
        Ok(trie)
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node<C, V> {
        &self.arena[NodeId::ROOT]
    }

    /// Returns the node with the given id, or None if no live node has it.
    ///
    /// Ids come from [`Node::get`], [`Node::children`], [`AcTrie::fail`] and
    /// [`AcTrie::output`] of this trie. Removals release slots that later
    /// inserts reuse, so an id held across a mutation may name a different
    /// node than the one it was taken from.
    ///
    /// # Examples
    ///
    /// ```
    /// use libactrie::trie::AcTrie;
    ///
    /// let mut trie = AcTrie::new();
    /// trie.insert("ab", 1).unwrap();
    /// let a = trie.root().get(&'a').unwrap();
    /// assert_eq!(trie.node(a).map(|n| n.depth()), Some(1));
    ///
    /// trie.clear();
    /// assert!(trie.node(a).is_none());
    /// ```
    pub fn node(&self, id: NodeId) -> Option<&Node<C, V>> {
        self.arena.get(id)
    }

    /// Returns the node reached by following `key` from the root. The node
    /// need not be terminal.
    pub fn walk(&self, key: impl IntoKey<C>) -> Option<NodeId> {
        let key = key.collect_key();
        self.find_node(&key)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.arena.alloc(Node::new(0));
        self.len = 0;
        self.compiled = true;
        self.max_depth = 0;
    }

    /// Inserts a key, returning the value previously stored under it.
    ///
    /// Overwriting the value of an existing key leaves a compiled automaton
    /// valid; adding a new key invalidates it.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptyKey`] if the key has no units.
    pub fn insert(&mut self, key: impl IntoKey<C>, value: V) -> Result<Option<V>, TrieError> {
        let id = self.entry_node(key)?;
        let previous = self.arena[id].value_slot().replace(value);
        if previous.is_none() {
            self.len += 1;
            self.compiled = false;
        }
        Ok(previous)
    }

    /// Inserts `value` only if the key is absent, and returns the stored value.
    ///
    /// # Examples
    ///
    /// ```
    /// use libactrie::trie::AcTrie;
    ///
    /// let mut trie = AcTrie::new();
    /// assert_eq!(trie.setdefault("key", 1), Ok(&1));
    /// assert_eq!(trie.setdefault("key", 2), Ok(&1));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::EmptyKey`] if the key has no units.
    pub fn setdefault(&mut self, key: impl IntoKey<C>, value: V) -> Result<&V, TrieError> {
        let id = self.entry_node(key)?;
        if !self.arena[id].is_terminal() {
            self.len += 1;
            self.compiled = false;
        }
        Ok(&*self.arena[id].value_slot().get_or_insert(value))
    }

    /// Returns the value stored under the key.
    pub fn get(&self, key: impl IntoKey<C>) -> Option<&V> {
        let key = key.collect_key();
        self.find_node(&key).and_then(|id| self.arena[id].value())
    }

    /// Returns a mutable reference to the value stored under the key.
    pub fn get_mut(&mut self, key: impl IntoKey<C>) -> Option<&mut V> {
        let key = key.collect_key();
        let id = self.find_node(&key)?;
        self.arena[id].value_slot().as_mut()
    }

    /// Returns the value stored under the key, or `default` if there is none.
    pub fn get_or<'a>(&'a self, key: impl IntoKey<C>, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns the value stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyNotFound`] if the key is not stored.
    pub fn try_get(&self, key: impl IntoKey<C>) -> Result<&V, TrieError> {
        self.get(key).ok_or(TrieError::KeyNotFound)
    }

    /// True if the key is stored. Prefixes of stored keys are not.
    pub fn contains_key(&self, key: impl IntoKey<C>) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key, returning its value.
    ///
    /// Nodes that no longer lead to any key are pruned and their slots reused
    /// by later inserts.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyNotFound`] if the key is not stored.
    pub fn remove(&mut self, key: impl IntoKey<C>) -> Result<V, TrieError> {
        let key = key.collect_key();

        // path[i] follows key[0..i].
        let mut path: SmallVec<[NodeId; KEY_INLINE]> = SmallVec::with_capacity(key.len() + 1);
        let mut current = NodeId::ROOT;
        path.push(current);
        for unit in key.iter() {
            current = self.arena[current].get(unit).ok_or(TrieError::KeyNotFound)?;
            path.push(current);
        }

        let value = self.arena[current]
            .value_slot()
            .take()
            .ok_or(TrieError::KeyNotFound)?;
        self.len -= 1;
        self.compiled = false;
        self.prune(&key, &path);
        Ok(value)
    }

    /// Returns an iterator over all `(key, value)` pairs, keys in ascending
    /// unit order.
    pub fn items(&self) -> Iter<'_, C, V> {
        Iter {
            trie: self,
            stack: vec![Frame {
                node: NodeId::ROOT,
                next_child: 0,
            }],
            prefix: Vec::new(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over all keys, in ascending unit order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = Vec<C>> + '_ {
        self.items().map(|(key, _)| key)
    }

    /// Returns an iterator over all values, in the order of their keys.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.items().map(|(_, value)| value)
    }

    /// Follows the key from the root. The node found may be non-terminal.
    pub(crate) fn find_node(&self, key: &[C]) -> Option<NodeId> {
        key.iter()
            .try_fold(NodeId::ROOT, |id, unit| self.arena[id].get(unit))
    }

    /// Walks the key from the root, creating missing nodes, and returns the
    /// node the key ends at.
    fn entry_node(&mut self, key: impl IntoKey<C>) -> Result<NodeId, TrieError> {
        let key = key.collect_key();
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }
        let mut current = NodeId::ROOT;
        for unit in key {
            current = match self.arena[current].get(&unit) {
                Some(child) => child,
                None => self.add_child(current, unit),
            };
        }
        Ok(current)
    }

    fn add_child(&mut self, parent: NodeId, unit: C) -> NodeId {
        let depth = self.arena[parent].depth() + 1;
        let child = self.arena.alloc(Node::new(depth));
        self.arena[parent].add_child(unit, child);
        self.compiled = false;
        child
    }

    /// Releases the dead tail of `path`: nodes that hold no value and have no
    /// children, walking up until a live node or the root.
    fn prune(&mut self, key: &[C], path: &[NodeId]) {
        let mut pruned = 0usize;
        for level in (1..path.len()).rev() {
            let node = &self.arena[path[level]];
            if node.is_terminal() || node.child_count() > 0 {
                break;
            }
            self.arena[path[level - 1]].remove_child(&key[level - 1]);
            self.arena.release(path[level], Node::new(0));
            pruned += 1;
        }
        if pruned > 0 {
            tracing::trace!(pruned, free = self.arena.free_len(), "pruned dead branch");
        }
    }
}

impl<C: TrieUnit, V> Default for AcTrie<C, V> {
    fn default() -> Self {
        AcTrie::new()
    }
}

impl<C: TrieUnit, V, K: IntoKey<C>> Extend<(K, V)> for AcTrie<C, V> {
    /// Inserts every pair. Pairs with an empty key are skipped.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            if let Err(err) = self.insert(key, value) {
                tracing::warn!(%err, "skipping pair");
            }
        }
    }
}

impl<C: TrieUnit, V> std::fmt::Debug for AcTrie<C, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcTrie")
            .field("len", &self.len)
            .field("node_count", &self.node_count())
            .field("compiled", &self.compiled)
            .finish()
    }
}

struct Frame {
    node: NodeId,
    next_child: usize,
}

/// A depth-first iterator over the `(key, value)` pairs of an [`AcTrie`].
///
/// Created by [`AcTrie::items`]. Each call to `items` starts a fresh traversal.
pub struct Iter<'t, C: TrieUnit, V> {
    trie: &'t AcTrie<C, V>,
    stack: Vec<Frame>,
    prefix: Vec<C>,
    remaining: usize,
}

impl<'t, C: TrieUnit, V> Iterator for Iter<'t, C, V> {
    type Item = (Vec<C>, &'t V);

    fn next(&mut self) -> Option<Self::Item> {
        let trie = self.trie;
        loop {
            let frame = self.stack.last_mut()?;
            match trie.arena[frame.node].children().nth(frame.next_child) {
                Some((unit, child)) => {
                    frame.next_child += 1;
                    self.prefix.push(unit.clone());
                    self.stack.push(Frame {
                        node: child,
                        next_child: 0,
                    });
                    if let Some(value) = trie.arena[child].value() {
                        self.remaining -= 1;
                        return Some((self.prefix.clone(), value));
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: TrieUnit, V> ExactSizeIterator for Iter<'_, C, V> {}
