//! Failure and output link construction.
//!
//! Turns the plain prefix tree into an Aho-Corasick automaton with a
//! breadth-first pass: a node's failure target always has a smaller depth, so
//! it is final by the time the node is reached.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::ac_trie::AcTrie;
use super::error::TrieError;
use super::node::Node;
use super::node_arena::NodeId;
use super::unit_trait::TrieUnit;

impl<C: TrieUnit, V> AcTrie<C, V> {
    /// Computes the failure and output links of every node.
    ///
    /// Does nothing if the key set has not changed since the last compilation.
    /// [`find_iter`](AcTrie::find_iter) calls this on demand; call it directly
    /// before sharing the trie for [`try_find_iter`](AcTrie::try_find_iter).
    pub fn compile(&mut self) {
        if self.compiled {
            return;
        }

        let mut queue = VecDeque::with_capacity(self.arena.len());
        let mut max_depth = 0;

        self.arena[NodeId::ROOT].set_links(NodeId::ROOT, None);
        let first_level: SmallVec<[NodeId; 16]> =
            self.root().children().map(|(_, child)| child).collect();
        for child in first_level {
            self.arena[child].set_links(NodeId::ROOT, None);
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            max_depth = max_depth.max(self.arena[parent].depth());
            let parent_fail = self.arena[parent].fail();
            let edges: SmallVec<[(C, NodeId); 4]> = self.arena[parent]
                .children()
                .map(|(unit, child)| (unit.clone(), child))
                .collect();
            for (unit, child) in edges {
                let fail = self.next_state(parent_fail, &unit);
                let fail_node = &self.arena[fail];
                let output = if fail_node.is_terminal() {
                    Some(fail)
                } else {
                    fail_node.output()
                };
                self.arena[child].set_links(fail, output);
                queue.push_back(child);
            }
        }

        self.max_depth = max_depth;
        self.compiled = true;
        tracing::debug!(
            keys = self.len(),
            nodes = self.node_count(),
            max_depth,
            "compiled automaton"
        );
    }

    /// True if the failure and output links reflect the current key set.
    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    /// The state the scan falls back to from `id` when no transition matches:
    /// the node of the longest proper suffix of `id`'s path that is also a
    /// path in the trie.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::StaleAutomaton`] if keys were inserted or removed
    /// since the last [`compile`](AcTrie::compile), and
    /// [`TrieError::UnknownNode`] if `id` names no live node.
    pub fn fail(&self, id: NodeId) -> Result<NodeId, TrieError> {
        self.linked(id).map(Node::fail)
    }

    /// The nearest terminal node along `id`'s failure chain, excluding `id`
    /// itself: the longest stored key that is a proper suffix of `id`'s path.
    ///
    /// # Examples
    ///
    /// ```
    /// use libactrie::trie::{AcTrie, TrieError};
    ///
    /// let mut trie = AcTrie::new();
    /// trie.insert("she", ()).unwrap();
    /// trie.insert("he", ()).unwrap();
    /// let she = trie.walk("she").unwrap();
    /// assert_eq!(trie.output(she), Err(TrieError::StaleAutomaton));
    ///
    /// trie.compile();
    /// assert_eq!(trie.output(she), Ok(trie.walk("he")));
    /// ```
    ///
    /// # Errors
    ///
    /// As for [`fail`](AcTrie::fail).
    pub fn output(&self, id: NodeId) -> Result<Option<NodeId>, TrieError> {
        self.linked(id).map(Node::output)
    }

    fn linked(&self, id: NodeId) -> Result<&Node<C, V>, TrieError> {
        if !self.compiled {
            return Err(TrieError::StaleAutomaton);
        }
        self.node(id).ok_or(TrieError::UnknownNode(id))
    }

    /// The state reached from `state` on `unit`, following failure links until
    /// a state with a transition on `unit` is found, or the root.
    #[inline]
    pub(crate) fn next_state(&self, mut state: NodeId, unit: &C) -> NodeId {
        loop {
            if let Some(next) = self.arena[state].get(unit) {
                return next;
            }
            if state == NodeId::ROOT {
                return NodeId::ROOT;
            }
            state = self.arena[state].fail();
        }
    }
}
