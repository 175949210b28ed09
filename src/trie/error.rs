use super::node_arena::NodeId;

/// Errors reported by trie mutation, lookup, scanning and match access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The key is absent, or its path exists only as a prefix of other keys.
    #[error("key not found")]
    KeyNotFound,

    /// A match was indexed with a group other than 0. Matches are whole keys
    /// and carry no sub-groups.
    #[error("no such group: {0}")]
    InvalidGroup(usize),

    /// Zero-length keys would match at every position and are rejected.
    #[error("key must contain at least one unit")]
    EmptyKey,

    /// A node id names no live node of this trie.
    #[error("no node at index {}", .0.index())]
    UnknownNode(NodeId),

    /// A shared-borrow scan was attempted after the key set changed.
    /// Call [`AcTrie::compile`](super::AcTrie::compile) first, or scan through
    /// [`AcTrie::find_iter`](super::AcTrie::find_iter), which compiles on demand.
    #[error("automaton is stale, compile it after changing the key set")]
    StaleAutomaton,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(TrieError::KeyNotFound.to_string(), "key not found");
        assert_eq!(TrieError::InvalidGroup(2).to_string(), "no such group: 2");
        assert_eq!(
            TrieError::EmptyKey.to_string(),
            "key must contain at least one unit"
        );
        assert_eq!(
            TrieError::UnknownNode(NodeId::ROOT).to_string(),
            "no node at index 0"
        );
    }
}
