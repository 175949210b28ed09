use std::mem;

use super::node_arena::NodeId;
use super::unit_trait::TrieUnit;

/// A compact, sorted transition table that doesn't allocate until there are at
/// least three outgoing edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Transitions<C> {
    /// No transitions.
    None,
    /// Exactly one transition (unit, target).
    One((C, NodeId)),
    /// Exactly two transitions, first unit less than the second.
    Two((C, NodeId, C, NodeId)),
    /// Three or more transitions, sorted by unit.
    Many(Vec<(C, NodeId)>),
}

impl<C: TrieUnit> Transitions<C> {
    /// Gets the transition at the specified index, in unit order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(&C, NodeId)> {
        match self {
            Transitions::None => None,
            Transitions::One((c, n)) => (index == 0).then_some((c, *n)),
            Transitions::Two((c1, n1, c2, n2)) => match index {
                0 => Some((c1, *n1)),
                1 => Some((c2, *n2)),
                _ => None,
            },
            Transitions::Many(edges) => edges.get(index).map(|(c, n)| (c, *n)),
        }
    }

    /// Returns the target of the transition labeled `unit`.
    #[inline]
    pub fn get(&self, unit: &C) -> Option<NodeId> {
        match self {
            Transitions::None => None,
            Transitions::One((c, n)) => (c == unit).then_some(*n),
            Transitions::Two((c1, n1, c2, n2)) => {
                if unit == c1 {
                    Some(*n1)
                } else if unit == c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Transitions::Many(edges) => edges
                .binary_search_by(|(c, _)| c.cmp(unit))
                .ok()
                .map(|i| edges[i].1),
        }
    }

    /// Returns the number of transitions.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Transitions::None => 0,
            Transitions::One(_) => 1,
            Transitions::Two(_) => 2,
            Transitions::Many(edges) => edges.len(),
        }
    }

    /// Adds a transition in sorted position.
    pub fn insert(&mut self, unit: C, target: NodeId) {
        debug_assert!(self.get(&unit).is_none(), "insert: unit already exists");
        *self = match mem::replace(self, Transitions::None) {
            Transitions::None => Transitions::One((unit, target)),
            Transitions::One((c1, n1)) => {
                if unit < c1 {
                    Transitions::Two((unit, target, c1, n1))
                } else {
                    Transitions::Two((c1, n1, unit, target))
                }
            }
            Transitions::Two((c1, n1, c2, n2)) => {
                let mut edges = vec![(c1, n1), (c2, n2)];
                let pos = edges.partition_point(|(c, _)| *c < unit);
                edges.insert(pos, (unit, target));
                Transitions::Many(edges)
            }
            Transitions::Many(mut edges) => {
                let pos = edges.partition_point(|(c, _)| *c < unit);
                edges.insert(pos, (unit, target));
                Transitions::Many(edges)
            }
        };
    }

    /// Removes the transition labeled `unit`, returning its target.
    pub fn remove(&mut self, unit: &C) -> Option<NodeId> {
        let removed;
        *self = match mem::replace(self, Transitions::None) {
            Transitions::None => {
                removed = None;
                Transitions::None
            }
            Transitions::One((c, n)) => {
                if &c == unit {
                    removed = Some(n);
                    Transitions::None
                } else {
                    removed = None;
                    Transitions::One((c, n))
                }
            }
            Transitions::Two((c1, n1, c2, n2)) => {
                if &c1 == unit {
                    removed = Some(n1);
                    Transitions::One((c2, n2))
                } else if &c2 == unit {
                    removed = Some(n2);
                    Transitions::One((c1, n1))
                } else {
                    removed = None;
                    Transitions::Two((c1, n1, c2, n2))
                }
            }
            Transitions::Many(mut edges) => {
                removed = edges
                    .binary_search_by(|(c, _)| c.cmp(unit))
                    .ok()
                    .map(|i| edges.remove(i).1);
                match <[(C, NodeId); 2]>::try_from(edges) {
                    Ok([(c1, n1), (c2, n2)]) => Transitions::Two((c1, n1, c2, n2)),
                    Err(edges) => Transitions::Many(edges),
                }
            }
        };
        removed
    }
}

/// An iterator over the outgoing transitions of a [`Node`], in unit order.
#[derive(Clone)]
pub struct ChildIter<'n, C: TrieUnit> {
    transitions: &'n Transitions<C>,
    index: usize,
}

impl<'n, C: TrieUnit> Iterator for ChildIter<'n, C> {
    type Item = (&'n C, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.transitions.get_index(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.index = self.index.saturating_add(n);
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.transitions.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: TrieUnit> ExactSizeIterator for ChildIter<'_, C> {}

/// A single automaton state.
///
/// A node is terminal, i.e. the end of a stored key, iff it holds a value.
/// Its failure and output links are read through [`AcTrie::fail`] and
/// [`AcTrie::output`], which refuse to answer while the trie is stale.
///
/// [`AcTrie::fail`]: super::AcTrie::fail
/// [`AcTrie::output`]: super::AcTrie::output
#[derive(Clone, Debug)]
pub struct Node<C, V> {
    transitions: Transitions<C>,
    value: Option<V>,
    depth: usize,
    fail: NodeId,
    output: Option<NodeId>,
}

impl<C: TrieUnit, V> Node<C, V> {
    /// Creates a non-terminal node at the given depth with no transitions.
    pub(crate) fn new(depth: usize) -> Self {
        Node {
            transitions: Transitions::None,
            value: None,
            depth,
            fail: NodeId::ROOT,
            output: None,
        }
    }

    /// Returns the node that `unit`'s transition leads to, or None if no such
    /// transition exists.
    #[inline]
    pub fn get(&self, unit: &C) -> Option<NodeId> {
        self.transitions.get(unit)
    }

    /// True if this node is the end of a stored key.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// The value of the key ending here, if any.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Length of the path from the root to this node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Raw failure link, valid only while the owning trie is compiled.
    #[inline]
    pub(crate) fn fail(&self) -> NodeId {
        self.fail
    }

    /// Raw output link, valid only while the owning trie is compiled.
    #[inline]
    pub(crate) fn output(&self) -> Option<NodeId> {
        self.output
    }

    /// Returns an iterator over all outgoing transitions of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        ChildIter {
            transitions: &self.transitions,
            index: 0,
        }
    }

    /// Returns the number of outgoing transitions.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.transitions.len()
    }

    pub(crate) fn value_slot(&mut self) -> &mut Option<V> {
        &mut self.value
    }

    pub(crate) fn add_child(&mut self, unit: C, child: NodeId) {
        self.transitions.insert(unit, child);
    }

    pub(crate) fn remove_child(&mut self, unit: &C) -> Option<NodeId> {
        self.transitions.remove(unit)
    }

    pub(crate) fn set_links(&mut self, fail: NodeId, output: Option<NodeId>) {
        self.fail = fail;
        self.output = output;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::node_arena::NodeArena;

    fn ids(count: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        (0..count).map(|i| arena.alloc(i)).collect()
    }

    #[test]
    fn no_children() {
        let n = Node::<char, ()>::new(0);
        assert_eq!(n.children().next(), None);
        assert_eq!(n.child_count(), 0);
        assert!(!n.is_terminal());
    }

    #[test]
    fn children_stay_sorted() {
        let id = ids(5);
        let mut n = Node::<char, ()>::new(0);
        n.add_child('d', id[1]);
        n.add_child('b', id[2]);
        assert_eq!(n.transitions, Transitions::Two(('b', id[2], 'd', id[1])));
        n.add_child('a', id[3]);
        n.add_child('c', id[4]);
        let units: Vec<char> = n.children().map(|(c, _)| *c).collect();
        assert_eq!(units, ['a', 'b', 'c', 'd']);
        assert_eq!(n.children().len(), 4);
        assert_eq!(n.get(&'c'), Some(id[4]));
        assert_eq!(n.get(&'e'), None);
    }

    #[test]
    fn remove_shrinks_representation() {
        let id = ids(4);
        let mut n = Node::<char, ()>::new(0);
        n.add_child('a', id[1]);
        n.add_child('b', id[2]);
        n.add_child('c', id[3]);
        assert_eq!(n.remove_child(&'b'), Some(id[2]));
        assert_eq!(n.transitions, Transitions::Two(('a', id[1], 'c', id[3])));
        assert_eq!(n.remove_child(&'x'), None);
        assert_eq!(n.remove_child(&'a'), Some(id[1]));
        assert_eq!(n.transitions, Transitions::One(('c', id[3])));
        assert_eq!(n.remove_child(&'c'), Some(id[3]));
        assert_eq!(n.transitions, Transitions::None);
    }

    #[test]
    fn a_thousand_children() {
        let mut arena = NodeArena::new();
        let mut n = Node::<char, ()>::new(0);
        let letters: Vec<char> = (0..).filter_map(std::char::from_u32).take(1000).collect();
        for &ch in letters.iter().rev() {
            n.add_child(ch, arena.alloc(()));
        }
        assert_eq!(n.child_count(), 1000);
        for (expected, (ch, _)) in letters.iter().zip(n.children()) {
            assert_eq!(expected, ch);
        }
        assert!(letters.iter().all(|ch| n.get(ch).is_some()));
    }

    #[test]
    fn token_units() {
        let id = ids(3);
        let mut n = Node::<String, u8>::new(1);
        n.add_child("york".to_string(), id[1]);
        n.add_child("jersey".to_string(), id[2]);
        assert_eq!(n.get(&"york".to_string()), Some(id[1]));
        assert_eq!(n.depth(), 1);
        *n.value_slot() = Some(7);
        assert_eq!(n.value(), Some(&7));
    }
}
