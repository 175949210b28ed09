/// The keyword trie: storage, mutation, lookup and iteration.
pub mod ac_trie;
/// Failure and output link compilation.
mod automaton;
/// Error type shared by all containers and matches.
pub mod error;
/// Conversion of strings and sequences into keys.
pub mod key;
/// Capability trait implemented by every keyword container.
pub mod keyword_map;
/// Hash-map-backed container for small key sets.
pub mod linear;
/// Match result value.
pub mod matches;
/// Automaton state and transition table.
pub mod node;
/// Index arena owning the nodes.
pub mod node_arena;
/// Non-overlapping replacement of matches.
mod replace;
/// The streaming scan.
pub mod scanner;
/// Trait for types that can serve as key and input units.
pub mod unit_trait;

pub use ac_trie::{AcTrie, Iter};
pub use error::TrieError;
pub use key::{IntoKey, KeyBuf};
pub use keyword_map::KeywordMap;
pub use linear::LinearMap;
pub use matches::Match;
pub use node::{ChildIter, Node};
pub use node_arena::NodeId;
pub use scanner::FindIter;
pub use unit_trait::TrieUnit;
