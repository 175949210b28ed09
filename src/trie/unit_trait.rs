use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as the units of a key and of scanned input.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `&str` tokens, `String` tokens, etc.).
///
/// - `Clone`: units are copied into match texts and key buffers
/// - `Eq + Ord`: comparing and ordering transitions
/// - `Hash`: keying the map-backed variant
/// - `Debug`: debug printing of nodes and errors
pub trait TrieUnit: Clone + Eq + Ord + Hash + Debug {}

impl<T: Clone + Eq + Ord + Hash + Debug> TrieUnit for T {}
