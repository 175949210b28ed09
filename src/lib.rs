//! # libactrie
//!
//! A keyword map that is also an [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! automaton: it maps keys to values like an ordinary map, and finds every
//! occurrence of every key in a text in a single pass.
//!
//! Keys are stored in a trie whose nodes live in an index arena. Compiling
//! the trie adds failure links (where to resume after a mismatch) and output
//! links (which shorter keys end at the same position), after which a scan
//! reports all matches, overlapping and nested ones included, in time linear
//! in the input.
//!
//! ## Features
//!
//! - **Generic over unit type**: keys and input can be `char`s, bytes, word
//!   tokens, or any type implementing [`TrieUnit`](trie::TrieUnit)
//! - **Streaming**: the scan pulls input lazily and keeps only as many units
//!   as the longest key
//! - **Self-maintaining**: inserting or removing keys marks the automaton
//!   stale; the next scan recompiles it
//! - **Compact**: dead branches are pruned on removal and their slots reused
//!
//! ## Quick Start
//!
//! ```
//! use libactrie::trie::AcTrie;
//!
//! let mut trie = AcTrie::new();
//! for key in ["he", "she", "his", "hers"] {
//!     trie.insert(key, key.len()).unwrap();
//! }
//!
//! let found: Vec<String> = trie.find_iter("ushers".chars()).map(|m| m.to_text()).collect();
//! assert_eq!(found, ["she", "he", "hers"]);
//!
//! let replaced = trie.replace_all_str("ushers", |_, len| "*".repeat(*len));
//! assert_eq!(replaced, "u***rs");
//! ```
//!
//! ## Token Keys
//!
//! Units need not be characters. Positions are then token indices:
//!
//! ```
//! use libactrie::trie::AcTrie;
//!
//! let mut places = AcTrie::new();
//! places.insert(["new", "york"], "NY").unwrap();
//! places.insert(["york"], "UK").unwrap();
//!
//! let spans: Vec<_> = places
//!     .find_iter("from new york".split(' '))
//!     .map(|m| m.span())
//!     .collect();
//! assert_eq!(spans, [(1, 3), (2, 3)]);
//! assert_eq!(places.get(["york"]), Some(&"UK"));
//! ```
//!
//! ## Shared Scans
//!
//! [`find_iter`](trie::AcTrie::find_iter) takes `&mut self` so it can
//! recompile. To scan from several places at once, compile first and use
//! [`try_find_iter`](trie::AcTrie::try_find_iter) on a shared borrow:
//!
//! ```
//! use libactrie::trie::AcTrie;
//!
//! let mut trie = AcTrie::new();
//! trie.insert("ab", ()).unwrap();
//! trie.compile();
//!
//! let trie = &trie;
//! let a = trie.try_find_iter("abab".chars()).unwrap().count();
//! let b = trie.try_find_iter("ba".chars()).unwrap().count();
//! assert_eq!((a, b), (2, 0));
//! ```

#![warn(missing_docs)]

/// Keyword trie, Aho-Corasick compilation, scanning and match types.
pub mod trie;
