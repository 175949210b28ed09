//! The compiled automaton must agree with the brute-force map on every
//! operation, for arbitrary key sets and inputs.

use libactrie::trie::{AcTrie, KeywordMap, LinearMap, Match};
use proptest::collection::vec;
use proptest::prelude::*;

/// A small alphabet so keys overlap and nest often.
fn text(max: usize) -> impl Strategy<Value = String> {
    vec(prop::sample::select(vec!['a', 'b', 'c']), 0..max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn keys() -> impl Strategy<Value = Vec<String>> {
    vec(text(5).prop_filter("keys are non-empty", |k| !k.is_empty()), 0..8)
}

fn build<M: KeywordMap<char, usize> + Default>(keys: &[String]) -> M {
    let mut map = M::default();
    for (i, key) in keys.iter().enumerate() {
        map.insert(key, i).unwrap();
    }
    map
}

fn scan<M: KeywordMap<char, usize>>(map: &mut M, input: &str) -> Vec<Match<char>> {
    map.find_iter(input.chars()).collect()
}

/// Every occurrence of every key, by direct comparison at each position.
fn naive(keys: &[String], input: &str) -> Vec<(usize, usize)> {
    let chars: Vec<char> = input.chars().collect();
    let mut keys: Vec<Vec<char>> = keys.iter().map(|k| k.chars().collect()).collect();
    keys.sort();
    keys.dedup();
    let mut spans = Vec::new();
    for end in 1..=chars.len() {
        let mut at_end: Vec<(usize, usize)> = keys
            .iter()
            .filter(|k| chars[..end].ends_with(k))
            .map(|k| (end - k.len(), end))
            .collect();
        at_end.sort();
        spans.extend(at_end);
    }
    spans
}

proptest! {
    #[test]
    fn scans_agree(keys in keys(), input in text(40)) {
        let mut trie: AcTrie<char, usize> = build(&keys);
        let mut linear: LinearMap<char, usize> = build(&keys);
        let from_trie = scan(&mut trie, &input);
        prop_assert_eq!(&from_trie, &scan(&mut linear, &input));
        let spans: Vec<_> = from_trie.iter().map(Match::span).collect();
        prop_assert_eq!(spans, naive(&keys, &input));
    }

    #[test]
    fn every_match_text_is_a_key_at_its_span(keys in keys(), input in text(40)) {
        let mut trie: AcTrie<char, usize> = build(&keys);
        let chars: Vec<char> = input.chars().collect();
        for m in scan(&mut trie, &input) {
            prop_assert_eq!(m.text(), &chars[m.start()..m.end()]);
            prop_assert!(trie.contains_key(m.text()));
        }
    }

    #[test]
    fn lookups_agree(keys in keys(), extra in vec(text(6), 0..10)) {
        let trie: AcTrie<char, usize> = build(&keys);
        let linear: LinearMap<char, usize> = build(&keys);
        prop_assert_eq!(trie.len(), linear.len());
        for key in keys.iter().chain(&extra) {
            prop_assert_eq!(trie.get(key), linear.get(key));
        }
        let mut from_trie: Vec<_> = KeywordMap::items(&trie).map(|(k, v)| (k, *v)).collect();
        let mut from_linear: Vec<_> = linear.items().map(|(k, v)| (k, *v)).collect();
        from_trie.sort();
        from_linear.sort();
        prop_assert_eq!(from_trie, from_linear);
    }

    #[test]
    fn removals_agree(keys in keys(), removed in vec(text(5), 0..6), input in text(30)) {
        let mut trie: AcTrie<char, usize> = build(&keys);
        let mut linear: LinearMap<char, usize> = build(&keys);
        // Compile before mutating so staleness is exercised.
        scan(&mut trie, &input);
        for key in &removed {
            prop_assert_eq!(trie.remove(key), linear.remove(key));
            prop_assert!(!trie.contains_key(key));
        }
        prop_assert_eq!(trie.len(), linear.len());
        prop_assert_eq!(scan(&mut trie, &input), scan(&mut linear, &input));
    }

    #[test]
    fn replacements_agree(keys in keys(), input in text(40)) {
        let mut trie: AcTrie<char, usize> = build(&keys);
        let mut linear: LinearMap<char, usize> = build(&keys);
        let replacer = |m: &Match<char>, v: &usize| format!("<{}{}>", v, m.len()).chars().collect::<Vec<_>>();
        let a = trie.replace_all(input.chars(), replacer);
        let b = KeywordMap::replace_all(&mut linear, input.chars(), replacer);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn len_counts_distinct_keys(keys in keys()) {
        let trie: AcTrie<char, usize> = build(&keys);
        let mut distinct = keys.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(trie.len(), distinct.len());
        prop_assert_eq!(trie.keys().len(), distinct.len());
    }
}
