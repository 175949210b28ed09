//! Example: building a Glossary wrapper around AcTrie.
//!
//! This shows how to put a small domain API on top of the keyword trie. The
//! `Glossary` struct maps terms to definitions, annotates every term found in
//! a text, walks the automaton to explain a match, and expands multi-word
//! abbreviations over word tokens.
//!
//! Run with: RUST_LOG=libactrie=debug cargo run --example keywords

use libactrie::trie::{AcTrie, Match, TrieError};
use tracing_subscriber::EnvFilter;

/// Terms and their definitions.
struct Glossary {
    terms: AcTrie<char, &'static str>,
}

impl Glossary {
    fn new(entries: &[(&'static str, &'static str)]) -> Result<Self, TrieError> {
        let terms = AcTrie::try_from_iter(entries.iter().copied())?;
        Ok(Glossary { terms })
    }

    /// Every term occurrence, overlapping ones included.
    fn occurrences(&mut self, text: &str) -> Vec<Match<char>> {
        self.terms.find_iter(text.chars()).collect()
    }

    /// Appends the definition after each term, leftmost-longest.
    fn annotate(&mut self, text: &str) -> String {
        self.terms
            .replace_all_str(text, |m, definition| format!("{} ({definition})", m.to_text()))
    }

    /// The chain of shorter terms reported along with `term`. Fails if the
    /// glossary changed since its last scan.
    fn nested_in(&self, term: &str) -> Result<Vec<String>, TrieError> {
        let Some(id) = self.terms.walk(term) else {
            return Ok(Vec::new());
        };
        let len = term.chars().count();
        let mut nested = Vec::new();
        let mut next = self.terms.output(id)?;
        while let Some(id) = next {
            let depth = self.terms.node(id).map_or(0, |node| node.depth());
            nested.push(term.chars().skip(len - depth).collect());
            next = self.terms.output(id)?;
        }
        Ok(nested)
    }
}

fn main() -> Result<(), TrieError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut glossary = Glossary::new(&[
        ("trie", "prefix tree"),
        ("automaton", "state machine"),
        ("aton", "not a word"),
        ("ton", "unit of weight"),
    ])?;

    // Overlapping occurrences
    println!("Occurrences:");
    for m in glossary.occurrences("a trie automaton") {
        println!("  {m}");
    }

    // Replacement picks one match per region
    println!("\nAnnotated:");
    println!("  {}", glossary.annotate("a trie automaton"));

    // Output links after compilation
    println!("\nNested in \"automaton\": {:?}", glossary.nested_in("automaton")?);

    // Removal recompiles on the next scan
    glossary.terms.remove("aton")?;
    println!("\nAfter removing \"aton\":");
    for m in glossary.occurrences("automaton") {
        println!("  {m}");
    }

    // Word tokens as units
    let mut abbreviations = AcTrie::new();
    abbreviations.insert(["as", "soon", "as", "possible"], "ASAP")?;
    abbreviations.insert(["for", "your", "information"], "FYI")?;
    let expanded = abbreviations.replace_all(
        "reply as soon as possible for your information".split(' '),
        |_, short| [*short],
    );
    println!("\nAbbreviated: {}", expanded.join(" "));

    Ok(())
}
