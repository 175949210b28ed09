use std::fmt;

use super::error::TrieError;

/// One occurrence of a stored key in scanned input.
///
/// Positions are unit indices into the input: `start` is the index of the
/// first matched unit and `end` the index after the last one. The matched
/// units are copied into the match, so it does not borrow the input, which
/// may have been a one-shot stream.
///
/// Matches order by `(start, end, text)`.
///
/// # Examples
///
/// ```
/// use libactrie::trie::AcTrie;
///
/// let mut trie = AcTrie::new();
/// trie.insert("she", ()).unwrap();
/// let m = trie.find_iter("ushers".chars()).next().unwrap();
/// assert_eq!(m.span(), (1, 4));
/// assert_eq!(m.to_text(), "she");
/// assert!(m.group(1).is_err());
/// ```
///
/// Matches come only from scans; they cannot be built by hand:
///
/// ```compile_fail
/// use libactrie::trie::Match;
///
/// let m = Match::new(1, vec!['a', 'b']);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match<C> {
    start: usize,
    end: usize,
    text: Vec<C>,
}

impl<C> Match<C> {
    /// Creates a match ending at `end` that covers `text`. Scans never
    /// produce a `text` longer than the units consumed.
    pub(crate) fn new(end: usize, text: Vec<C>) -> Self {
        debug_assert!(text.len() <= end, "match text runs past the input start");
        Match {
            start: end - text.len(),
            end,
            text,
        }
    }

    /// Index of the first matched unit.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index after the last matched unit.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// `(start, end)`.
    #[inline]
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Number of matched units.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for matches produced by a scan, since empty keys are rejected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched units.
    #[inline]
    pub fn text(&self) -> &[C] {
        &self.text
    }

    /// Consumes the match, returning the matched units.
    pub fn into_text(self) -> Vec<C> {
        self.text
    }

    /// The matched units of group `index`. Only group 0, the whole match, exists.
    pub fn group(&self, index: usize) -> Result<&[C], TrieError> {
        match index {
            0 => Ok(&self.text),
            _ => Err(TrieError::InvalidGroup(index)),
        }
    }

    /// The span of group `index`. Only group 0, the whole match, exists.
    pub fn group_span(&self, index: usize) -> Result<(usize, usize), TrieError> {
        match index {
            0 => Ok(self.span()),
            _ => Err(TrieError::InvalidGroup(index)),
        }
    }

    /// True if the two matches share at least one input position.
    pub fn overlaps(&self, other: &Match<C>) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Match<char> {
    /// The matched characters as a string.
    pub fn to_text(&self) -> String {
        self.text.iter().collect()
    }
}

impl fmt::Display for Match<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Match span=({}, {}), match={:?}>",
            self.start,
            self.end,
            self.to_text()
        )
    }
}
