//! Conversion of user-facing key types into unit buffers.
//!
//! String types yield `char` units. Sequence types (slices, arrays, `Vec`,
//! boxed slices) yield their elements, so token keys such as
//! `["new", "york"]` work unchanged.

use std::borrow::Cow;

use smallvec::SmallVec;

use super::unit_trait::TrieUnit;

/// Inline capacity of a key buffer before it spills to the heap.
pub(crate) const KEY_INLINE: usize = 32;

/// A key collected into a unit buffer.
pub type KeyBuf<C> = SmallVec<[C; KEY_INLINE]>;

/// A value that can be read as a key of `C` units.
///
/// Every lookup and mutation on [`AcTrie`](super::AcTrie) and
/// [`LinearMap`](super::LinearMap) takes `impl IntoKey<C>`, so keys are passed
/// as whatever the caller already holds.
pub trait IntoKey<C: TrieUnit> {
    /// Collects this key into a unit buffer.
    fn collect_key(self) -> KeyBuf<C>;
}

/// Implements [`IntoKey`] for each listed type: `impl[generics] Unit => Type`
/// followed by the conversion of the bound `key`.
macro_rules! into_key {
    ($(impl[$($generics:tt)*] $unit:ty => $key_ty:ty: |$key:ident| $collect:expr;)*) => {
        $(
            impl<$($generics)*> IntoKey<$unit> for $key_ty {
                #[inline]
                fn collect_key(self) -> KeyBuf<$unit> {
                    let $key = self;
                    $collect
                }
            }
        )*
    };
}

into_key! {
    impl[] char => &str: |key| key.chars().collect();
    impl[] char => &&str: |key| key.chars().collect();
    impl[] char => String: |key| key.chars().collect();
    impl[] char => &String: |key| key.chars().collect();
    impl[] char => Box<str>: |key| key.chars().collect();
    impl['a] char => Cow<'a, str>: |key| key.chars().collect();

    impl[C: TrieUnit] C => &[C]: |key| key.iter().cloned().collect();
    impl[C: TrieUnit] C => &Vec<C>: |key| key.iter().cloned().collect();
    impl[C: TrieUnit, const N: usize] C => &[C; N]: |key| key.iter().cloned().collect();
    impl[C: TrieUnit] C => Vec<C>: |key| key.into_iter().collect();
    impl[C: TrieUnit] C => Box<[C]>: |key| key.into_vec().into_iter().collect();
    impl[C: TrieUnit, const N: usize] C => [C; N]: |key| key.into_iter().collect();
    impl[C: TrieUnit] C => KeyBuf<C>: |key| key;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn str_keys_collect_chars() {
        let key: KeyBuf<char> = "héllo".collect_key();
        assert_eq!(key.as_slice(), &['h', 'é', 'l', 'l', 'o']);
        let owned: KeyBuf<char> = String::from("ab").collect_key();
        assert_eq!(owned.as_slice(), &['a', 'b']);
    }

    #[test]
    fn token_keys_collect_units() {
        let key: KeyBuf<&str> = ["new", "york"].collect_key();
        assert_eq!(key.as_slice(), &["new", "york"]);
        let tokens = vec![String::from("a"), String::from("b")];
        let key: KeyBuf<String> = (&tokens).collect_key();
        assert_eq!(key.len(), 2);
    }

    #[test]
    fn owned_and_borrowed_forms_agree() {
        let expected: KeyBuf<char> = "abc".collect_key();
        assert_eq!(Box::<str>::from("abc").collect_key(), expected);
        assert_eq!(Cow::Borrowed("abc").collect_key(), expected);
        assert_eq!(Cow::<str>::Owned("abc".to_string()).collect_key(), expected);
        assert_eq!(['a', 'b', 'c'].collect_key(), expected);
        assert_eq!((&['a', 'b', 'c']).collect_key(), expected);
        assert_eq!(vec!['a', 'b', 'c'].into_boxed_slice().collect_key(), expected);
        assert_eq!(expected.clone().collect_key(), expected);
    }

    #[test]
    fn long_keys_spill_to_heap() {
        let long: String = std::iter::repeat('x').take(KEY_INLINE + 1).collect();
        let key: KeyBuf<char> = long.as_str().collect_key();
        assert!(key.spilled());
        assert_eq!(key.len(), KEY_INLINE + 1);
    }
}
