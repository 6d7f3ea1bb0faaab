//! The alphabet the automata and indexes operate over.
//!
//! Everything in this crate works on sequences of [`Symbol`]s rather than
//! on `&str` directly: a pattern compiles into transitions labelled by
//! symbols, and trie keys are paths of symbols. The trait pins down how a
//! string decomposes into symbols and how a symbol path turns back into a
//! string; which decomposition you pick decides what "one edit" means.

/// One unit of the matching alphabet.
///
/// The core never inspects a symbol beyond the `Eq`/`Ord` bounds here:
/// two symbols are the same edge label exactly when they compare equal,
/// and child maps in the index order their edges by `Ord`. There is no
/// case folding and no Unicode normalisation — if callers want either,
/// they apply it before handing strings in.
///
/// Two instantiations ship with the crate:
///
/// - `u8` treats a string as its UTF-8 bytes. Cheapest, and exact for
///   ASCII, but an edit that touches a multi-byte code point costs one
///   edit per byte it spans.
/// - `char` treats a string as Unicode scalar values, so one edit is one
///   code point regardless of how it encodes. Edge labels grow to four
///   bytes and decoding costs a little on every walk.
pub trait Symbol:
    Copy + Clone + Eq + PartialEq + Ord + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static
{
    /// Decompose a string into its symbol sequence.
    fn from_str(s: &str) -> Vec<Self>;

    /// Reassemble a symbol sequence into a string.
    ///
    /// Total even on garbage input: a byte sequence that is not valid
    /// UTF-8 decodes with replacement characters rather than failing.
    fn to_text(units: &[Self]) -> String;

    /// Stream the symbols of a string without materialising a vector.
    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_>;
}

/// UTF-8 byte symbols, the default alphabet.
impl Symbol for u8 {
    #[inline]
    fn from_str(s: &str) -> Vec<Self> {
        s.as_bytes().to_vec()
    }

    #[inline]
    fn to_text(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }

    #[inline]
    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.bytes())
    }
}

/// Unicode scalar value symbols, for character-accurate edit counts.
impl Symbol for char {
    #[inline]
    fn from_str(s: &str) -> Vec<Self> {
        s.chars().collect()
    }

    #[inline]
    fn to_text(units: &[Self]) -> String {
        units.iter().collect()
    }

    #[inline]
    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<C: Symbol>(s: &str) -> String {
        C::to_text(&C::from_str(s))
    }

    #[test]
    fn test_round_trip_both_alphabets() {
        for s in ["", "plain", "zürich", "naïve café"] {
            assert_eq!(round_trip::<u8>(s), s);
            assert_eq!(round_trip::<char>(s), s);
        }
    }

    #[test]
    fn test_granularity_differs_on_multibyte_input() {
        // "zürich" is six code points but seven bytes, so the two
        // alphabets disagree about sequence length (and therefore about
        // edit counts) as soon as the input leaves ASCII.
        let s = "zürich";
        assert_eq!(<char as Symbol>::from_str(s).len(), 6);
        assert_eq!(<u8 as Symbol>::from_str(s).len(), 7);
    }

    #[test]
    fn test_iter_str_agrees_with_from_str() {
        let s = "wörter";
        assert_eq!(u8::iter_str(s).collect::<Vec<_>>(), u8::from_str(s));
        assert_eq!(
            <char as Symbol>::iter_str(s).collect::<Vec<_>>(),
            <char as Symbol>::from_str(s)
        );
    }

    #[test]
    fn test_invalid_bytes_decode_lossily() {
        let units = vec![b'a', 0xff, b'b'];
        assert_eq!(<u8 as Symbol>::to_text(&units), "a\u{fffd}b");
    }
}
