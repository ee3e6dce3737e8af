pub mod dna;
pub mod protein;

use bit_set::BitSet;
use std::borrow::Borrow;

/// A set of accepted byte symbols.
#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    /// Position and value of the first symbol outside the alphabet.
    /// ASCII whitespace is not a symbol and is passed over.
    pub fn first_invalid(&self, text: &[u8]) -> Option<(usize, u8)> {
        text.iter()
            .enumerate()
            .find(|(_, &b)| !b.is_ascii_whitespace() && !self.contains(b))
            .map(|(pos, &b)| (pos, b))
    }

    pub fn union(&self, others: &Alphabet) -> Self {
        Alphabet {
            symbols: self.symbols.union(&others.symbols).collect(),
        }
    }

    /// Accepted symbols in ascending byte order.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.symbols.iter().map(|s| s as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_eq() {
        assert_eq!(Alphabet::new(b"ATCG"), Alphabet::new(b"ATCG"));
        assert_eq!(Alphabet::new(b"ATCG"), Alphabet::new(b"TAGC"));
        assert_ne!(Alphabet::new(b"ATCG"), Alphabet::new(b"ATC"));
    }

    #[test]
    fn test_first_invalid() {
        let alphabet = Alphabet::new(b"ACGT");
        assert_eq!(alphabet.first_invalid(b"ACGT"), None);
        assert_eq!(alphabet.first_invalid(b"AC\n GT"), None);
        assert_eq!(alphabet.first_invalid(b"ACXT"), Some((2, b'X')));
        assert_eq!(alphabet.first_invalid(b"A C-T"), Some((3, b'-')));
    }

    #[test]
    fn test_union() {
        let merged = Alphabet::new(b"AC").union(&Alphabet::new(b"GT"));
        assert_eq!(merged, Alphabet::new(b"ACGT"));
        assert_eq!(merged.symbols().collect::<Vec<_>>(), b"ACGT");
    }
}
