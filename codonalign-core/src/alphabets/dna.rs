use crate::alphabets::Alphabet;

/// IUPAC nucleotide codes; `U` is read as `T`.
pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ACGTURYSWKMBDHVNacgturyswkmbdhvn")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Nucleotide;

    #[test]
    fn accepts_iupac_codes() {
        assert_eq!(iupac_alphabet().first_invalid(b"GATNRYACU"), None);
        assert_eq!(iupac_alphabet().first_invalid(b"gauuaca"), None);
    }

    #[test]
    fn rejects_symbols_and_digits() {
        assert_eq!(iupac_alphabet().first_invalid(b"AC#"), Some((2, b'#')));
        assert_eq!(iupac_alphabet().first_invalid(b"-"), Some((0, b'-')));
        assert_eq!(iupac_alphabet().first_invalid(b"42"), Some((0, b'4')));
    }

    #[test]
    fn every_symbol_is_a_nucleotide() {
        for b in iupac_alphabet().symbols() {
            assert!(Nucleotide::from_byte(b).is_some(), "{}", b as char);
        }
    }
}
