pub mod amino;
pub mod codon;
pub mod nucleotide;

pub use amino::{amino_acids_to_string, AminoAcid};
pub use codon::{Codon, PartialCodon};
pub use nucleotide::{nucleotides_to_string, Nucleotide};

use std::sync::LazyLock;

use crate::alphabets::{dna, protein, Alphabet};
use crate::error::{AlignError, AlignResult};

static IUPAC: LazyLock<Alphabet> = LazyLock::new(dna::iupac_alphabet);
static REFERENCE: LazyLock<Alphabet> = LazyLock::new(protein::reference_alphabet);

fn check_symbols(text: &[u8], alphabet: &Alphabet) -> AlignResult<()> {
    match alphabet.first_invalid(text) {
        Some((pos, b)) => Err(AlignError::InvalidChar { ch: b as char, pos }),
        None => Ok(()),
    }
}

/// Parse a nucleotide sequence. ASCII whitespace is skipped so multi-line
/// literals can be used directly; positions in errors refer to `text`.
pub fn read_nucleotides(text: &[u8]) -> AlignResult<Vec<Nucleotide>> {
    check_symbols(text, &IUPAC)?;
    Ok(text.iter().filter_map(|&b| Nucleotide::from_byte(b)).collect())
}

/// Parse a reference amino-acid sequence, skipping ASCII whitespace.
pub fn read_amino_acids(text: &[u8]) -> AlignResult<Vec<AminoAcid>> {
    check_symbols(text, &REFERENCE)?;
    Ok(text.iter().filter_map(|&b| AminoAcid::from_byte(b)).collect())
}
