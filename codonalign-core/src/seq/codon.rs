use std::fmt;
use std::sync::LazyLock;

use crate::error::{AlignError, AlignResult};
use crate::seq::amino::AminoAcid;
use crate::seq::nucleotide::Nucleotide;

const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

static TRANSLATION: LazyLock<[AminoAcid; 64]> = LazyLock::new(|| {
    let mut table = [AminoAcid::Unknown; 64];
    for (slot, &b) in table.iter_mut().zip(CODON_TABLE.iter()) {
        *slot = AminoAcid::from_byte(b).unwrap_or(AminoAcid::Unknown);
    }
    table
});

/// Three nucleotides, possibly ambiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Codon(pub [Nucleotide; 3]);

/// A codon completed from one or two aligned nucleotides; `filled` marks
/// the slots that were padded with `N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartialCodon {
    pub codon: Codon,
    pub filled: [bool; 3],
}

impl Codon {
    pub fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Codon([first, second, third])
    }

    pub fn from_slice(nas: &[Nucleotide]) -> AlignResult<Self> {
        match *nas {
            [a, b, c] => Ok(Codon([a, b, c])),
            _ => Err(AlignError::InvalidCodon { len: nas.len() }),
        }
    }

    #[inline]
    pub fn nucleotides(&self) -> [Nucleotide; 3] {
        self.0
    }

    pub fn is_unambiguous(&self) -> bool {
        self.0.iter().all(|na| na.is_unambiguous())
    }

    /// Every unambiguous codon this codon can stand for.
    pub fn unambiguous_codons(&self) -> Vec<Codon> {
        let [a, b, c] = self.0;
        let mut out = Vec::with_capacity(a.resolve().len() * b.resolve().len() * c.resolve().len());
        for &x in a.resolve() {
            for &y in b.resolve() {
                for &z in c.resolve() {
                    out.push(Codon([x, y, z]));
                }
            }
        }
        out
    }

    /// Translation of an unambiguous codon.
    pub fn translate(&self) -> Option<AminoAcid> {
        if !self.is_unambiguous() {
            return None;
        }
        let [a, b, c] = self.0;
        let idx = (a.code() << 4) | (b.code() << 2) | c.code();
        Some(TRANSLATION[idx])
    }

    pub fn is_stop(&self) -> bool {
        self.translate() == Some(AminoAcid::Stop)
    }

    /// Distinct translations over all resolutions, in residue order.
    pub fn amino_acids(&self) -> Vec<AminoAcid> {
        let mut aas: Vec<AminoAcid> = self
            .unambiguous_codons()
            .iter()
            .filter_map(Codon::translate)
            .collect();
        aas.sort_unstable();
        aas.dedup();
        aas
    }

    pub fn amino_acids_text(&self) -> String {
        self.amino_acids()
            .iter()
            .map(|aa| aa.as_byte() as char)
            .collect()
    }

    /// True when every resolution is a non-stop codon coding `reference`.
    pub fn always_codes(&self, reference: AminoAcid) -> bool {
        self.unambiguous_codons()
            .iter()
            .all(|c| !c.is_stop() && c.translate() == Some(reference))
    }

    /// Places one or two aligned nucleotides into the codon slots that best
    /// explain `reference`, padding the rest with `N`. Placements keep the
    /// nucleotide order; the earliest placement wins ties.
    pub fn find_best_match(nas: &[Nucleotide], reference: AminoAcid) -> PartialCodon {
        debug_assert!(matches!(nas.len(), 1 | 2), "partial codon needs 1 or 2 nucleotides");
        let placements: &[&[usize]] = match nas.len() {
            1 => &[&[0], &[1], &[2]],
            _ => &[&[0, 1], &[0, 2], &[1, 2]],
        };

        let place = |slots: &[usize]| {
            let mut codon = [Nucleotide::N; 3];
            let mut filled = [true; 3];
            for (&slot, &na) in slots.iter().zip(nas) {
                codon[slot] = na;
                filled[slot] = false;
            }
            PartialCodon {
                codon: Codon(codon),
                filled,
            }
        };
        let hits = |partial: &PartialCodon| {
            partial
                .codon
                .unambiguous_codons()
                .iter()
                .filter(|c| c.translate() == Some(reference))
                .count()
        };

        let mut best = place(placements[0]);
        let mut best_hits = hits(&best);
        for slots in &placements[1..] {
            let candidate = place(slots);
            let candidate_hits = hits(&candidate);
            if candidate_hits > best_hits {
                best = candidate;
                best_hits = candidate_hits;
            }
        }
        best
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for na in self.0 {
            write!(f, "{na}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::read_nucleotides;

    fn codon(text: &[u8]) -> Codon {
        Codon::from_slice(&read_nucleotides(text).unwrap()).unwrap()
    }

    #[test]
    fn translate_basic() {
        assert_eq!(codon(b"ATG").translate(), Some(AminoAcid::M));
        assert_eq!(codon(b"TGG").translate(), Some(AminoAcid::W));
        assert_eq!(codon(b"GGG").translate(), Some(AminoAcid::G));
        assert!(codon(b"TAA").is_stop());
        assert_eq!(codon(b"ATN").translate(), None);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let nas = read_nucleotides(b"AT").unwrap();
        assert!(matches!(
            Codon::from_slice(&nas),
            Err(AlignError::InvalidCodon { len: 2 })
        ));
    }

    #[test]
    fn ambiguous_translations() {
        assert_eq!(codon(b"ATN").unambiguous_codons().len(), 4);
        assert_eq!(codon(b"ATN").amino_acids_text(), "IM");
        assert_eq!(codon(b"GGN").amino_acids_text(), "G");
        assert!(codon(b"GGN").always_codes(AminoAcid::G));
        assert!(!codon(b"ATN").always_codes(AminoAcid::M));
        // TAR resolves to TAA and TAG, both stops
        assert!(!codon(b"TAR").always_codes(AminoAcid::Stop));
    }

    #[test]
    fn best_match_for_two_nucleotides() {
        let nas = read_nucleotides(b"AT").unwrap();
        let partial = Codon::find_best_match(&nas, AminoAcid::M);
        assert_eq!(partial.codon.to_string(), "ATN");
        assert_eq!(partial.filled, [false, false, true]);
    }

    #[test]
    fn best_match_for_single_nucleotide() {
        let nas = read_nucleotides(b"G").unwrap();
        // K is AAA or AAG, so G only fits the third slot
        let partial = Codon::find_best_match(&nas, AminoAcid::K);
        assert_eq!(partial.codon.to_string(), "NNG");
        assert_eq!(partial.filled, [true, true, false]);
    }
}
