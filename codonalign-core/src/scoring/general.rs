use crate::error::AlignResult;
use crate::scoring::profile::AlignmentProfile;
use crate::scoring::{blosum62, GapKind, ScoringPolicy};
use crate::seq::amino::{AminoAcid, AMINO_ACID_COUNT};
use crate::seq::codon::Codon;
use crate::seq::nucleotide::{Nucleotide, NUCLEOTIDE_COUNT};

const WINDOW_COUNT: usize = NUCLEOTIDE_COUNT * NUCLEOTIDE_COUNT * NUCLEOTIDE_COUNT;

/// Profile-driven scoring policy. Substitution scores for every codon window
/// and reference residue are computed once, up front.
#[derive(Clone, Debug)]
pub struct GeneralScoring {
    profile: AlignmentProfile,
    substitutions: Vec<i32>,
}

#[inline]
fn window_index(codon: Codon, reference: AminoAcid) -> usize {
    let [a, b, c] = codon.nucleotides();
    ((a.code() * NUCLEOTIDE_COUNT + b.code()) * NUCLEOTIDE_COUNT + c.code()) * AMINO_ACID_COUNT
        + reference.index()
}

/// Floor of the mean score over the window's unambiguous resolutions.
fn mean_substitution_score(codon: Codon, reference: AminoAcid, stop_codon_penalty: i32) -> i32 {
    let resolutions = codon.unambiguous_codons();
    let total: i64 = resolutions
        .iter()
        .map(|c| match c.translate() {
            Some(AminoAcid::Stop) if reference != AminoAcid::Stop => -stop_codon_penalty,
            Some(aa) => blosum62::score(aa, reference),
            None => blosum62::score(AminoAcid::Unknown, reference),
        })
        .map(i64::from)
        .sum();
    // the mean of i32 values is an i32
    total.div_euclid(resolutions.len() as i64) as i32
}

impl GeneralScoring {
    pub fn new(profile: AlignmentProfile) -> AlignResult<Self> {
        profile.validate()?;
        Ok(Self::build(profile))
    }

    fn build(profile: AlignmentProfile) -> Self {
        let mut substitutions = vec![0i32; WINDOW_COUNT * AMINO_ACID_COUNT];
        for a in Nucleotide::ALL {
            for b in Nucleotide::ALL {
                for c in Nucleotide::ALL {
                    let codon = Codon::new(a, b, c);
                    for reference in AminoAcid::ALL {
                        substitutions[window_index(codon, reference)] = mean_substitution_score(
                            codon,
                            reference,
                            profile.stop_codon_penalty,
                        );
                    }
                }
            }
        }
        Self {
            profile,
            substitutions,
        }
    }

    pub fn profile(&self) -> &AlignmentProfile {
        &self.profile
    }
}

/// Scoring under [`AlignmentProfile::default`].
impl Default for GeneralScoring {
    fn default() -> Self {
        Self::build(AlignmentProfile::default())
    }
}

impl ScoringPolicy for GeneralScoring {
    fn gap_opening_score(&self, position: usize, kind: GapKind) -> i32 {
        let adjustment = self.profile.positional_indel_score(position);
        let bonus = match kind {
            GapKind::Insertion => adjustment.insertion,
            GapKind::Deletion => adjustment.deletion,
        };
        bonus.saturating_sub(self.profile.gap_opening_penalty)
    }

    fn gap_extension_score(&self, _position: usize, _kind: GapKind) -> i32 {
        -self.profile.gap_extension_penalty
    }

    #[inline]
    fn substitution_score(&self, _position: usize, codon: Codon, reference: AminoAcid) -> i32 {
        self.substitutions[window_index(codon, reference)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::profile::PositionalIndelScore;
    use crate::seq::read_nucleotides;

    fn codon(text: &[u8]) -> Codon {
        Codon::from_slice(&read_nucleotides(text).unwrap()).unwrap()
    }

    #[test]
    fn default_matches_default_profile() {
        let built = GeneralScoring::new(AlignmentProfile::default()).unwrap();
        let default = GeneralScoring::default();
        assert_eq!(built.substitutions, default.substitutions);
        assert_eq!(default.profile().gap_opening_penalty, 10);
    }

    #[test]
    fn exact_codon_uses_blosum() {
        let scoring = GeneralScoring::new(AlignmentProfile::default()).unwrap();
        assert_eq!(scoring.substitution_score(1, codon(b"ATG"), AminoAcid::M), 5);
        assert_eq!(scoring.substitution_score(1, codon(b"GGG"), AminoAcid::M), -3);
    }

    #[test]
    fn stop_codon_penalty_applies() {
        let profile = AlignmentProfile::new(9, 10, 2).unwrap();
        let scoring = GeneralScoring::new(profile).unwrap();
        assert_eq!(scoring.substitution_score(1, codon(b"TAA"), AminoAcid::M), -9);
        assert_eq!(scoring.substitution_score(1, codon(b"TAA"), AminoAcid::Stop), 1);
    }

    #[test]
    fn ambiguous_window_is_floored_mean() {
        let scoring = GeneralScoring::new(AlignmentProfile::default()).unwrap();
        // ATA, ATC, ATT code I (1 against M), ATG codes M (5)
        assert_eq!(scoring.substitution_score(1, codon(b"ATN"), AminoAcid::M), 2);
        // AAT N(-2), ACT T(-1), AGT S(-1), ATT I(1): -3/4 floors to -1
        assert_eq!(scoring.substitution_score(1, codon(b"ANT"), AminoAcid::M), -1);
    }

    #[test]
    fn gap_scores_follow_profile() {
        let profile = AlignmentProfile::default().with_positional_indel_score(
            3,
            PositionalIndelScore {
                insertion: 4,
                deletion: 0,
            },
        );
        let scoring = GeneralScoring::new(profile).unwrap();
        assert_eq!(scoring.gap_opening_score(1, GapKind::Insertion), -10);
        assert_eq!(scoring.gap_opening_score(3, GapKind::Insertion), -6);
        assert_eq!(scoring.gap_opening_score(3, GapKind::Deletion), -10);
        assert_eq!(scoring.gap_extension_score(3, GapKind::Deletion), -2);
    }

    #[test]
    fn extreme_penalties_saturate() {
        let profile = AlignmentProfile::new(i32::MAX, i32::MAX, 0)
            .unwrap()
            .with_positional_indel_score(
                2,
                PositionalIndelScore {
                    insertion: i32::MIN,
                    deletion: 0,
                },
            );
        let scoring = GeneralScoring::new(profile).unwrap();
        assert_eq!(scoring.substitution_score(1, codon(b"TAA"), AminoAcid::M), -i32::MAX);
        assert!(scoring.substitution_score(1, codon(b"NNN"), AminoAcid::M) < 0);
        assert_eq!(scoring.gap_opening_score(2, GapKind::Insertion), i32::MIN);
        assert_eq!(scoring.gap_opening_score(1, GapKind::Insertion), -i32::MAX);
    }
}
