pub mod blosum62;
pub mod general;
pub mod profile;

use std::fmt;

pub use general::GeneralScoring;
pub use profile::{AlignmentProfile, PositionalIndelScore};

use crate::error::{AlignError, AlignResult};
use crate::seq::{AminoAcid, Codon};

/// Gap direction relative to the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GapKind {
    /// Extra nucleotides with no reference residue.
    Insertion,
    /// Reference residues with no nucleotides.
    Deletion,
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GapKind::Insertion => "insertion",
            GapKind::Deletion => "deletion",
        })
    }
}

/// Scores consulted by the alignment engine. Positions are 1-based reference
/// residue positions; position 0 is the boundary before the first residue.
///
/// Gap scores must be non-positive at every position the engine queries.
pub trait ScoringPolicy {
    fn gap_opening_score(&self, position: usize, kind: GapKind) -> i32;

    fn gap_extension_score(&self, position: usize, kind: GapKind) -> i32;

    fn substitution_score(&self, position: usize, codon: Codon, reference: AminoAcid) -> i32;
}

impl<P: ScoringPolicy + ?Sized> ScoringPolicy for &P {
    #[inline]
    fn gap_opening_score(&self, position: usize, kind: GapKind) -> i32 {
        (**self).gap_opening_score(position, kind)
    }

    #[inline]
    fn gap_extension_score(&self, position: usize, kind: GapKind) -> i32 {
        (**self).gap_extension_score(position, kind)
    }

    #[inline]
    fn substitution_score(&self, position: usize, codon: Codon, reference: AminoAcid) -> i32 {
        (**self).substitution_score(position, codon, reference)
    }
}

/// Reject policies that return a positive gap score anywhere in `0..=reference_len`.
pub fn validate_policy<P: ScoringPolicy + ?Sized>(
    policy: &P,
    reference_len: usize,
) -> AlignResult<()> {
    for position in 0..=reference_len {
        for kind in [GapKind::Insertion, GapKind::Deletion] {
            let open = policy.gap_opening_score(position, kind);
            let extend = policy.gap_extension_score(position, kind);
            if open > 0 || extend > 0 {
                return Err(AlignError::InvalidScoring {
                    msg: format!(
                        "{kind} scores at position {position} must be <= 0 (open {open}, extend {extend})"
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat {
        open: i32,
        extend: i32,
    }

    impl ScoringPolicy for Flat {
        fn gap_opening_score(&self, _position: usize, _kind: GapKind) -> i32 {
            self.open
        }
        fn gap_extension_score(&self, _position: usize, _kind: GapKind) -> i32 {
            self.extend
        }
        fn substitution_score(&self, _position: usize, _codon: Codon, _reference: AminoAcid) -> i32 {
            0
        }
    }

    #[test]
    fn validate_accepts_non_positive() {
        assert!(validate_policy(&Flat { open: -3, extend: 0 }, 5).is_ok());
    }

    #[test]
    fn validate_rejects_positive_gap_scores() {
        let err = validate_policy(&Flat { open: 1, extend: -1 }, 2).unwrap_err();
        assert!(matches!(err, AlignError::InvalidScoring { .. }));
        assert!(err.to_string().contains("position 0"));
    }

    #[test]
    fn positional_bonus_can_break_validation() {
        let profile = AlignmentProfile::new(4, 2, 1).unwrap().with_positional_indel_score(
            3,
            PositionalIndelScore {
                insertion: 0,
                deletion: 5,
            },
        );
        let scoring = GeneralScoring::new(profile).unwrap();
        assert!(validate_policy(&scoring, 2).is_ok());
        let err = validate_policy(&scoring, 3).unwrap_err();
        assert!(err.to_string().contains("deletion scores at position 3"));
    }
}
