use vector_map::VecMap;

use crate::error::{AlignError, AlignResult};

/// Additive adjustment to the gap opening score at one reference residue.
/// Positive values make an indel at that residue cheaper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionalIndelScore {
    pub insertion: i32,
    pub deletion: i32,
}

/// Scoring parameters for one gene. Penalties are non-negative and are
/// negated when turned into scores.
#[derive(Clone, Debug)]
pub struct AlignmentProfile {
    pub stop_codon_penalty: i32,
    pub gap_opening_penalty: i32,
    pub gap_extension_penalty: i32,
    /// Keyed by 1-based reference residue position.
    pub positional_indel_scores: VecMap<usize, PositionalIndelScore>,
}

impl Default for AlignmentProfile {
    fn default() -> Self {
        Self {
            stop_codon_penalty: 4,
            gap_opening_penalty: 10,
            gap_extension_penalty: 2,
            positional_indel_scores: VecMap::new(),
        }
    }
}

impl AlignmentProfile {
    pub fn new(
        stop_codon_penalty: i32,
        gap_opening_penalty: i32,
        gap_extension_penalty: i32,
    ) -> AlignResult<Self> {
        let profile = Self {
            stop_codon_penalty,
            gap_opening_penalty,
            gap_extension_penalty,
            positional_indel_scores: VecMap::new(),
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn with_positional_indel_score(
        mut self,
        position: usize,
        score: PositionalIndelScore,
    ) -> Self {
        self.positional_indel_scores.insert(position, score);
        self
    }

    pub fn positional_indel_score(&self, position: usize) -> PositionalIndelScore {
        self.positional_indel_scores
            .get(&position)
            .copied()
            .unwrap_or_default()
    }

    pub fn validate(&self) -> AlignResult<()> {
        let checks = [
            ("stop_codon_penalty", self.stop_codon_penalty),
            ("gap_opening_penalty", self.gap_opening_penalty),
            ("gap_extension_penalty", self.gap_extension_penalty),
        ];
        for (name, value) in checks {
            if value < 0 {
                return Err(AlignError::InvalidScoring {
                    msg: format!("{name} must be >= 0 (got {value})"),
                });
            }
        }
        Ok(())
    }
}
