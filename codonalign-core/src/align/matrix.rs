//! Flat score/backpointer arena over `(state, n, a)`.
//!
//! Layout: `a` varies fastest, then `n`, then state. [`MatrixLayout`] is the
//! only place offsets are computed.

use std::fmt;

use crate::error::{AlignError, AlignResult};

/// Score of an unreachable cell. Adding anything to it yields it again.
pub const NEG_INF: i32 = i32::MIN;

/// Lowest score a reachable cell can hold.
pub const MIN_REACHABLE: i32 = NEG_INF + 1;

/// `score + delta`, clamped to `MIN_REACHABLE..=i32::MAX` unless `score`
/// is unreachable.
#[inline]
pub(crate) fn plus(score: i32, delta: i64) -> i32 {
    if score == NEG_INF {
        NEG_INF
    } else {
        (i64::from(score) + delta).clamp(i64::from(MIN_REACHABLE), i64::from(i32::MAX)) as i32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    General,
    Ins,
    Del,
}

impl State {
    pub const ALL: [State; 3] = [State::General, State::Ins, State::Del];

    #[inline]
    fn ordinal(self) -> usize {
        match self {
            State::General => 0,
            State::Ins => 1,
            State::Del => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            State::General => "GENERAL",
            State::Ins => "INS",
            State::Del => "DEL",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(u32);

impl CellIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// Dimensions of the arena: `nucleotides` is `Ln`, `residues` is `La`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixLayout {
    nucleotides: usize,
    residues: usize,
}

impl MatrixLayout {
    pub fn new(nucleotides: usize, residues: usize) -> AlignResult<Self> {
        let cells = 3u128 * (nucleotides as u128 + 1) * (residues as u128 + 1);
        if cells > u32::MAX as u128 {
            return Err(AlignError::MatrixTooLarge { cells });
        }
        Ok(Self {
            nucleotides,
            residues,
        })
    }

    pub fn nucleotides(&self) -> usize {
        self.nucleotides
    }

    pub fn residues(&self) -> usize {
        self.residues
    }

    /// Cells per state.
    #[inline]
    pub fn plane_len(&self) -> usize {
        (self.nucleotides + 1) * (self.residues + 1)
    }

    pub fn cell_count(&self) -> usize {
        3 * self.plane_len()
    }

    #[inline]
    pub fn index(&self, state: State, n: usize, a: usize) -> CellIndex {
        debug_assert!(n <= self.nucleotides && a <= self.residues);
        let idx = (self.residues + 1) * (n + state.ordinal() * (self.nucleotides + 1)) + a;
        CellIndex(idx as u32)
    }

    /// Inverse of [`MatrixLayout::index`]: `(state, n, a)`.
    #[inline]
    pub fn cell(&self, idx: CellIndex) -> (State, usize, usize) {
        let idx = idx.get();
        let a = idx % (self.residues + 1);
        let rest = idx / (self.residues + 1);
        let n = rest % (self.nucleotides + 1);
        (State::ALL[rest / (self.nucleotides + 1)], n, a)
    }

    /// Index of `(n, a)` within one state plane; orders positions regardless of state.
    #[inline]
    pub fn position_index(&self, idx: CellIndex) -> usize {
        idx.get() % self.plane_len()
    }

    pub fn origin(&self) -> CellIndex {
        self.index(State::General, 0, 0)
    }
}

/// Filled matrices for one alignment plus the best `GENERAL` cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrices {
    pub(crate) layout: MatrixLayout,
    pub(crate) scores: Vec<i32>,
    pub(crate) backpointers: Vec<Option<CellIndex>>,
    pub(crate) best: CellIndex,
}

impl ScoreMatrices {
    pub(crate) fn new(layout: MatrixLayout) -> Self {
        let cells = layout.cell_count();
        Self {
            layout,
            scores: vec![NEG_INF; cells],
            backpointers: vec![None; cells],
            best: layout.origin(),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, idx: CellIndex, score: i32, from: Option<CellIndex>) {
        self.scores[idx.get()] = score;
        self.backpointers[idx.get()] = if score == NEG_INF { None } else { from };
    }

    pub fn layout(&self) -> &MatrixLayout {
        &self.layout
    }

    #[inline]
    pub fn score_at(&self, idx: CellIndex) -> i32 {
        self.scores[idx.get()]
    }

    #[inline]
    pub fn backpointer_at(&self, idx: CellIndex) -> Option<CellIndex> {
        self.backpointers[idx.get()]
    }

    pub fn score(&self, state: State, n: usize, a: usize) -> i32 {
        self.score_at(self.layout.index(state, n, a))
    }

    pub fn backpointer(&self, state: State, n: usize, a: usize) -> Option<CellIndex> {
        self.backpointer_at(self.layout.index(state, n, a))
    }

    pub fn is_reachable(&self, state: State, n: usize, a: usize) -> bool {
        self.score(state, n, a) != NEG_INF
    }

    pub fn best(&self) -> CellIndex {
        self.best
    }

    /// `(n, a)` of the best `GENERAL` cell.
    pub fn best_position(&self) -> (usize, usize) {
        let (_, n, a) = self.layout.cell(self.best);
        (n, a)
    }

    pub fn best_score(&self) -> i32 {
        self.score_at(self.best)
    }

    /// Cells holding a backpointer.
    pub fn visited_cells(&self) -> usize {
        self.backpointers.iter().filter(|bp| bp.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let layout = MatrixLayout::new(4, 2).unwrap();
        for state in State::ALL {
            for n in 0..=4 {
                for a in 0..=2 {
                    let idx = layout.index(state, n, a);
                    assert_eq!(layout.cell(idx), (state, n, a));
                }
            }
        }
        assert_eq!(layout.index(State::Del, 4, 2).get(), layout.cell_count() - 1);
    }

    #[test]
    fn a_varies_fastest() {
        let layout = MatrixLayout::new(3, 5).unwrap();
        assert_eq!(layout.index(State::General, 0, 1).get(), 1);
        assert_eq!(layout.index(State::General, 1, 0).get(), 6);
        assert_eq!(layout.index(State::Ins, 0, 0).get(), 24);
        assert_eq!(
            layout.position_index(layout.index(State::Del, 2, 3)),
            layout.position_index(layout.index(State::General, 2, 3))
        );
    }

    #[test]
    fn oversized_layout_rejected() {
        let err = MatrixLayout::new(1 << 20, 1 << 12).unwrap_err();
        assert!(matches!(err, AlignError::MatrixTooLarge { .. }));
    }

    #[test]
    fn neg_inf_absorbs() {
        assert_eq!(plus(NEG_INF, 10), NEG_INF);
        assert_eq!(plus(NEG_INF, -10), NEG_INF);
        assert_eq!(plus(-3, -4), -7);
        assert_eq!(plus(-5, i64::from(i32::MIN) * 4), MIN_REACHABLE);
        assert_eq!(plus(i32::MAX - 1, 10), i32::MAX);
        assert_eq!(State::Del.to_string(), "DEL");
    }
}
