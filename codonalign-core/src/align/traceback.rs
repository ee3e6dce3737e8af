use log::trace;

use super::matrix::{CellIndex, ScoreMatrices, State, NEG_INF};
use crate::seq::{AminoAcid, Nucleotide};

/// Nucleotides assigned to one reference residue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignedRun<'a> {
    /// 1-based residue position.
    pub position: usize,
    /// 0-based offset of the first nucleotide in the read.
    pub na_start: usize,
    pub nucleotides: &'a [Nucleotide],
    pub reference: AminoAcid,
}

/// Trimmed path through the matrices, as per-residue runs in residue order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traceback<'a> {
    pub runs: Vec<AlignedRun<'a>>,
    pub first_aa: usize,
    pub last_aa: usize,
    pub first_na: usize,
    pub last_na: usize,
}

/// Lowest-scoring cell on the path from the best cell back to the origin;
/// on ties the one nearest the origin.
pub fn trimmed_start(m: &ScoreMatrices) -> CellIndex {
    let mut start = m.best();
    let mut min = m.score_at(start);
    let mut cur = start;
    while let Some(prev) = m.backpointer_at(cur) {
        cur = prev;
        let score = m.score_at(cur);
        if score <= min {
            min = score;
            start = cur;
        }
    }
    trace!(
        "trimmed start {:?} score {}",
        m.layout().cell(start),
        min
    );
    start
}

/// Walk from the best cell to the trimmed start, cutting the path into
/// per-residue nucleotide runs. Insertion cells join the run of the
/// residue they follow.
pub fn traceback<'a>(
    m: &ScoreMatrices,
    nas: &'a [Nucleotide],
    aas: &[AminoAcid],
) -> Traceback<'a> {
    let layout = m.layout();
    let start = layout.position_index(trimmed_start(m));

    let mut runs = Vec::new();
    let mut first = (1, 1);
    let mut last = None;
    // (n, a) that closes the run currently being collected
    let mut run_end: Option<(usize, usize)> = None;
    let mut last_state = State::General;
    let mut pending_insertion = false;
    let mut cur = m.best();

    while layout.position_index(cur) >= start {
        debug_assert!(m.score_at(cur) != NEG_INF, "traceback reached an unreachable cell");
        let (state, n, a) = layout.cell(cur);
        if last.is_none() {
            last = Some((a, n));
        }
        first = (a + 1, n + 1);

        if last_state != State::Ins {
            if let Some((end_n, end_a)) = run_end {
                if end_a > a {
                    pending_insertion = false;
                    runs.push(AlignedRun {
                        position: a + 1,
                        na_start: n,
                        nucleotides: &nas[n..end_n],
                        reference: aas[a],
                    });
                }
            }
        }

        if last_state == State::Ins {
            pending_insertion = true;
        } else if !pending_insertion {
            run_end = Some((n, a));
        }
        last_state = state;

        if n == 0 || a == 0 {
            break;
        }
        match m.backpointer_at(cur) {
            Some(prev) => cur = prev,
            None => break,
        }
    }

    runs.reverse();
    let (last_aa, last_na) = last.unwrap_or((0, 0));
    Traceback {
        runs,
        first_aa: first.0,
        last_aa,
        first_na: first.1,
        last_na,
    }
}
