//! Codon-aware three-state fill. `n` indexes the read (rows of the inner
//! loop), `a` indexes the reference (outer loop).

use std::mem;

use log::debug;

use super::matrix::{plus, CellIndex, MatrixLayout, ScoreMatrices, State, NEG_INF};
use crate::error::AlignResult;
use crate::scoring::{validate_policy, GapKind, ScoringPolicy};
use crate::seq::{AminoAcid, Codon, Nucleotide};

use crate::seq::Nucleotide::N;

/// Running maximum over candidate transitions.
struct Pick {
    score: i32,
    from: CellIndex,
}

impl Pick {
    #[inline]
    fn new(score: i32, from: CellIndex) -> Self {
        Self { score, from }
    }

    /// Replace on strict improvement.
    #[inline]
    fn above(&mut self, score: i32, from: CellIndex) {
        if score > self.score {
            self.score = score;
            self.from = from;
        }
    }

    /// Replace on improvement or tie.
    #[inline]
    fn at_least(&mut self, score: i32, from: CellIndex) {
        if score >= self.score {
            self.score = score;
            self.from = from;
        }
    }
}

/// Fill all three matrices for `nas` against `aas`.
///
/// Fails before touching the arena when the matrix would not fit 32-bit
/// indices or when the policy returns a positive gap score. Scores of
/// reachable cells saturate at `MIN_REACHABLE` and `i32::MAX`.
pub fn fill<P: ScoringPolicy + ?Sized>(
    nas: &[Nucleotide],
    aas: &[AminoAcid],
    policy: &P,
) -> AlignResult<ScoreMatrices> {
    let layout = MatrixLayout::new(nas.len(), aas.len())?;
    validate_policy(policy, aas.len())?;
    debug!(
        "fill: {} nucleotides x {} residues ({} cells)",
        nas.len(),
        aas.len(),
        layout.cell_count()
    );

    let ln = nas.len();
    let la = aas.len();
    let mut m = ScoreMatrices::new(layout);
    let origin = layout.origin();
    // Candidate sums are taken in i64 and clamped by `plus`.
    let open = |a: usize, kind: GapKind| i64::from(policy.gap_opening_score(a, kind));
    let extend = |a: usize, kind: GapKind| i64::from(policy.gap_extension_score(a, kind));

    // Previous and current `a` columns of GENERAL and DEL scores.
    let mut g_prev = vec![NEG_INF; ln + 1];
    let mut d_prev = vec![NEG_INF; ln + 1];
    let mut g_cur = vec![NEG_INF; ln + 1];
    let mut d_cur = vec![NEG_INF; ln + 1];
    let mut best_score = NEG_INF;

    for a in 0..=la {
        // INS(n-1, a)
        let mut ins_prev = NEG_INF;

        for n in 0..=ln {
            let ins_idx = layout.index(State::Ins, n, a);
            let del_idx = layout.index(State::Del, n, a);
            let gen_idx = layout.index(State::General, n, a);

            // INS
            let ins = if n == 0 {
                if a > 0 {
                    Pick::new(plus(0, open(a, GapKind::Insertion)), origin)
                } else {
                    Pick::new(NEG_INF, origin)
                }
            } else {
                let q = open(a, GapKind::Insertion);
                let r = extend(a, GapKind::Insertion);
                // ties favour continuing the run
                let mut pick = Pick::new(plus(ins_prev, r), layout.index(State::Ins, n - 1, a));
                pick.above(plus(g_cur[n - 1], q + r), layout.index(State::General, n - 1, a));
                pick
            };
            m.set(ins_idx, ins.score, Some(ins.from));
            ins_prev = ins.score;

            // DEL
            let del = if n == 0 {
                Pick::new(NEG_INF, origin)
            } else if a == 0 {
                Pick::new(plus(0, open(0, GapKind::Deletion)), origin)
            } else {
                let q = open(a, GapKind::Deletion);
                let r0 = extend(a, GapKind::Deletion);
                let r1 = extend(a - 1, GapKind::Deletion);
                let x = nas[n - 1];
                let reference = aas[a - 1];
                let sub = |codon: Codon| i64::from(policy.substitution_score(a, codon, reference));

                let mut pick = Pick::new(plus(d_prev[n], 3 * r1), layout.index(State::Del, n, a - 1));
                pick.above(
                    plus(g_prev[n], q + 3 * r0),
                    layout.index(State::General, n, a - 1),
                );
                let diag = layout.index(State::General, n - 1, a - 1);
                pick.above(
                    plus(g_prev[n - 1], sub(Codon::new(x, N, N)) + q + 2 * r0),
                    diag,
                );
                pick.above(
                    plus(g_prev[n - 1], sub(Codon::new(N, x, N)) + 2 * q + 2 * r0),
                    diag,
                );
                if n > 1 {
                    let w = nas[n - 2];
                    pick.at_least(
                        plus(d_prev[n - 1], sub(Codon::new(N, x, N)) + q + 2 * r0),
                        layout.index(State::Del, n - 1, a - 1),
                    );
                    pick.at_least(
                        plus(g_prev[n - 2], sub(Codon::new(w, x, N)) + q + r0),
                        layout.index(State::General, n - 2, a - 1),
                    );
                }
                pick
            };
            m.set(del_idx, del.score, Some(del.from));
            d_cur[n] = del.score;

            // GENERAL
            let general = if n == 0 || a == 0 {
                Pick::new(0, origin)
            } else {
                let q = open(a, GapKind::Deletion);
                let r = extend(a, GapKind::Deletion);
                let x = nas[n - 1];
                let reference = aas[a - 1];
                let sub = |codon: Codon| i64::from(policy.substitution_score(a, codon, reference));

                let mut pick = Pick::new(
                    plus(g_prev[n - 1], sub(Codon::new(N, N, x)) + q + 2 * r),
                    layout.index(State::General, n - 1, a - 1),
                );
                if n > 1 {
                    let w = nas[n - 2];
                    let two_back = layout.index(State::General, n - 2, a - 1);
                    pick.above(plus(g_prev[n - 2], sub(Codon::new(w, N, x)) + q + r), two_back);
                    pick.above(plus(g_prev[n - 2], sub(Codon::new(N, w, x)) + q + r), two_back);
                    pick.at_least(
                        plus(d_prev[n - 1], sub(Codon::new(N, N, x)) + 2 * r),
                        layout.index(State::Del, n - 1, a - 1),
                    );
                    if n > 2 {
                        let v = nas[n - 3];
                        pick.above(
                            plus(g_prev[n - 3], sub(Codon::new(v, w, x))),
                            layout.index(State::General, n - 3, a - 1),
                        );
                        pick.at_least(
                            plus(d_prev[n - 2], sub(Codon::new(N, w, x)) + r),
                            layout.index(State::Del, n - 2, a - 1),
                        );
                    }
                }
                pick.at_least(ins.score, ins_idx);
                pick.at_least(del.score, del_idx);
                pick
            };
            let from = (gen_idx != origin).then_some(general.from);
            m.set(gen_idx, general.score, from);
            g_cur[n] = general.score;

            if general.score >= best_score {
                best_score = general.score;
                m.best = gen_idx;
            }
        }

        mem::swap(&mut g_prev, &mut g_cur);
        mem::swap(&mut d_prev, &mut d_cur);
    }

    debug!(
        "fill: best score {} at (n={}, a={})",
        best_score,
        m.best_position().0,
        m.best_position().1
    );
    Ok(m)
}
