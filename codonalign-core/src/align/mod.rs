pub mod classify;
pub mod fill;
pub mod matrix;
pub mod traceback;
pub mod types;

pub use classify::classify;
pub use fill::fill;
pub use matrix::{CellIndex, MatrixLayout, ScoreMatrices, State, MIN_REACHABLE, NEG_INF};
pub use traceback::{traceback, AlignedRun, Traceback};
pub use types::{AlignmentReport, FrameShift, FrameShiftKind, Mutation};

use log::debug;

use crate::error::AlignResult;
use crate::scoring::ScoringPolicy;
use crate::seq::{AminoAcid, Nucleotide};


/// Fold a traceback into a report. The first and last runs are edges of
/// the aligned region.
pub fn assemble_report(tb: &Traceback<'_>) -> AlignmentReport {
    if tb.runs.is_empty() {
        return AlignmentReport::empty();
    }
    let last = tb.runs.len() - 1;
    let mut mutations = Vec::with_capacity(tb.runs.len());
    let mut frameshifts = Vec::new();
    for (i, run) in tb.runs.iter().enumerate() {
        let (mutation, frameshift) = classify(run, i == 0 || i == last);
        mutations.push(mutation);
        frameshifts.extend(frameshift);
    }
    AlignmentReport {
        first_aa: tb.first_aa,
        last_aa: tb.last_aa,
        first_na: tb.first_na,
        last_na: tb.last_na,
        mutations,
        frameshifts,
    }
}

/// Align a read against a protein reference.
pub fn align<P: ScoringPolicy + ?Sized>(
    nas: &[Nucleotide],
    aas: &[AminoAcid],
    policy: &P,
) -> AlignResult<AlignmentReport> {
    let matrices = fill(nas, aas, policy)?;
    let tb = traceback(&matrices, nas, aas);
    let report = assemble_report(&tb);
    debug!(
        "align: aa {}..{} na {}..{}, {} mutations ({} changes), {} frameshifts",
        report.first_aa,
        report.last_aa,
        report.first_na,
        report.last_na,
        report.mutations.len(),
        report.changes().count(),
        report.frameshifts.len()
    );
    Ok(report)
}

/// Align independent `(read, reference)` pairs, in parallel when the
/// `parallel` feature is enabled. Fails on the first error.
pub fn align_batch<P: ScoringPolicy + Sync + ?Sized>(
    pairs: &[(Vec<Nucleotide>, Vec<AminoAcid>)],
    policy: &P,
) -> AlignResult<Vec<AlignmentReport>> {
    par_try_map!(pairs, |(nas, aas): &(Vec<Nucleotide>, Vec<AminoAcid>)| {
        align(nas, aas, policy)
    })
}
