use std::collections::HashMap;
use std::sync::LazyLock;

use pyo3::prelude::*;
use pyo3::types::PyAny;

use codonalign_core::align as core_align;
use codonalign_core::scoring::{AlignmentProfile, GeneralScoring, PositionalIndelScore};
use codonalign_core::seq::{read_amino_acids, read_nucleotides, AminoAcid, Nucleotide};

use crate::report::AlignmentReport;
use crate::utils::{extract_seq_bytes, to_py_err};

/// Scoring profile. The substitution table is built once, at construction.
#[pyclass(frozen)]
pub struct Profile {
    pub(crate) scoring: GeneralScoring,
}

#[pymethods]
impl Profile {
    #[new]
    #[pyo3(signature = (stop_codon_penalty=4, gap_opening_penalty=10, gap_extension_penalty=2, positional_indel_scores=None))]
    fn new(
        stop_codon_penalty: i32,
        gap_opening_penalty: i32,
        gap_extension_penalty: i32,
        positional_indel_scores: Option<HashMap<usize, (i32, i32)>>,
    ) -> PyResult<Self> {
        let mut profile =
            AlignmentProfile::new(stop_codon_penalty, gap_opening_penalty, gap_extension_penalty)
                .map_err(to_py_err)?;
        let mut positions: Vec<_> = positional_indel_scores.unwrap_or_default().into_iter().collect();
        positions.sort_unstable_by_key(|(pos, _)| *pos);
        for (pos, (insertion, deletion)) in positions {
            profile = profile.with_positional_indel_score(
                pos,
                PositionalIndelScore {
                    insertion,
                    deletion,
                },
            );
        }
        let scoring = GeneralScoring::new(profile).map_err(to_py_err)?;
        Ok(Self { scoring })
    }

    #[getter]
    fn stop_codon_penalty(&self) -> i32 {
        self.scoring.profile().stop_codon_penalty
    }

    #[getter]
    fn gap_opening_penalty(&self) -> i32 {
        self.scoring.profile().gap_opening_penalty
    }

    #[getter]
    fn gap_extension_penalty(&self) -> i32 {
        self.scoring.profile().gap_extension_penalty
    }

    #[getter]
    fn positional_indel_scores(&self) -> HashMap<usize, (i32, i32)> {
        self.scoring
            .profile()
            .positional_indel_scores
            .iter()
            .map(|(&pos, score)| (pos, (score.insertion, score.deletion)))
            .collect()
    }

    fn __repr__(&self) -> String {
        let profile = self.scoring.profile();
        format!(
            "Profile(stop_codon_penalty={}, gap_opening_penalty={}, gap_extension_penalty={}, positional_indel_scores={})",
            profile.stop_codon_penalty,
            profile.gap_opening_penalty,
            profile.gap_extension_penalty,
            profile.positional_indel_scores.len()
        )
    }
}

fn read_pair(
    nas: &Bound<'_, PyAny>,
    aas: &Bound<'_, PyAny>,
) -> PyResult<(Vec<Nucleotide>, Vec<AminoAcid>)> {
    let nas = read_nucleotides(&extract_seq_bytes(nas)?).map_err(to_py_err)?;
    let aas = read_amino_acids(&extract_seq_bytes(aas)?).map_err(to_py_err)?;
    Ok((nas, aas))
}

static DEFAULT_SCORING: LazyLock<GeneralScoring> = LazyLock::new(GeneralScoring::default);

fn scoring_for<'a>(profile: Option<&'a Profile>) -> &'a GeneralScoring {
    match profile {
        Some(profile) => &profile.scoring,
        None => &*DEFAULT_SCORING,
    }
}

/// Align a nucleotide read against an amino-acid reference.
#[pyfunction]
#[pyo3(signature = (nas, aas, profile=None))]
fn align(
    py: Python<'_>,
    nas: &Bound<'_, PyAny>,
    aas: &Bound<'_, PyAny>,
    profile: Option<PyRef<'_, Profile>>,
) -> PyResult<AlignmentReport> {
    let (nas, aas) = read_pair(nas, aas)?;
    let scoring = scoring_for(profile.as_deref());
    let report = py
        .allow_threads(|| core_align::align(&nas, &aas, scoring))
        .map_err(to_py_err)?;
    Ok(report.into())
}

/// Align many `(read, reference)` pairs; runs in parallel.
#[pyfunction]
#[pyo3(signature = (pairs, profile=None))]
fn align_many<'py>(
    py: Python<'py>,
    pairs: Vec<(Bound<'py, PyAny>, Bound<'py, PyAny>)>,
    profile: Option<PyRef<'_, Profile>>,
) -> PyResult<Vec<AlignmentReport>> {
    let pairs = pairs
        .iter()
        .map(|(nas, aas)| read_pair(nas, aas))
        .collect::<PyResult<Vec<_>>>()?;
    let scoring = scoring_for(profile.as_deref());
    let reports = py
        .allow_threads(|| core_align::align_batch(&pairs, scoring))
        .map_err(to_py_err)?;
    Ok(reports.into_iter().map(AlignmentReport::from).collect())
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Profile>()?;
    m.add_function(wrap_pyfunction!(align, m)?)?;
    m.add_function(wrap_pyfunction!(align_many, m)?)?;
    Ok(())
}
