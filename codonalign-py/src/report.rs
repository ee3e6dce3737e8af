use pyo3::prelude::*;
use pyo3::types::PyModule;

use codonalign_core::align as core_align;

#[pyclass(frozen)]
#[derive(Clone)]
pub struct Mutation {
    pub(crate) inner: core_align::Mutation,
}

#[pymethods]
impl Mutation {
    #[getter]
    fn position(&self) -> usize {
        self.inner.position
    }

    #[getter]
    fn na_position(&self) -> usize {
        self.inner.na_position
    }

    #[getter]
    fn codon(&self) -> &str {
        &self.inner.codon
    }

    #[getter]
    fn amino_acids(&self) -> &str {
        &self.inner.amino_acids
    }

    #[getter]
    fn reference(&self) -> String {
        self.inner.reference.to_string()
    }

    #[getter]
    fn control(&self) -> &str {
        &self.inner.control
    }

    #[getter]
    fn is_substitution(&self) -> bool {
        self.inner.is_substitution
    }

    #[getter]
    fn is_insertion(&self) -> bool {
        self.inner.is_insertion
    }

    #[getter]
    fn is_deletion(&self) -> bool {
        self.inner.is_deletion
    }

    #[getter]
    fn is_partial(&self) -> bool {
        self.inner.is_partial
    }

    #[getter]
    fn inserted_codons(&self) -> Vec<String> {
        self.inner.inserted_codons.clone()
    }

    #[getter]
    fn inserted_amino_acids(&self) -> &str {
        &self.inner.inserted_amino_acids
    }

    fn is_match(&self) -> bool {
        self.inner.is_match()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Mutation({:?}, control={:?})", self.inner.to_string(), self.inner.control)
    }
}

#[pyclass(frozen)]
#[derive(Clone)]
pub struct FrameShift {
    pub(crate) inner: core_align::FrameShift,
}

#[pymethods]
impl FrameShift {
    #[getter]
    fn position(&self) -> usize {
        self.inner.position
    }

    #[getter]
    fn kind(&self) -> &'static str {
        match self.inner.kind {
            core_align::FrameShiftKind::Insertion => "insertion",
            core_align::FrameShiftKind::Deletion => "deletion",
        }
    }

    #[getter]
    fn nucleotides(&self) -> &str {
        &self.inner.nucleotides
    }

    #[getter]
    fn gap_length(&self) -> usize {
        self.inner.gap_length
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("FrameShift({:?})", self.inner.to_string())
    }
}

#[pyclass(frozen)]
pub struct AlignmentReport {
    pub(crate) inner: core_align::AlignmentReport,
}

#[pymethods]
impl AlignmentReport {
    #[getter]
    fn first_aa(&self) -> usize {
        self.inner.first_aa
    }

    #[getter]
    fn last_aa(&self) -> usize {
        self.inner.last_aa
    }

    #[getter]
    fn first_na(&self) -> usize {
        self.inner.first_na
    }

    #[getter]
    fn last_na(&self) -> usize {
        self.inner.last_na
    }

    #[getter]
    fn mutations(&self) -> Vec<Mutation> {
        self.inner
            .mutations
            .iter()
            .cloned()
            .map(|inner| Mutation { inner })
            .collect()
    }

    #[getter]
    fn frameshifts(&self) -> Vec<FrameShift> {
        self.inner
            .frameshifts
            .iter()
            .cloned()
            .map(|inner| FrameShift { inner })
            .collect()
    }

    fn changes(&self) -> Vec<Mutation> {
        self.inner
            .changes()
            .cloned()
            .map(|inner| Mutation { inner })
            .collect()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn __len__(&self) -> usize {
        self.inner.mutations.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "AlignmentReport(first_aa={}, last_aa={}, first_na={}, last_na={}, mutations={}, frameshifts={})",
            self.inner.first_aa,
            self.inner.last_aa,
            self.inner.first_na,
            self.inner.last_na,
            self.inner.mutations.len(),
            self.inner.frameshifts.len()
        )
    }
}

impl From<core_align::AlignmentReport> for AlignmentReport {
    fn from(inner: core_align::AlignmentReport) -> Self {
        Self { inner }
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Mutation>()?;
    m.add_class::<FrameShift>()?;
    m.add_class::<AlignmentReport>()?;
    Ok(())
}
