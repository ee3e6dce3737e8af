//! Codon-aware alignment of nucleotide reads against protein references.
//!
//! ```
//! use codonalign_core::align::align;
//! use codonalign_core::scoring::{AlignmentProfile, GeneralScoring};
//! use codonalign_core::seq::{read_amino_acids, read_nucleotides};
//!
//! let scoring = GeneralScoring::new(AlignmentProfile::default()).unwrap();
//! let nas = read_nucleotides(b"ATG").unwrap();
//! let aas = read_amino_acids(b"M").unwrap();
//! let report = align(&nas, &aas, &scoring).unwrap();
//! assert_eq!(report.mutations[0].control, ":::");
//! ```

#[macro_use]
mod par;

pub mod align;
pub mod alphabets;
pub mod error;
pub mod scoring;
pub mod seq;

pub use error::{AlignError, AlignResult};
