use std::fmt;

use crate::seq::AminoAcid;

/// One classified reference residue.
///
/// Exact matches are reported too, with every flag cleared and a `":::"`
/// control; use [`Mutation::is_match`] or [`AlignmentReport::changes`] to
/// filter them out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    /// 1-based reference residue position.
    pub position: usize,
    /// 1-based position of the first nucleotide assigned to the residue.
    pub na_position: usize,
    /// Consumed codon; empty for deletions, filled slots blanked for partials.
    pub codon: String,
    /// Translations of the codon, in residue order.
    pub amino_acids: String,
    pub reference: AminoAcid,
    pub is_substitution: bool,
    pub is_insertion: bool,
    pub is_deletion: bool,
    pub is_partial: bool,
    /// One of `:.-+` per rendered nucleotide slot.
    pub control: String,
    pub inserted_codons: Vec<String>,
    /// Inserted residues; codons with several translations are bracketed.
    pub inserted_amino_acids: String,
}

impl Mutation {
    pub fn is_match(&self) -> bool {
        !(self.is_substitution || self.is_insertion || self.is_deletion || self.is_partial)
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.reference, self.position)?;
        if self.is_deletion {
            return f.write_str("-");
        }
        if self.is_partial {
            f.write_str("X")?;
        } else {
            f.write_str(&self.amino_acids)?;
        }
        if self.is_insertion {
            write!(f, "_{}", self.inserted_amino_acids)?;
        }
        write!(f, ":{}", self.codon)?;
        if self.is_insertion {
            write!(f, "_{}", self.inserted_codons.concat())?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameShiftKind {
    Insertion,
    Deletion,
}

/// Nucleotides that break the reading frame at one residue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameShift {
    /// 1-based reference residue position.
    pub position: usize,
    pub kind: FrameShiftKind,
    /// Extra nucleotides; empty for deletions.
    pub nucleotides: String,
    pub gap_length: usize,
}

impl FrameShift {
    pub fn is_insertion(&self) -> bool {
        self.kind == FrameShiftKind::Insertion
    }

    pub fn is_deletion(&self) -> bool {
        self.kind == FrameShiftKind::Deletion
    }
}

impl fmt::Display for FrameShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FrameShiftKind::Insertion => write!(
                f,
                "{}ins{}bp_{}",
                self.position, self.gap_length, self.nucleotides
            ),
            FrameShiftKind::Deletion => write!(f, "{}del{}bp", self.position, self.gap_length),
        }
    }
}

/// Result of aligning one read against one reference. Positions are 1-based
/// and inclusive; an empty report has `first > last` on both axes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentReport {
    pub first_aa: usize,
    pub last_aa: usize,
    pub first_na: usize,
    pub last_na: usize,
    pub mutations: Vec<Mutation>,
    pub frameshifts: Vec<FrameShift>,
}

impl AlignmentReport {
    pub fn empty() -> Self {
        Self {
            first_aa: 1,
            last_aa: 0,
            first_na: 1,
            last_na: 0,
            mutations: Vec::new(),
            frameshifts: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty() && self.frameshifts.is_empty()
    }

    /// Mutations other than exact matches.
    pub fn changes(&self) -> impl Iterator<Item = &Mutation> + '_ {
        self.mutations.iter().filter(|m| !m.is_match())
    }
}

impl Default for AlignmentReport {
    fn default() -> Self {
        Self::empty()
    }
}
