use std::fmt;

/// Reference residue: the 20 standard amino acids, unknown (`X`) and stop (`*`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AminoAcid {
    A,
    R,
    N,
    D,
    C,
    Q,
    E,
    G,
    H,
    I,
    L,
    K,
    M,
    F,
    P,
    S,
    T,
    W,
    Y,
    V,
    Unknown,
    Stop,
}

pub const AMINO_ACID_COUNT: usize = 22;

const SYMBOLS: &[u8; AMINO_ACID_COUNT] = b"ARNDCQEGHILKMFPSTWYVX*";

impl AminoAcid {
    pub const ALL: [AminoAcid; AMINO_ACID_COUNT] = [
        AminoAcid::A,
        AminoAcid::R,
        AminoAcid::N,
        AminoAcid::D,
        AminoAcid::C,
        AminoAcid::Q,
        AminoAcid::E,
        AminoAcid::G,
        AminoAcid::H,
        AminoAcid::I,
        AminoAcid::L,
        AminoAcid::K,
        AminoAcid::M,
        AminoAcid::F,
        AminoAcid::P,
        AminoAcid::S,
        AminoAcid::T,
        AminoAcid::W,
        AminoAcid::Y,
        AminoAcid::V,
        AminoAcid::Unknown,
        AminoAcid::Stop,
    ];

    pub fn from_byte(b: u8) -> Option<Self> {
        let upper = b.to_ascii_uppercase();
        SYMBOLS
            .iter()
            .position(|&s| s == upper)
            .map(|idx| Self::ALL[idx])
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        SYMBOLS[self as usize]
    }

    /// Row/column of this residue in the substitution table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

pub fn amino_acids_to_string(aas: &[AminoAcid]) -> String {
    aas.iter().map(|aa| aa.as_byte() as char).collect()
}
