use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("invalid codon length: {len} (expected 3)")]
    InvalidCodon { len: usize },

    #[error("invalid scoring parameters: {msg}")]
    InvalidScoring { msg: String },

    #[error("alignment matrix too large: {cells} cells exceed the addressable arena")]
    MatrixTooLarge { cells: u128 },
}

pub type AlignResult<T> = Result<T, AlignError>;
