use crate::alphabets::Alphabet;

pub fn alphabet() -> Alphabet {
    Alphabet::new(&b"ARNDCEQGHILKMFPSTWYVarndceqghilkmfpstwyv"[..])
}

/// Reference residues: the 20 standard amino acids plus stop and unknown.
pub fn reference_alphabet() -> Alphabet {
    alphabet().union(&Alphabet::new(b"*Xx"))
}
