use super::traceback::AlignedRun;
use super::types::{FrameShift, FrameShiftKind, Mutation};
use crate::seq::{nucleotides_to_string, Codon, Nucleotide};

/// Classify the nucleotides assigned to one residue.
///
/// `at_edge` marks the first or last aligned residue: a short run there is a
/// truncated read rather than a frameshift.
pub fn classify(run: &AlignedRun<'_>, at_edge: bool) -> (Mutation, Option<FrameShift>) {
    let nas = run.nucleotides;
    match nas.len() {
        0 => (deletion(run), None),
        len @ (1 | 2) => {
            let frameshift = (!at_edge).then(|| FrameShift {
                position: run.position,
                kind: FrameShiftKind::Deletion,
                nucleotides: String::new(),
                gap_length: 3 - len,
            });
            (partial(run), frameshift)
        }
        len => {
            let whole = len - len % 3;
            let frameshift = (len % 3 != 0).then(|| FrameShift {
                position: run.position,
                kind: FrameShiftKind::Insertion,
                nucleotides: nucleotides_to_string(&nas[whole..]),
                gap_length: len % 3,
            });
            (codons(run, &nas[..whole]), frameshift)
        }
    }
}

fn base(run: &AlignedRun<'_>) -> Mutation {
    Mutation {
        position: run.position,
        na_position: run.na_start + 1,
        codon: String::new(),
        amino_acids: String::new(),
        reference: run.reference,
        is_substitution: false,
        is_insertion: false,
        is_deletion: false,
        is_partial: false,
        control: String::new(),
        inserted_codons: Vec::new(),
        inserted_amino_acids: String::new(),
    }
}

fn deletion(run: &AlignedRun<'_>) -> Mutation {
    Mutation {
        is_deletion: true,
        control: "---".to_string(),
        ..base(run)
    }
}

fn partial(run: &AlignedRun<'_>) -> Mutation {
    let nas = run.nucleotides;
    let best = Codon::find_best_match(nas, run.reference);

    let control = if nas.iter().all(|na| na.is_fully_ambiguous()) {
        format!("{}{}", ".".repeat(nas.len()), "-".repeat(3 - nas.len()))
    } else {
        best.filled
            .iter()
            .map(|&filled| if filled { '-' } else { '.' })
            .collect()
    };
    let codon: String = best
        .codon
        .nucleotides()
        .iter()
        .zip(best.filled)
        .map(|(na, filled)| if filled { ' ' } else { na.as_byte() as char })
        .collect();

    Mutation {
        codon,
        amino_acids: best.codon.amino_acids_text(),
        is_substitution: !best.codon.amino_acids().contains(&run.reference),
        is_partial: true,
        control,
        ..base(run)
    }
}

/// `nas` holds whole codons only; everything past the first is inserted.
fn codons(run: &AlignedRun<'_>, nas: &[Nucleotide]) -> Mutation {
    let codon = Codon::new(nas[0], nas[1], nas[2]);
    let matched = codon.always_codes(run.reference);
    let mut control = String::from(if matched { ":::" } else { "..." });

    let inserted: Vec<Codon> = nas[3..]
        .chunks_exact(3)
        .map(|c| Codon::new(c[0], c[1], c[2]))
        .collect();
    let mut inserted_amino_acids = String::new();
    for c in &inserted {
        control.push_str("+++");
        let text = c.amino_acids_text();
        if text.len() > 1 {
            inserted_amino_acids.push('[');
            inserted_amino_acids.push_str(&text);
            inserted_amino_acids.push(']');
        } else {
            inserted_amino_acids.push_str(&text);
        }
    }

    Mutation {
        codon: codon.to_string(),
        amino_acids: codon.amino_acids_text(),
        is_substitution: !matched,
        is_insertion: !inserted.is_empty(),
        control,
        inserted_codons: inserted.iter().map(Codon::to_string).collect(),
        inserted_amino_acids,
        ..base(run)
    }
}

/// Rendered width of a mutation's codon column.
pub fn control_width(mutation: &Mutation) -> usize {
    3 + 3 * mutation.inserted_codons.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::{read_nucleotides, AminoAcid};
    use proptest::prelude::*;

    fn run<'a>(nas: &'a [Nucleotide], reference: AminoAcid) -> AlignedRun<'a> {
        AlignedRun {
            position: 7,
            na_start: 18,
            nucleotides: nas,
            reference,
        }
    }

    #[test]
    fn empty_run_is_deletion() {
        let (m, fs) = classify(&run(&[], AminoAcid::K), false);
        assert!(m.is_deletion);
        assert_eq!(m.control, "---");
        assert_eq!(m.codon, "");
        assert!(fs.is_none());
        assert_eq!(m.to_string(), "K7-");
    }

    #[test]
    fn exact_codon_matches() {
        let nas = read_nucleotides(b"ATG").unwrap();
        let (m, fs) = classify(&run(&nas, AminoAcid::M), false);
        assert!(m.is_match());
        assert_eq!(m.control, ":::");
        assert_eq!(m.na_position, 19);
        assert!(fs.is_none());
        assert_eq!(m.to_string(), "M7M:ATG");
    }

    #[test]
    fn ambiguous_codon_substitution() {
        let nas = read_nucleotides(b"ATN").unwrap();
        let (m, _) = classify(&run(&nas, AminoAcid::M), false);
        assert!(m.is_substitution);
        assert_eq!(m.control, "...");
        assert_eq!(m.amino_acids, "IM");
        assert_eq!(m.to_string(), "M7IM:ATN");
    }

    #[test]
    fn stop_codon_never_matches() {
        let nas = read_nucleotides(b"TAA").unwrap();
        let (m, _) = classify(&run(&nas, AminoAcid::Stop), false);
        assert!(m.is_substitution);
    }

    #[test]
    fn inserted_codons() {
        let nas = read_nucleotides(b"ATGGGGATN").unwrap();
        let (m, fs) = classify(&run(&nas, AminoAcid::M), false);
        assert!(m.is_insertion);
        assert!(!m.is_substitution);
        assert_eq!(m.control, ":::++++++");
        assert_eq!(m.inserted_codons, vec!["GGG", "ATN"]);
        assert_eq!(m.inserted_amino_acids, "G[IM]");
        assert!(fs.is_none());
        assert_eq!(m.to_string(), "M7M_G[IM]:ATG_GGGATN");
    }

    #[test]
    fn insertion_frameshift_carries_trailing_nucleotides() {
        let nas = read_nucleotides(b"ATGGGGAC").unwrap();
        let (m, fs) = classify(&run(&nas, AminoAcid::M), false);
        assert_eq!(m.control, ":::+++");
        let fs = fs.unwrap();
        assert!(fs.is_insertion());
        assert_eq!(fs.nucleotides, "AC");
        assert_eq!(fs.gap_length, 2);
        assert_eq!(fs.to_string(), "7ins2bp_AC");

        let nas = read_nucleotides(b"ATGC").unwrap();
        let (m, fs) = classify(&run(&nas, AminoAcid::M), false);
        assert!(!m.is_insertion);
        assert_eq!(m.control, ":::");
        assert_eq!(fs.unwrap().to_string(), "7ins1bp_C");
    }

    #[test]
    fn partial_codon() {
        let nas = read_nucleotides(b"AT").unwrap();
        let (m, fs) = classify(&run(&nas, AminoAcid::M), true);
        assert!(m.is_partial);
        assert!(!m.is_substitution);
        assert_eq!(m.control, "..-");
        assert_eq!(m.codon, "AT ");
        assert!(fs.is_none());
        assert_eq!(m.to_string(), "M7X:AT ");

        let (_, fs) = classify(&run(&nas, AminoAcid::M), false);
        let fs = fs.unwrap();
        assert!(fs.is_deletion());
        assert_eq!(fs.gap_length, 1);
        assert_eq!(fs.to_string(), "7del1bp");
    }

    #[test]
    fn partial_of_unknown_nucleotides() {
        let nas = read_nucleotides(b"N").unwrap();
        let (m, _) = classify(&run(&nas, AminoAcid::W), true);
        assert_eq!(m.control, ".--");
    }

    fn nucleotide_run() -> impl Strategy<Value = Vec<Nucleotide>> {
        prop::collection::vec(
            prop_oneof![
                Just(Nucleotide::A),
                Just(Nucleotide::C),
                Just(Nucleotide::G),
                Just(Nucleotide::T),
                Just(Nucleotide::R),
                Just(Nucleotide::N),
            ],
            0..13,
        )
    }

    proptest! {
        #[test]
        fn control_width_and_alphabet(nas in nucleotide_run(), at_edge in any::<bool>()) {
            let (m, _) = classify(&run(&nas, AminoAcid::L), at_edge);
            prop_assert_eq!(m.control.len(), control_width(&m));
            prop_assert!(m.control.chars().all(|c| matches!(c, ':' | '.' | '-' | '+')));
        }

        #[test]
        fn interior_frame_breaks_yield_one_frameshift(nas in nucleotide_run()) {
            prop_assume!(nas.len() % 3 != 0);
            let (_, fs) = classify(&run(&nas, AminoAcid::L), false);
            prop_assert!(fs.is_some());
        }

        #[test]
        fn whole_codons_never_frameshift(nas in nucleotide_run(), at_edge in any::<bool>()) {
            prop_assume!(nas.len() % 3 == 0);
            let (m, fs) = classify(&run(&nas, AminoAcid::L), at_edge);
            prop_assert!(fs.is_none());
            prop_assert_eq!(m.is_deletion, nas.is_empty());
        }
    }
}
