use std::fmt;
use std::sync::LazyLock;

/// IUPAC nucleotide code. `U` is folded into `T` on input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    /// A or G
    R,
    /// C or T
    Y,
    /// G or C
    S,
    /// A or T
    W,
    /// G or T
    K,
    /// A or C
    M,
    /// not A
    B,
    /// not C
    D,
    /// not G
    H,
    /// not T
    V,
    N,
}

pub const NUCLEOTIDE_COUNT: usize = 15;

const SYMBOLS: &[u8; NUCLEOTIDE_COUNT] = b"ACGTRYSWKMBDHVN";

static NUCLEOTIDE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    for (i, &b) in SYMBOLS.iter().enumerate() {
        map[b as usize] = i as u8;
        map[b.to_ascii_lowercase() as usize] = i as u8;
    }
    map[b'U' as usize] = map[b'T' as usize];
    map[b'u' as usize] = map[b't' as usize];
    map
});

impl Nucleotide {
    pub const ALL: [Nucleotide; NUCLEOTIDE_COUNT] = [
        Nucleotide::A,
        Nucleotide::C,
        Nucleotide::G,
        Nucleotide::T,
        Nucleotide::R,
        Nucleotide::Y,
        Nucleotide::S,
        Nucleotide::W,
        Nucleotide::K,
        Nucleotide::M,
        Nucleotide::B,
        Nucleotide::D,
        Nucleotide::H,
        Nucleotide::V,
        Nucleotide::N,
    ];

    #[inline]
    pub fn from_byte(b: u8) -> Option<Self> {
        match NUCLEOTIDE_INDEX[b as usize] {
            255 => None,
            idx => Some(Self::ALL[idx as usize]),
        }
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        SYMBOLS[self as usize]
    }

    #[inline]
    pub fn code(self) -> usize {
        self as usize
    }

    /// The unambiguous bases this code stands for.
    pub fn resolve(self) -> &'static [Nucleotide] {
        use Nucleotide::*;
        match self {
            A => &[A],
            C => &[C],
            G => &[G],
            T => &[T],
            R => &[A, G],
            Y => &[C, T],
            S => &[C, G],
            W => &[A, T],
            K => &[G, T],
            M => &[A, C],
            B => &[C, G, T],
            D => &[A, G, T],
            H => &[A, C, T],
            V => &[A, C, G],
            N => &[A, C, G, T],
        }
    }

    #[inline]
    pub fn is_unambiguous(self) -> bool {
        (self as u8) < 4
    }

    #[inline]
    pub fn is_fully_ambiguous(self) -> bool {
        self == Nucleotide::N
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

pub fn nucleotides_to_string(nas: &[Nucleotide]) -> String {
    nas.iter().map(|na| na.as_byte() as char).collect()
}
