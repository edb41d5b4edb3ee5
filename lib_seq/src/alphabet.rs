use std::{
    fmt::{Debug, Display, Formatter, Result},
    iter,
    sync::Arc,
};

use get_size2::GetSize;


/// A single sequence symbol, stored as its ASCII byte.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, GetSize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Letter(pub u8);

/// Maps every letter to its complement.
///
/// Letters without a registered pair map to themselves, so gaps and unknown symbols survive complementing unchanged.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ComplementTable {
    table: [Letter; 256],
}

/// The symbol system of a sequence.
///
/// Canonical letters are addressed by index, which allows counting letters in fixed-size arrays.
/// Lookups via [`Alphabet::index_of`] are expected to be case-insensitive.
pub trait Alphabet: Debug + Send + Sync {
    fn name(&self) -> &str;

    /// The number of canonical letters.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The canonical letter at `index`.
    fn letter(&self, index: usize) -> Letter;

    /// The index of the canonical letter equal to `letter`, or `None` if the letter is not canonical.
    fn index_of(&self, letter: Letter) -> Option<usize>;

    fn is_valid(&self, letter: Letter) -> bool {
        self.index_of(letter).is_some() || letter == self.gap() || letter == self.ambiguous()
    }

    /// The letter marking an absent symbol.
    fn gap(&self) -> Letter;

    /// The letter marking a symbol that cannot be determined.
    fn ambiguous(&self) -> Letter;

    /// The complement table of this alphabet, if its letters have complements.
    fn complement_table(&self) -> Option<&ComplementTable> {
        None
    }
}

/// A byte-based alphabet defined by a list of canonical letters.
#[derive(Debug, Clone)]
pub struct LetterAlphabet {
    name: &'static str,
    letters: &'static [u8],
    index: [Option<u8>; 256],
    gap: Letter,
    ambiguous: Letter,
    complement: Option<ComplementTable>,
}

const DNA_PAIRS: &[(u8, u8)] = &[
    (b'a', b't'),
    (b'c', b'g'),
    (b'r', b'y'),
    (b'k', b'm'),
    (b'b', b'v'),
    (b'd', b'h'),
    (b's', b's'),
    (b'w', b'w'),
    (b'n', b'n'),
];

impl Letter {
    pub fn from_bytes(bytes: &[u8]) -> Vec<Self> {
        bytes.iter().copied().map(Self).collect()
    }

    pub fn repeat(self, amount: usize) -> Vec<Self> {
        iter::repeat_n(self, amount).collect()
    }

    pub fn to_ascii_lowercase(self) -> Self {
        Self(self.0.to_ascii_lowercase())
    }

    pub fn to_ascii_uppercase(self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }

    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl From<u8> for Letter {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_char())
    }
}

impl ComplementTable {
    /// Creates a table from complement pairs.
    ///
    /// Each pair is registered in both directions and for both lower and upper case.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut table: [Letter; 256] = std::array::from_fn(|byte| Letter(byte as u8));

        for &(a, b) in pairs {
            for (a, b) in [
                (a.to_ascii_lowercase(), b.to_ascii_lowercase()),
                (a.to_ascii_uppercase(), b.to_ascii_uppercase()),
            ] {
                table[usize::from(a)] = Letter(b);
                table[usize::from(b)] = Letter(a);
            }
        }

        Self { table }
    }

    pub fn complement(&self, letter: Letter) -> Letter {
        self.table[usize::from(letter.0)]
    }
}

impl LetterAlphabet {
    pub fn new(
        name: &'static str,
        letters: &'static [u8],
        gap: u8,
        ambiguous: u8,
        complement: Option<ComplementTable>,
    ) -> Self {
        let mut index = [None; 256];
        for (position, &letter) in letters.iter().enumerate() {
            let position = u8::try_from(position).ok();
            index[usize::from(letter.to_ascii_lowercase())] = position;
            index[usize::from(letter.to_ascii_uppercase())] = position;
        }

        Self {
            name,
            letters,
            index,
            gap: Letter(gap),
            ambiguous: Letter(ambiguous),
            complement,
        }
    }

    /// Nucleotides `acgt` with gap `-`, ambiguity `n` and IUPAC complements.
    pub fn dna() -> Self {
        Self::new(
            "dna",
            b"acgt",
            b'-',
            b'n',
            Some(ComplementTable::from_pairs(DNA_PAIRS)),
        )
    }

    /// The twenty standard amino acids with gap `-` and ambiguity `x`.
    ///
    /// Proteins have no complement.
    pub fn protein() -> Self {
        Self::new("protein", b"acdefghiklmnpqrstvwy", b'-', b'x', None)
    }
}

impl Alphabet for LetterAlphabet {
    fn name(&self) -> &str {
        self.name
    }

    fn len(&self) -> usize {
        self.letters.len()
    }

    fn letter(&self, index: usize) -> Letter {
        Letter(self.letters[index])
    }

    fn index_of(&self, letter: Letter) -> Option<usize> {
        self.index[usize::from(letter.0)].map(usize::from)
    }

    fn gap(&self) -> Letter {
        self.gap
    }

    fn ambiguous(&self) -> Letter {
        self.ambiguous
    }

    fn complement_table(&self) -> Option<&ComplementTable> {
        self.complement.as_ref()
    }
}

/// A shared handle to the DNA alphabet.
pub fn dna() -> Arc<dyn Alphabet> {
    Arc::new(LetterAlphabet::dna())
}

/// A shared handle to the protein alphabet.
pub fn protein() -> Arc<dyn Alphabet> {
    Arc::new(LetterAlphabet::protein())
}
