use std::fmt;
use std::ops::BitOr;
use std::ops::BitOrAssign;

/// The number of letters in the supported alphabet.
pub const ALPHABET_SIZE: usize = 26;

const ALL_LETTER_BITS: u32 = (1 << ALPHABET_SIZE) - 1;

/// A single letter from `a` to `z`, stored as its 1-based index in the alphabet.
///
/// Index `0` is reserved for [`Letter::NONE`], which stands in for any character that is not a
/// letter. Conversions are total: anything outside the alphabet becomes `NONE`.
///
/// ```
/// use letter_boxed_solver::Letter;
///
/// assert_eq!(Letter::from_char('c').index(), 3);
/// assert_eq!(Letter::from_char('C'), Letter::from_index(3));
/// assert_eq!(Letter::from_index(27), Letter::NONE);
/// assert_eq!(Letter::from_char('?').to_char(), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub struct Letter(u8);

impl Letter {
    /// The sentinel for an absent or invalid letter.
    pub const NONE: Letter = Letter(0);

    /// Returns the letter at the given 1-based index, or [`Letter::NONE`] if the index is not in
    /// `1..=26`.
    pub fn from_index(index: u8) -> Letter {
        if (1..=ALPHABET_SIZE as u8).contains(&index) {
            Letter(index)
        } else {
            Letter::NONE
        }
    }

    /// Converts an ASCII letter, in either case, to a `Letter`. Any other character becomes
    /// [`Letter::NONE`].
    pub fn from_char(letter: char) -> Letter {
        if letter.is_ascii_alphabetic() {
            Letter(letter.to_ascii_lowercase() as u8 - b'a' + 1)
        } else {
            Letter::NONE
        }
    }

    /// The 1-based index of this letter, or `0` for [`Letter::NONE`].
    pub fn index(self) -> u8 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The lower case character for this letter.
    pub fn to_char(self) -> Option<char> {
        if self.is_none() {
            return None;
        }
        Some((b'a' + self.0 - 1) as char)
    }

    /// This letter's bit in a [`LetterMask`]. `NONE` has no bit.
    pub fn bit(self) -> u32 {
        if self.is_none() {
            return 0;
        }
        1 << (self.0 - 1)
    }

    /// Iterates over every letter from `a` to `z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (1..=ALPHABET_SIZE as u8).map(Letter)
    }
}

impl From<u8> for Letter {
    fn from(index: u8) -> Letter {
        Letter::from_index(index)
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> u8 {
        letter.index()
    }
}

impl From<char> for Letter {
    fn from(letter: char) -> Letter {
        Letter::from_char(letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char().unwrap_or('?'))
    }
}

/// A set of letters packed into one bit per letter.
///
/// Used for the letters a word covers, the letters a chain has covered so far, and the full set
/// of letters on a board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LetterMask(u32);

impl LetterMask {
    pub const EMPTY: LetterMask = LetterMask(0);

    /// Builds a mask from raw bits. Bits above the 26th are dropped.
    pub fn from_bits(bits: u32) -> LetterMask {
        LetterMask(bits & ALL_LETTER_BITS)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns a copy of this mask that also contains `letter`.
    pub fn with(self, letter: Letter) -> LetterMask {
        LetterMask(self.0 | letter.bit())
    }

    pub fn union(self, other: LetterMask) -> LetterMask {
        LetterMask(self.0 | other.0)
    }

    /// The letters in this mask that are not in `other`.
    pub fn difference(self, other: LetterMask) -> LetterMask {
        LetterMask(self.0 & !other.0)
    }

    pub fn contains(self, letter: Letter) -> bool {
        !letter.is_none() && self.0 & letter.bit() != 0
    }

    /// Returns `true` iff every letter in `other` is also in this mask.
    pub fn contains_all(self, other: LetterMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the letters in this mask in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |letter| self.contains(*letter))
    }
}

impl FromIterator<Letter> for LetterMask {
    fn from_iter<I: IntoIterator<Item = Letter>>(letters: I) -> LetterMask {
        letters
            .into_iter()
            .fold(LetterMask::EMPTY, |mask, letter| mask.with(letter))
    }
}

impl BitOr for LetterMask {
    type Output = LetterMask;

    fn bitor(self, other: LetterMask) -> LetterMask {
        self.union(other)
    }
}

impl BitOrAssign for LetterMask {
    fn bitor_assign(&mut self, other: LetterMask) {
        self.0 |= other.0;
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
