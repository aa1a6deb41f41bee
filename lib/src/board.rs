use crate::letters::*;
use crate::results::LetterBoxedError;
use std::fmt;
use std::result::Result;
use std::str::FromStr;

/// The number of sides on the box.
pub const NUM_SIDES: usize = 4;
/// The number of letters on each side of the box.
pub const LETTERS_PER_SIDE: usize = 3;

/// The letters on the four sides of a Letter Boxed puzzle.
///
/// Every side holds exactly three letters, and no letter appears twice anywhere on the box. Once
/// constructed, [`SideLetters::side_of`] is defined for exactly the twelve letters on the box.
///
/// ```
/// use letter_boxed_solver::Letter;
/// use letter_boxed_solver::SideLetters;
///
/// let board: SideLetters = "abc-def-ghi-jkl".parse().unwrap();
///
/// assert_eq!(board.side_of(Letter::from_char('e')).unwrap(), 1);
/// assert!(board.side_of(Letter::from_char('z')).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct SideLetters {
    sides: [[Letter; LETTERS_PER_SIDE]; NUM_SIDES],
    side_by_letter: [Option<u8>; ALPHABET_SIZE + 1],
    letters: LetterMask,
}

impl SideLetters {
    /// Constructs the box from four groups of three letters. Letters are case-insensitive.
    ///
    /// Fails with [`LetterBoxedError::InvalidConfiguration`] if there are not four groups, a group
    /// does not hold exactly three letters, a character is not a letter from `a` to `z`, or a
    /// letter appears more than once on the box.
    pub fn new<S>(sides: &[S]) -> Result<SideLetters, LetterBoxedError>
    where
        S: AsRef<str>,
    {
        if sides.len() != NUM_SIDES {
            return Err(LetterBoxedError::InvalidConfiguration(format!(
                "expected {} sides but found {}",
                NUM_SIDES,
                sides.len()
            )));
        }
        let mut board = SideLetters {
            sides: [[Letter::NONE; LETTERS_PER_SIDE]; NUM_SIDES],
            side_by_letter: [None; ALPHABET_SIZE + 1],
            letters: LetterMask::EMPTY,
        };
        for (side_id, side) in sides.iter().enumerate() {
            let side = side.as_ref().trim();
            let num_letters = side.chars().count();
            if num_letters != LETTERS_PER_SIDE {
                return Err(LetterBoxedError::InvalidConfiguration(format!(
                    "side {} (\"{}\") must have {} letters but has {}",
                    side_id, side, LETTERS_PER_SIDE, num_letters
                )));
            }
            for (position, character) in side.chars().enumerate() {
                let letter = Letter::from_char(character);
                if letter.is_none() {
                    return Err(LetterBoxedError::InvalidConfiguration(format!(
                        "'{}' on side {} is not a letter from a to z",
                        character, side_id
                    )));
                }
                if board.letters.contains(letter) {
                    return Err(LetterBoxedError::InvalidConfiguration(format!(
                        "letter '{}' appears more than once on the box",
                        letter
                    )));
                }
                board.sides[side_id][position] = letter;
                board.side_by_letter[letter.index() as usize] = Some(side_id as u8);
                board.letters = board.letters.with(letter);
            }
        }
        Ok(board)
    }

    /// Returns the side (`0..4`) holding the given letter.
    pub fn side_of(&self, letter: Letter) -> Result<usize, LetterBoxedError> {
        self.side_by_letter[letter.index() as usize]
            .map(usize::from)
            .ok_or(LetterBoxedError::LetterNotOnBoard(letter))
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(letter)
    }

    /// All twelve letters on the box. A chain of words solves the puzzle once its coverage
    /// contains this mask.
    pub fn letters(&self) -> LetterMask {
        self.letters
    }

    pub fn sides(&self) -> &[[Letter; LETTERS_PER_SIDE]; NUM_SIDES] {
        &self.sides
    }
}

/// Parses a box written as four groups separated by `-`, `,` or whitespace, e.g.
/// `"abc-def-ghi-jkl"`.
impl FromStr for SideLetters {
    type Err = LetterBoxedError;

    fn from_str(text: &str) -> Result<SideLetters, LetterBoxedError> {
        let sides: Vec<&str> = text
            .split(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .filter(|side| !side.is_empty())
            .collect();
        SideLetters::new(&sides)
    }
}

impl TryFrom<Vec<String>> for SideLetters {
    type Error = LetterBoxedError;

    fn try_from(sides: Vec<String>) -> Result<SideLetters, LetterBoxedError> {
        SideLetters::new(&sides)
    }
}

impl From<SideLetters> for Vec<String> {
    fn from(board: SideLetters) -> Vec<String> {
        board
            .sides
            .iter()
            .map(|side| side.iter().map(ToString::to_string).collect())
            .collect()
    }
}

impl fmt::Display for SideLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (side_id, side) in self.sides.iter().enumerate() {
            if side_id > 0 {
                write!(f, "-")?;
            }
            for letter in side {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}
