#![cfg_attr(feature = "unstable", feature(test))]

//! This crate solves [Letter Boxed](https://www.nytimes.com/puzzles/letter-boxed) puzzles.
//!
//! A puzzle is a box with three letters on each of its four sides. Words are built from the box's
//! letters, but consecutive letters in a word must come from different sides. Each word must start
//! with the last letter of the previous word, and the puzzle is solved once every letter on the
//! box has been used.
//!
//! [`PuzzleSolver`] finds the solutions that use the fewest words.
//!
//! ```
//! use letter_boxed_solver::*;
//!
//! let board: SideLetters = "abc-def-ghi-jkl".parse()?;
//! let archive = WordArchive::from_iterator(["adgj", "jbeh", "hkcfil", "jbe", "ehk", "kcfil"]);
//!
//! let solution = PuzzleSolver::new(board, &archive).solve()?;
//!
//! assert_eq!(solution.to_string(), "adgj - jbeh - hkcfil");
//! assert_eq!(solution.word_count(), 3);
//! # Ok::<(), LetterBoxedError>(())
//! ```
//!
//! Enable the `serde` feature to serialize boards, configurations, and solutions.

mod archive;
mod board;
mod chain;
mod letters;
mod results;
mod solver;

pub use archive::WordArchive;
pub use board::*;
pub use letters::*;
pub use results::*;
pub use solver::*;

/// Lower-level building blocks used by the solver. Useful for building custom searches.
pub mod details {
    pub use crate::archive::CandidateIndex;
    pub use crate::archive::CandidateWord;
    pub use crate::archive::MIN_WORD_LENGTH;
    pub use crate::chain::*;
}
