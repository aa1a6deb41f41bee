use crate::chain::*;
use crate::letters::*;
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Indicates that an error occurred while setting up or solving a puzzle.
#[derive(Debug, Error)]
pub enum LetterBoxedError {
    /// The box, or the solver's configuration, is malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The given letter is not one of the twelve letters on the box.
    #[error("letter '{0}' is not on the board")]
    LetterNotOnBoard(Letter),
    /// A word was appended to a chain that ends with a different letter than the word starts with.
    #[error("a word starting with '{found}' cannot follow a chain ending with '{expected}'")]
    ChainBreak { expected: Letter, found: Letter },
    /// No chain of at most `max_words` words covers every letter on the box.
    #[error("no chain of at most {max_words} words uses every letter on the board")]
    NoSolutionFound { max_words: usize },
    /// None of the archived words can be played on the box.
    #[error("no archived word can be played on this board")]
    EmptyCandidateSet,
    #[error("failed to read words: {0}")]
    Io(#[from] std::io::Error),
    /// A produced solution failed its consistency check.
    #[error("internal solver error: {0}")]
    Internal(String),
}

/// A chain of words found by the solver, along with summary information about it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleSolution {
    links: Vec<WordLink>,
    coverage: LetterMask,
    is_complete: bool,
    letter_count: usize,
}

impl PuzzleSolution {
    /// Materializes the given chain from the arena. `target` is the set of letters on the box.
    pub fn from_chain(arena: &ChainArena, chain: &WordChain, target: LetterMask) -> PuzzleSolution {
        PuzzleSolution {
            links: arena.links(chain).into_iter().cloned().collect(),
            coverage: chain.coverage(),
            is_complete: chain.coverage().contains_all(target),
            letter_count: chain.letter_count(),
        }
    }

    /// The words in this solution, in play order.
    pub fn words(&self) -> Vec<&str> {
        self.links.iter().map(|link| link.word().as_str()).collect()
    }

    pub fn links(&self) -> &[WordLink] {
        &self.links
    }

    pub fn word_count(&self) -> usize {
        self.links.len()
    }

    /// The total number of letters across all words, counting repeats.
    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    pub fn coverage(&self) -> LetterMask {
        self.coverage
    }

    /// Whether this solution uses every letter on the box.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Orders solutions from best to worst: fewer words, then fewer letters, then the
    /// alphabetically first word sequence.
    pub fn rank(&self, other: &PuzzleSolution) -> Ordering {
        self.word_count()
            .cmp(&other.word_count())
            .then(self.letter_count.cmp(&other.letter_count))
            .then_with(|| self.words().cmp(&other.words()))
    }
}

impl fmt::Display for PuzzleSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words().join(" - "))
    }
}
