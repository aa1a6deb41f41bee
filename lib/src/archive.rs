use crate::board::SideLetters;
use crate::letters::*;
use crate::results::LetterBoxedError;
use rayon::prelude::*;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Words shorter than this are never playable.
pub const MIN_WORD_LENGTH: usize = 3;

/// Contains all the words that may be played, across any number of puzzles.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordArchive {
    words: Vec<Arc<str>>,
}

impl WordArchive {
    /// Constructs a new `WordArchive` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case, and blank lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, LetterBoxedError> {
        let words = word_reader
            .lines()
            .filter_map(|maybe_word| match maybe_word {
                Ok(word) => normalize(&word).map(Ok),
                Err(error) => Some(Err(LetterBoxedError::Io(error))),
            })
            .collect::<Result<Vec<Arc<str>>, LetterBoxedError>>()?;
        Ok(WordArchive { words })
    }

    /// Constructs a new `WordArchive` from the given words.
    ///
    /// Each word is trimmed and converted to lower case. Empty words are skipped. The caller is
    /// responsible for removing duplicates.
    pub fn from_iterator<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordArchive {
            words: words
                .into_iter()
                .filter_map(|word| normalize(word.as_ref()))
                .collect(),
        }
    }

    /// Returns the number of archived words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Filters the archive down to the words that can be played on the given board, indexed by
    /// their first letter.
    #[instrument(level = "debug", skip_all, fields(board = %board, words = self.words.len()))]
    pub fn candidates_for(&self, board: &SideLetters) -> CandidateIndex {
        let results: Vec<Result<CandidateWord, Rejection>> = self
            .words
            .iter()
            .map(|word| CandidateWord::check(word, board))
            .collect();
        collect_candidates(results)
    }

    /// Same as [`WordArchive::candidates_for`], but checks the words in parallel. The result is
    /// identical, including the order of the words.
    #[instrument(level = "debug", skip_all, fields(board = %board, words = self.words.len()))]
    pub fn par_candidates_for(&self, board: &SideLetters) -> CandidateIndex {
        let results: Vec<Result<CandidateWord, Rejection>> = self
            .words
            .par_iter()
            .map(|word| CandidateWord::check(word, board))
            .collect();
        collect_candidates(results)
    }
}

impl Deref for WordArchive {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

fn normalize(word: &str) -> Option<Arc<str>> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    Some(Arc::from(word.to_lowercase().as_str()))
}

/// Why a word could not be played on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    TooShort,
    OffBoard,
    SameSide,
}

#[derive(Debug, Default)]
struct FilterStats {
    too_short: usize,
    off_board: usize,
    same_side: usize,
}

fn collect_candidates(results: Vec<Result<CandidateWord, Rejection>>) -> CandidateIndex {
    let mut stats = FilterStats::default();
    let mut index = CandidateIndex::new();
    for result in results {
        match result {
            Ok(candidate) => index.insert(candidate),
            Err(Rejection::TooShort) => stats.too_short += 1,
            Err(Rejection::OffBoard) => stats.off_board += 1,
            Err(Rejection::SameSide) => stats.same_side += 1,
        }
    }
    debug!(
        candidates = index.len(),
        too_short = stats.too_short,
        off_board = stats.off_board,
        same_side = stats.same_side,
        "filtered word archive"
    );
    index
}

/// A word that can be played on a specific board: at least three letters long, using only letters
/// on the board, and never using two letters from the same side in a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateWord {
    word: Arc<str>,
    letters: Box<[Letter]>,
    coverage: LetterMask,
}

impl CandidateWord {
    /// Returns the candidate for `word` if it can be played on `board`, or `None` otherwise.
    ///
    /// ```
    /// use letter_boxed_solver::SideLetters;
    /// use letter_boxed_solver::details::CandidateWord;
    ///
    /// let board = SideLetters::new(&["abc", "def", "ghi", "jkl"]).unwrap();
    ///
    /// assert!(CandidateWord::new("Leg", &board).is_some());
    /// // 'a' and 'b' share a side.
    /// assert!(CandidateWord::new("dab", &board).is_none());
    /// ```
    pub fn new(word: &str, board: &SideLetters) -> Option<CandidateWord> {
        CandidateWord::check(word, board).ok()
    }

    fn check(word: &str, board: &SideLetters) -> Result<CandidateWord, Rejection> {
        let normalized = word.trim().to_lowercase();
        let letters: Vec<Letter> = normalized.chars().map(Letter::from_char).collect();
        if letters.len() < MIN_WORD_LENGTH {
            trace!(word = %normalized, "too short");
            return Err(Rejection::TooShort);
        }
        let mut coverage = LetterMask::EMPTY;
        let mut previous_side = None;
        for letter in &letters {
            let side = board.side_of(*letter).map_err(|_| {
                trace!(word = %normalized, "uses a letter that is not on the board");
                Rejection::OffBoard
            })?;
            if previous_side == Some(side) {
                trace!(word = %normalized, side, "uses the same side twice in a row");
                return Err(Rejection::SameSide);
            }
            previous_side = Some(side);
            coverage = coverage.with(*letter);
        }
        Ok(CandidateWord {
            word: Arc::from(normalized.as_str()),
            letters: letters.into_boxed_slice(),
            coverage,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.word
    }

    pub fn word(&self) -> &Arc<str> {
        &self.word
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The set of distinct letters in this word.
    pub fn coverage(&self) -> LetterMask {
        self.coverage
    }

    pub fn first_letter(&self) -> Letter {
        self.letters.first().copied().unwrap_or(Letter::NONE)
    }

    pub fn last_letter(&self) -> Letter {
        self.letters.last().copied().unwrap_or(Letter::NONE)
    }

    /// The number of letters in this word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns `true` iff this word can be played on the given board.
    pub fn is_valid_for(&self, board: &SideLetters) -> bool {
        self.len() >= MIN_WORD_LENGTH
            && self
                .letters
                .iter()
                .map(|letter| board.side_of(*letter).ok())
                .try_fold(None, |previous, side| match side {
                    Some(side) if previous != Some(side) => Some(Some(side)),
                    _ => None,
                })
                .is_some()
    }
}

/// The candidate words for one board, grouped by their first letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIndex {
    all: Vec<Arc<CandidateWord>>,
    by_first_letter: Vec<Vec<Arc<CandidateWord>>>,
    coverage: LetterMask,
}

impl CandidateIndex {
    /// Creates an index with an empty list for every letter.
    pub fn new() -> CandidateIndex {
        CandidateIndex {
            all: Vec::new(),
            by_first_letter: vec![Vec::new(); ALPHABET_SIZE],
            coverage: LetterMask::EMPTY,
        }
    }

    /// Builds an index from candidates that were already checked against the same board.
    pub fn from_candidates<I>(candidates: I) -> CandidateIndex
    where
        I: IntoIterator<Item = CandidateWord>,
    {
        let mut index = CandidateIndex::new();
        for candidate in candidates {
            index.insert(candidate);
        }
        index
    }

    fn insert(&mut self, candidate: CandidateWord) {
        let first_letter = candidate.first_letter();
        if first_letter.is_none() {
            return;
        }
        self.coverage |= candidate.coverage();
        let candidate = Arc::new(candidate);
        self.by_first_letter[first_letter.index() as usize - 1].push(Arc::clone(&candidate));
        self.all.push(candidate);
    }

    /// The candidates that start with the given letter. Empty for [`Letter::NONE`].
    pub fn starting_with(&self, letter: Letter) -> &[Arc<CandidateWord>] {
        if letter.is_none() {
            return &[];
        }
        &self.by_first_letter[letter.index() as usize - 1]
    }

    /// Every candidate, in archive order.
    pub fn all(&self) -> &[Arc<CandidateWord>] {
        &self.all
    }

    /// Iterates over each letter and the candidates that start with it.
    pub fn iter_by_letter(&self) -> impl Iterator<Item = (Letter, &[Arc<CandidateWord>])> {
        Letter::all().zip(self.by_first_letter.iter().map(Vec::as_slice))
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// The union of the letters used by all candidates.
    pub fn coverage(&self) -> LetterMask {
        self.coverage
    }
}

impl Default for CandidateIndex {
    fn default() -> Self {
        CandidateIndex::new()
    }
}
