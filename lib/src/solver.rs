use crate::archive::*;
use crate::board::SideLetters;
use crate::chain::*;
use crate::letters::*;
use crate::results::*;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// The default limit on the number of words in a solution.
pub const DEFAULT_MAX_WORDS: usize = 5;

/// Controls how a [`PuzzleSolver`] searches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// The search gives up once chains would need more than this many words.
    pub max_words: usize,
    /// Whether to use multiple threads to filter words and expand each search layer. Results are
    /// the same either way.
    pub parallel: bool,
    /// The most solutions [`PuzzleSolver::solve_all`] returns. `None` returns every minimal
    /// solution.
    pub max_solutions: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_words: DEFAULT_MAX_WORDS,
            parallel: false,
            max_solutions: None,
        }
    }
}

/// Builds a validated [`SolverConfig`].
///
/// ```
/// use letter_boxed_solver::SolverConfigBuilder;
///
/// let config = SolverConfigBuilder::new().max_words(3).parallel(true).build().unwrap();
///
/// assert_eq!(config.max_words, 3);
/// assert!(SolverConfigBuilder::new().max_words(0).build().is_err());
/// ```
#[derive(Debug, Default)]
pub struct SolverConfigBuilder {
    max_words: Option<usize>,
    parallel: bool,
    max_solutions: Option<usize>,
}

impl SolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_words(mut self, max_words: usize) -> Self {
        self.max_words = Some(max_words);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = Some(max_solutions);
        self
    }

    pub fn build(self) -> Result<SolverConfig, LetterBoxedError> {
        let max_words = self.max_words.unwrap_or(DEFAULT_MAX_WORDS);
        if max_words == 0 {
            return Err(LetterBoxedError::InvalidConfiguration(
                "max_words must be at least 1".to_string(),
            ));
        }
        if self.max_solutions == Some(0) {
            return Err(LetterBoxedError::InvalidConfiguration(
                "max_solutions must be at least 1".to_string(),
            ));
        }
        Ok(SolverConfig {
            max_words,
            parallel: self.parallel,
            max_solutions: self.max_solutions,
        })
    }
}

/// Finds the chains with the fewest words that use every letter on a board.
///
/// The solver filters the archive once on construction, then runs a breadth-first search over
/// `(end letter, covered letters)` states, one word per layer. The first layer that covers the
/// board holds every minimal solution.
///
/// ```
/// use letter_boxed_solver::*;
///
/// let board = SideLetters::new(&["abc", "def", "ghi", "jkl"]).unwrap();
/// let archive = WordArchive::from_iterator(["adgjbehk", "kcfil", "hal", "lag"]);
/// let solver = PuzzleSolver::new(board, &archive);
///
/// let solution = solver.solve().unwrap();
///
/// assert_eq!(solution.words(), vec!["adgjbehk", "kcfil"]);
/// assert!(solution.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleSolver {
    board: SideLetters,
    candidates: CandidateIndex,
    config: SolverConfig,
}

/// What the search keeps for each state in a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keep {
    /// Only the best chain, by letter count and then alphabetically.
    Best,
    /// Every chain.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SearchState {
    end_letter: Letter,
    coverage: LetterMask,
}

#[derive(Debug)]
struct LayerEntry {
    state: SearchState,
    chains: Vec<WordChain>,
}

/// Appending `word` to every chain in layer entry `parent` reaches `state`.
struct Transition<'a> {
    parent: usize,
    word: &'a Arc<CandidateWord>,
    state: SearchState,
}

/// A chain that has not been written to the arena yet.
#[derive(Clone, Copy)]
struct PendingChain<'a> {
    parent: WordChain,
    word: &'a Arc<CandidateWord>,
}

impl<'a> PendingChain<'a> {
    fn letter_count(&self) -> usize {
        self.parent.letter_count() + self.word.len()
    }

    fn cmp_rank(&self, other: &PendingChain, arena: &ChainArena) -> Ordering {
        self.letter_count()
            .cmp(&other.letter_count())
            .then_with(|| arena.cmp_words(&self.parent, &other.parent))
            .then_with(|| self.word.as_str().cmp(other.word.as_str()))
    }
}

impl PuzzleSolver {
    /// Constructs a solver for `board` using the default [`SolverConfig`].
    pub fn new(board: SideLetters, archive: &WordArchive) -> PuzzleSolver {
        PuzzleSolver::with_config(board, archive, SolverConfig::default())
    }

    pub fn with_config(
        board: SideLetters,
        archive: &WordArchive,
        config: SolverConfig,
    ) -> PuzzleSolver {
        let candidates = if config.parallel {
            archive.par_candidates_for(&board)
        } else {
            archive.candidates_for(&board)
        };
        PuzzleSolver::from_candidates(board, candidates, config)
    }

    /// Constructs a solver from candidates that were already filtered for `board`.
    pub fn from_candidates(
        board: SideLetters,
        candidates: CandidateIndex,
        config: SolverConfig,
    ) -> PuzzleSolver {
        PuzzleSolver {
            board,
            candidates,
            config,
        }
    }

    pub fn board(&self) -> &SideLetters {
        &self.board
    }

    pub fn candidates(&self) -> &CandidateIndex {
        &self.candidates
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the best solution with the fewest words. Ties go to the solution with fewer
    /// letters, then to the alphabetically first sequence of words.
    #[instrument(level = "debug", skip_all, fields(board = %self.board))]
    pub fn solve(&self) -> Result<PuzzleSolution, LetterBoxedError> {
        let solution = self
            .search(Keep::Best)?
            .into_iter()
            .next()
            .ok_or(LetterBoxedError::NoSolutionFound {
                max_words: self.config.max_words,
            })?;
        info!(solution = %solution, "solved puzzle");
        Ok(solution)
    }

    /// Returns every solution with the fewest words, best first, up to
    /// [`SolverConfig::max_solutions`].
    #[instrument(level = "debug", skip_all, fields(board = %self.board))]
    pub fn solve_all(&self) -> Result<Vec<PuzzleSolution>, LetterBoxedError> {
        let solutions = self.search(Keep::All)?;
        info!(count = solutions.len(), "solved puzzle");
        Ok(solutions)
    }

    fn search(&self, keep: Keep) -> Result<Vec<PuzzleSolution>, LetterBoxedError> {
        if self.candidates.is_empty() {
            return Err(LetterBoxedError::EmptyCandidateSet);
        }
        let target = self.board.letters();
        let no_solution = LetterBoxedError::NoSolutionFound {
            max_words: self.config.max_words,
        };
        let unreachable = target.difference(self.candidates.coverage());
        if !unreachable.is_empty() {
            debug!(letters = %unreachable, "some letters are not in any candidate word");
            return Err(no_solution);
        }

        let mut arena = ChainArena::new();
        let mut visited: HashSet<SearchState> = HashSet::new();
        let mut layer = vec![LayerEntry {
            state: SearchState {
                end_letter: Letter::NONE,
                coverage: LetterMask::EMPTY,
            },
            chains: vec![WordChain::empty()],
        }];
        for depth in 1..=self.config.max_words {
            let transitions = self.expand(&layer, &visited);
            layer = merge(&mut arena, &layer, transitions, keep)?;
            debug!(depth, states = layer.len(), chains = arena.len(), "expanded layer");
            if layer.is_empty() {
                break;
            }
            let complete: Vec<WordChain> = layer
                .iter()
                .filter(|entry| entry.state.coverage.contains_all(target))
                .flat_map(|entry| entry.chains.iter().copied())
                .collect();
            if !complete.is_empty() {
                return self.finish(&arena, &complete, keep);
            }
            visited.extend(layer.iter().map(|entry| entry.state));
        }
        Err(no_solution)
    }

    /// Lists every transition out of the layer that reaches a state not seen in an earlier layer.
    fn expand<'a>(
        &'a self,
        layer: &[LayerEntry],
        visited: &HashSet<SearchState>,
    ) -> Vec<Transition<'a>> {
        if self.config.parallel {
            layer
                .par_iter()
                .enumerate()
                .flat_map_iter(|(parent, entry)| self.expand_entry(parent, entry, visited))
                .collect()
        } else {
            layer
                .iter()
                .enumerate()
                .flat_map(|(parent, entry)| self.expand_entry(parent, entry, visited))
                .collect()
        }
    }

    fn expand_entry<'a>(
        &'a self,
        parent: usize,
        entry: &LayerEntry,
        visited: &HashSet<SearchState>,
    ) -> Vec<Transition<'a>> {
        let next_words = if entry.state.end_letter.is_none() {
            self.candidates.all()
        } else {
            self.candidates.starting_with(entry.state.end_letter)
        };
        next_words
            .iter()
            .filter_map(|word| {
                let state = SearchState {
                    end_letter: word.last_letter(),
                    coverage: entry.state.coverage | word.coverage(),
                };
                if visited.contains(&state) {
                    return None;
                }
                Some(Transition {
                    parent,
                    word,
                    state,
                })
            })
            .collect()
    }

    fn finish(
        &self,
        arena: &ChainArena,
        complete: &[WordChain],
        keep: Keep,
    ) -> Result<Vec<PuzzleSolution>, LetterBoxedError> {
        let target = self.board.letters();
        let mut solutions: Vec<PuzzleSolution> = complete
            .iter()
            .map(|chain| PuzzleSolution::from_chain(arena, chain, target))
            .collect();
        if let Some(incomplete) = solutions.iter().find(|solution| !solution.is_complete()) {
            return Err(LetterBoxedError::Internal(format!(
                "solution \"{}\" does not cover {}",
                incomplete,
                target.difference(incomplete.coverage())
            )));
        }
        solutions.sort_by(PuzzleSolution::rank);
        match keep {
            Keep::Best => solutions.truncate(1),
            Keep::All => {
                if let Some(max_solutions) = self.config.max_solutions {
                    solutions.truncate(max_solutions);
                }
            }
        }
        Ok(solutions)
    }
}

/// Folds the transitions into the next layer. Runs on one thread, so each state is written once.
fn merge(
    arena: &mut ChainArena,
    layer: &[LayerEntry],
    transitions: Vec<Transition>,
    keep: Keep,
) -> Result<Vec<LayerEntry>, LetterBoxedError> {
    let mut positions: HashMap<SearchState, usize> = HashMap::new();
    let mut pending: Vec<(SearchState, Vec<PendingChain>)> = Vec::new();
    for transition in transitions {
        for parent in &layer[transition.parent].chains {
            let chain = PendingChain {
                parent: *parent,
                word: transition.word,
            };
            match positions.entry(transition.state) {
                Entry::Vacant(vacant) => {
                    vacant.insert(pending.len());
                    pending.push((transition.state, vec![chain]));
                }
                Entry::Occupied(occupied) => {
                    let chains = &mut pending[*occupied.get()].1;
                    match keep {
                        Keep::All => chains.push(chain),
                        Keep::Best => {
                            if chain.cmp_rank(&chains[0], arena) == Ordering::Less {
                                chains[0] = chain;
                            }
                        }
                    }
                }
            }
        }
    }
    pending
        .into_iter()
        .map(|(state, chains)| {
            let chains = chains
                .into_iter()
                .map(|chain| arena.extend(&chain.parent, chain.word))
                .collect::<Result<Vec<WordChain>, LetterBoxedError>>()?;
            Ok(LayerEntry { state, chains })
        })
        .collect()
}

/// Solves the puzzle on `board` with the default configuration.
pub fn solve_puzzle(
    board: &SideLetters,
    archive: &WordArchive,
) -> Result<PuzzleSolution, LetterBoxedError> {
    PuzzleSolver::new(board.clone(), archive).solve()
}
