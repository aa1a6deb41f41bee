#[macro_use]
extern crate assert_matches;

use letter_boxed_solver::*;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::result::Result;

const REAL_WORDS: &[&str] = &[
    "blacksmith", "hue", "math", "bath", "stake", "lime", "sale", "table", "cable", "stem", "muse",
    "mile", "slime", "chime", "itself", "miles", "blame", "tube", "cube", "halt", "mute", "lathe",
    "mice", "bike", "hike", "like", "time", "sketch", "black", "smith", "thumb", "those", "himself",
    "bush", "lush", "mist", "mule",
];

fn abc_board() -> SideLetters {
    SideLetters::new(&["abc", "def", "ghi", "jkl"]).unwrap()
}

fn solver_with(words: &[&str], config: SolverConfig) -> PuzzleSolver {
    PuzzleSolver::with_config(abc_board(), &WordArchive::from_iterator(words), config)
}

fn solver(words: &[&str]) -> PuzzleSolver {
    solver_with(words, SolverConfig::default())
}

#[test]
fn solve_finds_only_two_word_chain() -> Result<(), LetterBoxedError> {
    let solution = solver(&["adgjbehk", "kcfil", "hal", "lag"]).solve()?;

    assert_eq!(solution.words(), vec!["adgjbehk", "kcfil"]);
    assert_eq!(solution.word_count(), 2);
    assert_eq!(solution.letter_count(), 13);
    assert!(solution.is_complete());
    assert_eq!(solution.coverage(), abc_board().letters());
    Ok(())
}

#[test]
fn solve_all_finds_only_two_word_chain() -> Result<(), LetterBoxedError> {
    let solutions = solver(&["adgjbehk", "kcfil", "hal", "lag"]).solve_all()?;

    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].words(), vec!["adgjbehk", "kcfil"]);
    Ok(())
}

#[test]
fn solve_real_words() -> Result<(), LetterBoxedError> {
    let board: SideLetters = "abe-chi-klm-stu".parse()?;
    let archive = WordArchive::from_iterator(REAL_WORDS);

    let solution = PuzzleSolver::new(board, &archive).solve()?;

    assert_eq!(solution.to_string(), "blacksmith - hue");
    Ok(())
}

#[test]
fn solve_returns_fewest_words() -> Result<(), LetterBoxedError> {
    // A four word chain also exists: adgj - jbe - ehk - kcfil.
    let solver = solver(&["adgj", "jbeh", "hkcfil", "jbe", "ehk", "kcfil"]);

    let solution = solver.solve()?;

    assert_eq!(solution.words(), vec!["adgj", "jbeh", "hkcfil"]);
    assert_eq!(solution.word_count(), 3);
    Ok(())
}

#[test]
fn solve_links_words_end_to_start() -> Result<(), LetterBoxedError> {
    let solution = solver(&["adgj", "jbeh", "hkcfil", "jbe", "ehk", "kcfil"]).solve()?;

    for pair in solution.links().windows(2) {
        assert_eq!(pair[0].end_letter(), pair[1].start_letter());
    }
    let added = solution
        .links()
        .iter()
        .fold(LetterMask::EMPTY, |mask, link| mask | link.added_coverage());
    assert_eq!(added, solution.coverage());
    Ok(())
}

#[test]
fn solve_respects_max_words() {
    let config = SolverConfigBuilder::new().max_words(2).build().unwrap();
    let solver = solver_with(&["adgj", "jbeh", "hkcfil", "jbe", "ehk", "kcfil"], config);

    assert_matches!(
        solver.solve(),
        Err(LetterBoxedError::NoSolutionFound { max_words: 2 })
    );
}

#[test]
fn solve_prefers_fewer_letters_then_alphabetical() -> Result<(), LetterBoxedError> {
    let solution = solver(&["bdgjaehk", "adgjbehk", "kcfilc", "kcfil"]).solve()?;

    assert_eq!(solution.words(), vec!["adgjbehk", "kcfil"]);
    Ok(())
}

#[test]
fn solve_all_orders_minimal_solutions() -> Result<(), LetterBoxedError> {
    let solutions = solver(&["bdgjaehk", "adgjbehk", "kcfilc", "kcfil"]).solve_all()?;

    let words: Vec<Vec<&str>> = solutions.iter().map(PuzzleSolution::words).collect();
    assert_eq!(
        words,
        vec![
            vec!["adgjbehk", "kcfil"],
            vec!["bdgjaehk", "kcfil"],
            vec!["adgjbehk", "kcfilc"],
            vec!["bdgjaehk", "kcfilc"],
        ]
    );
    assert!(solutions.iter().all(PuzzleSolution::is_complete));
    Ok(())
}

#[test]
fn solve_all_respects_max_solutions() -> Result<(), LetterBoxedError> {
    let config = SolverConfigBuilder::new().max_solutions(2).build()?;

    let solutions = solver_with(&["bdgjaehk", "adgjbehk", "kcfilc", "kcfil"], config).solve_all()?;

    assert_eq!(solutions.len(), 2);
    assert_eq!(solutions[1].words(), vec!["bdgjaehk", "kcfil"]);
    Ok(())
}

#[test]
fn solve_all_never_longer_than_minimum() -> Result<(), LetterBoxedError> {
    let solutions =
        solver(&["adgj", "jbe", "ehk", "kcfil", "jbeh", "hkcfil", "hkcfilc"]).solve_all()?;

    assert_eq!(solutions.len(), 2);
    assert!(solutions.iter().all(|solution| solution.word_count() == 3));
    assert_eq!(solutions[0].words(), vec!["adgj", "jbeh", "hkcfil"]);
    assert_eq!(solutions[1].words(), vec!["adgj", "jbeh", "hkcfilc"]);
    Ok(())
}

#[test]
fn solve_dead_end_has_no_solution() {
    // "adgjbehkcfi" covers all but 'l', but nothing starts with 'i'. "lad" leads nowhere.
    let solver = solver(&["adgjbehkcfi", "lad"]);

    assert_matches!(
        solver.solve(),
        Err(LetterBoxedError::NoSolutionFound { max_words: DEFAULT_MAX_WORDS })
    );
    assert_matches!(
        solver.solve_all(),
        Err(LetterBoxedError::NoSolutionFound { .. })
    );
}

#[test]
fn solve_unused_letter_has_no_solution() {
    let solver = solver(&["adgjbehk", "kcfi"]);

    assert_matches!(
        solver.solve(),
        Err(LetterBoxedError::NoSolutionFound { .. })
    );
}

#[test]
fn solve_empty_candidate_set() {
    // Every word breaks a rule of the board.
    let solver = solver(&["ab", "bad", "zoo"]);

    assert!(solver.candidates().is_empty());
    assert_matches!(solver.solve(), Err(LetterBoxedError::EmptyCandidateSet));
}

#[test]
fn solve_is_deterministic() -> Result<(), LetterBoxedError> {
    let board: SideLetters = "abe-chi-klm-stu".parse()?;
    let expected = PuzzleSolver::new(board.clone(), &WordArchive::from_iterator(REAL_WORDS))
        .solve_all()?;

    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..5 {
        let mut words = REAL_WORDS.to_vec();
        words.shuffle(&mut rng);
        let solver = PuzzleSolver::new(board.clone(), &WordArchive::from_iterator(&words));

        assert_eq!(solver.solve_all()?, expected);
        assert_eq!(solver.solve()?, expected[0]);
    }
    Ok(())
}

#[test]
fn parallel_solve_matches_sequential() -> Result<(), LetterBoxedError> {
    let words = ["bdgjaehk", "adgjbehk", "kcfilc", "kcfil", "hal", "lag", "jbe", "ehk"];
    let parallel = SolverConfigBuilder::new().parallel(true).build()?;

    let sequential_solver = solver(&words);
    let parallel_solver = solver_with(&words, parallel);

    assert_eq!(parallel_solver.candidates(), sequential_solver.candidates());
    assert_eq!(parallel_solver.solve_all()?, sequential_solver.solve_all()?);
    assert_eq!(parallel_solver.solve()?, sequential_solver.solve()?);
    Ok(())
}

#[test]
fn solve_puzzle_uses_defaults() -> Result<(), LetterBoxedError> {
    let archive = WordArchive::from_iterator(["adgjbehk", "kcfil"]);

    let solution = solve_puzzle(&abc_board(), &archive)?;

    assert_eq!(solution.to_string(), "adgjbehk - kcfil");
    Ok(())
}

#[test]
fn solver_config_builder_validates() {
    assert_matches!(
        SolverConfigBuilder::new().max_words(0).build(),
        Err(LetterBoxedError::InvalidConfiguration(_))
    );
    assert_matches!(
        SolverConfigBuilder::new().max_solutions(0).build(),
        Err(LetterBoxedError::InvalidConfiguration(_))
    );
    assert_matches!(
        SolverConfigBuilder::new().build(),
        Ok(SolverConfig {
            max_words: DEFAULT_MAX_WORDS,
            parallel: false,
            max_solutions: None,
        })
    );
}
