#[macro_use]
extern crate assert_matches;

use letter_boxed_solver::details::*;
use letter_boxed_solver::*;

use std::io::Cursor;
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

fn board() -> SideLetters {
    SideLetters::new(&["rme", "wcl", "tgk", "api"]).unwrap()
}

fn words_starting_with(index: &CandidateIndex, letter: char) -> Vec<&str> {
    index
        .starting_with(Letter::from_char(letter))
        .iter()
        .map(|candidate| candidate.as_str())
        .collect()
}

#[test]
fn word_archive_from_reader_succeeds() -> Result<(), LetterBoxedError> {
    let mut cursor = Cursor::new(String::from("\n\nClaim\n  meat \nword\n"));

    let archive = WordArchive::from_reader(&mut cursor)?;

    assert_eq!(archive.len(), 3);
    assert_arc_eq!(&archive, &["claim", "meat", "word"]);
    Ok(())
}

#[test]
fn word_archive_from_iterator_succeeds() {
    let archive = WordArchive::from_iterator(vec!["", "Claim", "meat "]);

    assert_eq!(archive.len(), 2);
    assert_arc_eq!(&archive, &["claim", "meat"]);
}

#[test]
fn candidates_for_filters_invalid_words() {
    let archive = WordArchive::from_iterator(vec![
        "Magic", // valid once lower cased
        "ma",    // too short
        "meat",  // 'm' and 'e' share a side
        "claim", // 'c' and 'l' share a side
        "word",  // 'o' and 'd' are not on the board
        "it's",  // apostrophe
        "tactic",
        "trace",
    ]);

    let index = archive.candidates_for(&board());

    assert_eq!(index.len(), 3);
    assert_eq!(words_starting_with(&index, 'm'), vec!["magic"]);
    assert_eq!(words_starting_with(&index, 't'), vec!["tactic", "trace"]);
    assert!(words_starting_with(&index, 'c').is_empty());
}

#[test]
fn candidates_obey_board_rules() {
    let board = board();
    let archive = WordArchive::from_iterator(vec![
        "claim", "tactic", "pilgrim", "mark", "lime", "merit", "germ", "trace", "kilt", "crew",
        "wire", "magic",
    ]);

    let index = archive.candidates_for(&board);

    assert!(!index.is_empty());
    for candidate in index.all() {
        assert!(candidate.len() >= MIN_WORD_LENGTH);
        assert!(candidate.is_valid_for(&board));
        assert!(board.letters().contains_all(candidate.coverage()));
        let sides: Vec<usize> = candidate
            .letters()
            .iter()
            .map(|letter| board.side_of(*letter))
            .collect::<Result<Vec<usize>, LetterBoxedError>>()
            .unwrap();
        assert!(sides.windows(2).all(|pair| pair[0] != pair[1]));
    }
}

#[test]
fn candidates_coverage_is_union_of_distinct_letters() {
    let archive = WordArchive::from_iterator(vec!["tactic"]);

    let index = archive.candidates_for(&board());

    let tactic = &index.all()[0];
    assert_eq!(tactic.coverage().to_string(), "acit");
    assert_eq!(index.coverage(), tactic.coverage());
}

#[test]
fn candidates_for_indexes_every_letter() {
    let archive = WordArchive::from_iterator(vec!["tactic", "magic"]);

    let index = archive.candidates_for(&board());

    assert_eq!(index.iter_by_letter().count(), 26);
    let non_empty: Vec<Letter> = index
        .iter_by_letter()
        .filter(|(_, candidates)| !candidates.is_empty())
        .map(|(letter, _)| letter)
        .collect();
    assert_eq!(
        non_empty,
        vec![Letter::from_char('m'), Letter::from_char('t')]
    );
}

#[test]
fn par_candidates_for_matches_sequential() {
    let archive = WordArchive::from_iterator(vec![
        "claim", "tactic", "pilgrim", "mark", "lime", "merit", "germ", "trace", "kilt", "crew",
        "wire", "magic", "tragic", "climate", "metric",
    ]);

    assert_eq!(
        archive.par_candidates_for(&board()),
        archive.candidates_for(&board())
    );
}

#[test]
fn candidates_for_empty_archive() {
    let archive = WordArchive::from_iterator(Vec::<String>::new());

    let index = archive.candidates_for(&board());

    assert!(index.is_empty());
    assert!(index.iter_by_letter().all(|(_, candidates)| candidates.is_empty()));
    assert_matches!(
        PuzzleSolver::new(board(), &archive).solve(),
        Err(LetterBoxedError::EmptyCandidateSet)
    );
}
