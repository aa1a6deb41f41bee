use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use letter_boxed_solver::*;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

/// Solves Letter Boxed puzzles using the words from a word list.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: PathBuf,

    /// Log more detail. Repeat for even more (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Turn off logging.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the solutions with the fewest words for a box, given as e.g. "abc-def-ghi-jkl".
    Solve {
        sides: String,

        /// Give up on chains longer than this many words.
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,

        /// Print every solution with the fewest words instead of only the best one.
        #[arg(long)]
        all: bool,

        /// The most solutions to print with --all.
        #[arg(long)]
        limit: Option<usize>,

        /// Use multiple threads.
        #[arg(long)]
        parallel: bool,
    },
    /// List the words that can be played on a box, grouped by first letter.
    Candidates { sides: String },
}

fn main() -> Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    let words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("could not open {}", args.words_file.display()))?,
    );
    let archive = WordArchive::from_reader(words_reader)
        .with_context(|| format!("could not read {}", args.words_file.display()))?;
    debug!(path = %args.words_file.display(), "loaded word archive");
    println!("There are {} words in the archive.", archive.len());

    match args.command {
        Command::Solve {
            sides,
            max_words,
            all,
            limit,
            parallel,
        } => {
            let mut builder = SolverConfigBuilder::new()
                .max_words(max_words)
                .parallel(parallel);
            if let Some(limit) = limit {
                builder = builder.max_solutions(limit);
            }
            solve(&sides, &archive, builder.build()?, all)?
        }
        Command::Candidates { sides } => list_candidates(&sides, &archive)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn setup_logging(verbosity: u8, quiet: bool) {
    let level_filter = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn solve(sides: &str, archive: &WordArchive, config: SolverConfig, all: bool) -> Result<()> {
    let board: SideLetters = sides
        .parse()
        .with_context(|| format!("invalid box \"{}\"", sides))?;
    let solver = PuzzleSolver::with_config(board, archive, config);
    println!(
        "{} words can be played on {}.",
        solver.candidates().len(),
        solver.board()
    );

    let solutions = if all {
        solver.solve_all()
    } else {
        solver.solve().map(|solution| vec![solution])
    };
    match solutions {
        Ok(solutions) => {
            for solution in solutions.iter() {
                println!(
                    "\t{} ({} words, {} letters)",
                    solution,
                    solution.word_count(),
                    solution.letter_count()
                );
            }
        }
        Err(LetterBoxedError::NoSolutionFound { max_words }) => {
            println!("I couldn't solve it with {} words or fewer :(", max_words);
        }
        Err(error) => return Err(error.into()),
    }
    Ok(())
}

fn list_candidates(sides: &str, archive: &WordArchive) -> Result<()> {
    let board: SideLetters = sides
        .parse()
        .with_context(|| format!("invalid box \"{}\"", sides))?;
    let candidates = archive.candidates_for(&board);
    println!("{} words can be played on {}.", candidates.len(), board);

    for (letter, words) in candidates.iter_by_letter() {
        if words.is_empty() {
            continue;
        }
        let words: Vec<&str> = words.iter().map(|word| word.as_str()).collect();
        println!("{}: {}", letter, words.join(", "));
    }
    Ok(())
}
