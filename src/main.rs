//! Ordle Solver - CLI
//!
//! Danish Wordle solver built on a precomputed guess/answer response table.
//! The table is built once with `build-table`; every other command loads it.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ordle_solver::{
    core::Codec,
    interactive, output, solver,
    table::{BuildMonitor, LookupTable},
    wordlist::load_words,
};

/// Pairs printed to the terminal by best-pairs; the CSV keeps more.
const PAIRS_SHOWN: usize = 10;

#[derive(Parser)]
#[command(
    name = "ordle_solver",
    about = "Danish Wordle solver using a precomputed response table and information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one five-letter word per line
    #[arg(short = 'w', long, global = true, default_value = "five_letter_words.txt")]
    words: PathBuf,

    /// Lookup table file produced by build-table
    #[arg(short = 't', long, global = true, default_value = "lookup.txt")]
    table: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solving prompt (default)
    Solve,

    /// Build the guess/answer response table and save it
    BuildTable {
        /// Overwrite an existing table file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the expected information of a single opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank opening guesses by expected information
    Rank {
        /// Number of guesses to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Score two-guess openings over the strongest single guesses
    BestPairs {
        /// How many top single guesses form the search shortlist
        #[arg(short, long, default_value = "20")]
        shortlist: usize,

        /// Number of top pairs to keep in the CSV
        #[arg(short = 'n', long, default_value = "100")]
        top: usize,

        /// CSV file to write the ranked pairs to
        #[arg(short, long, default_value = "best_first_two_guesses.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let codec = load_codec(&cli.words)?;
    let command = cli.command.take().unwrap_or(Commands::Solve);

    match command {
        Commands::Solve => run_solve(&cli, &codec),
        Commands::BuildTable { force } => run_build_table(&cli, &codec, force),
        Commands::Analyze { word } => run_analyze(&cli, &codec, &word),
        Commands::Rank { count } => run_rank(&cli, &codec, count),
        Commands::BestPairs {
            shortlist,
            top,
            output,
        } => run_best_pairs(&cli, &codec, shortlist, top, &output),
    }
}

fn load_codec(path: &Path) -> Result<Codec> {
    let words = load_words(path)?;
    Ok(Codec::build(words)?)
}

fn run_solve(cli: &Cli, codec: &Codec) -> Result<()> {
    let table = LookupTable::load(&cli.table, codec.len())?;
    interactive::run(codec, &table)?;
    Ok(())
}

fn run_build_table(cli: &Cli, codec: &Codec, force: bool) -> Result<()> {
    if cli.table.exists() && !force {
        bail!(
            "{} already exists, pass --force to rebuild it",
            cli.table.display()
        );
    }

    let size = codec.len();
    println!("scoring {size} x {size} guess/answer pairs...");

    let bar = ProgressBar::new(size as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} rows ({eta})")?
            .progress_chars("█▓▒░"),
    );

    let report = |done: usize, _total: usize| bar.set_position(done as u64);
    let monitor = BuildMonitor::new().with_progress(&report);
    let table = LookupTable::build_monitored(codec, &monitor)?;
    bar.finish();

    table.save(&cli.table)?;
    println!(
        "saved {} ({size} rows)",
        cli.table.display().to_string().bold()
    );
    Ok(())
}

fn run_analyze(cli: &Cli, codec: &Codec, word: &str) -> Result<()> {
    let table = LookupTable::load(&cli.table, codec.len())?;

    let word = word.to_lowercase();
    let Some(guess) = codec.index_of(&word) else {
        bail!("'{word}' is not in the word list");
    };

    let candidates: Vec<usize> = (0..codec.len()).collect();
    let information = solver::information_bits(&table, guess, &candidates);
    let expected = codec.len() as f64 * (-information).exp2();

    println!("{}", word.bold());
    println!("  expected information: {information:.4} bits");
    println!(
        "  expected candidates after it: {expected:.2} of {}",
        codec.len()
    );
    Ok(())
}

fn run_rank(cli: &Cli, codec: &Codec, count: usize) -> Result<()> {
    let table = LookupTable::load(&cli.table, codec.len())?;

    let candidates: Vec<usize> = (0..codec.len()).collect();
    let ranked = solver::rank(&table, &candidates, None);
    output::print_ranked_guesses(codec, &solver::top_n(ranked, count));
    Ok(())
}

fn run_best_pairs(
    cli: &Cli,
    codec: &Codec,
    shortlist_size: usize,
    top: usize,
    output_path: &Path,
) -> Result<()> {
    let table = LookupTable::load(&cli.table, codec.len())?;

    let candidates: Vec<usize> = (0..codec.len()).collect();
    let ranked = solver::rank(&table, &candidates, None);
    let shortlist: Vec<usize> = ranked
        .iter()
        .take(shortlist_size)
        .map(|guess| guess.word_index)
        .collect();

    println!(
        "scoring {} ordered pairs over the top {} guesses...",
        shortlist.len() * shortlist.len(),
        shortlist.len()
    );
    let pairs = solver::rank_pairs(&table, &shortlist);
    let kept = &pairs[..top.min(pairs.len())];

    solver::save_pairs(output_path, codec, kept)?;
    println!(
        "saved {} pairs to {}",
        kept.len(),
        output_path.display().to_string().bold()
    );

    output::print_pair_scores(codec, &kept[..PAIRS_SHOWN.min(kept.len())]);
    Ok(())
}
