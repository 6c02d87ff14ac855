//! Terminal presentation of solver results
//!
//! Pure formatting lives here so the command layer and the interactive loop
//! can share one look. Strings are padded before they are colored, keeping
//! column widths correct once ANSI codes are attached.

use colored::Colorize;

use crate::core::{Codec, GREEN, Response, YELLOW};
use crate::solver::{PairScore, RankedGuess};

/// Render a response as colored square emoji, one per position
#[must_use]
pub fn response_emoji(response: Response) -> String {
    response
        .digits()
        .iter()
        .map(|&digit| match digit {
            GREEN => '🟩',
            YELLOW => '🟨',
            _ => '⬛',
        })
        .collect()
}

/// Print a ranked guess table, best first
pub fn print_ranked_guesses(codec: &Codec, ranked: &[RankedGuess]) {
    if ranked.is_empty() {
        println!("{}", "no guesses to rank".dimmed());
        return;
    }

    let header = format!("{:>4}  {:<8} {:>8} {:>10}", "#", "guess", "bits", "E[left]");
    println!("{}", header.dimmed());
    for (position, guess) in ranked.iter().enumerate() {
        let word = format!("{:<8}", codec.word_at(guess.word_index));
        let word = if guess.is_candidate {
            word.green().bold()
        } else {
            word.normal()
        };
        println!(
            "{:>4}  {word} {:>8.3} {:>10.2}",
            position + 1,
            guess.information,
            guess.expected_remaining
        );
    }
    println!("{}", "highlighted guesses can still be the answer".dimmed());
}

/// Print the strongest opening pairs, best first
pub fn print_pair_scores(codec: &Codec, pairs: &[PairScore]) {
    if pairs.is_empty() {
        println!("{}", "no pairs to rank".dimmed());
        return;
    }

    let header = format!(
        "{:>4}  {:<8} {:<8} {:>8} {:>10}",
        "#", "first", "second", "bits", "E[left]"
    );
    println!("{}", header.dimmed());
    for (position, pair) in pairs.iter().enumerate() {
        let first = format!("{:<8}", codec.word_at(pair.first));
        println!(
            "{:>4}  {} {:<8} {:>8.3} {:>10.2}",
            position + 1,
            first.bold(),
            codec.word_at(pair.second),
            pair.information,
            pair.expected_remaining
        );
    }
}

/// Print surviving candidate words with a count of any not shown
pub fn print_candidates(words: &[&str], total: usize) {
    if total == 0 {
        println!("{}", "no candidates remain".red().bold());
        return;
    }

    println!("{} candidate(s) remain:", total.to_string().cyan().bold());
    for word in words {
        println!("  {word}");
    }
    if total > words.len() {
        println!("{}", format!("  ... and {} more", total - words.len()).dimmed());
    }
}
