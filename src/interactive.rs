//! Interactive solving loop
//!
//! A line-oriented prompt over a [`Session`]: register each played guess
//! with the response the game showed, ask for ranked suggestions, and watch
//! the candidate set shrink. Responses are typed as five digits, one per
//! position: 0 gray, 1 yellow, 2 green.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::core::Codec;
use crate::output;
use crate::solver::{Session, SessionState};
use crate::table::LookupTable;

const DEFAULT_SUGGESTIONS: usize = 10;
const DEFAULT_CANDIDATES: usize = 20;

/// Run the prompt until `quit` or end of input
///
/// # Errors
/// Returns any error from reading stdin or writing stdout.
pub fn run(codec: &Codec, table: &LookupTable) -> io::Result<()> {
    let mut session = Session::new(codec, table);
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    println!(
        "{} words loaded, type {} for commands",
        codec.len().to_string().cyan().bold(),
        "help".bold()
    );

    loop {
        print!("{} ", "ordle>".cyan().bold());
        io::stdout().flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = args.split_first() else {
            continue;
        };

        match command {
            "guess" | "g" => handle_guess(&mut session, args),
            "best" | "b" => show_best(codec, &session, args),
            "candidates" | "c" => show_candidates(&session, args),
            "status" | "s" => show_status(&session),
            "reset" => {
                session.reset();
                println!("session reset, {} candidates", session.candidate_count());
            }
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            other => println!("unknown command '{other}', type {} for a list", "help".bold()),
        }
    }
    Ok(())
}

fn handle_guess(session: &mut Session<'_>, args: &[&str]) {
    let &[word, response] = args else {
        println!("usage: guess <word> <response>, e.g. guess bager 02122");
        return;
    };
    let Some(digits) = parse_digits(response) else {
        println!(
            "{}",
            "responses are digits only: 0 gray, 1 yellow, 2 green".red()
        );
        return;
    };

    match session.register_guess(word, &digits) {
        Ok(()) => report_guess(session),
        Err(error) => println!("{}", error.to_string().red()),
    }
}

fn report_guess(session: &Session<'_>) {
    let record = session
        .history()
        .last()
        .expect("a guess was just registered");
    println!("  {}  {}", record.word, output::response_emoji(record.response));

    if record.response.is_all_green() {
        let message = format!("solved in {} guesses", session.guess_number());
        println!("{}", message.green().bold());
        return;
    }
    if session.state() == SessionState::Contradictory {
        println!(
            "{}",
            "no word matches these responses, check them or reset".red().bold()
        );
        return;
    }
    println!("{} candidates remain", session.candidate_count());
}

fn show_best(codec: &Codec, session: &Session<'_>, args: &[&str]) {
    let mut count = DEFAULT_SUGGESTIONS;
    let mut only_candidates = false;
    for &arg in args {
        if let Ok(parsed) = arg.parse::<usize>() {
            count = parsed;
        } else if arg == "possible" {
            only_candidates = true;
        } else {
            println!("usage: best [count] [possible]");
            return;
        }
    }

    output::print_ranked_guesses(codec, &session.best_guesses(count, only_candidates));
}

fn show_candidates(session: &Session<'_>, args: &[&str]) {
    let count = match args {
        [] => DEFAULT_CANDIDATES,
        [arg] => match arg.parse::<usize>() {
            Ok(parsed) => parsed,
            Err(_) => {
                println!("usage: candidates [count]");
                return;
            }
        },
        _ => {
            println!("usage: candidates [count]");
            return;
        }
    };

    output::print_candidates(&session.candidate_words(count), session.candidate_count());
}

fn show_status(session: &Session<'_>) {
    if session.history().is_empty() {
        println!("no guesses yet");
    }
    for (number, record) in session.history().iter().enumerate() {
        let digits: String = record.digits.iter().map(|&d| char::from(b'0' + d)).collect();
        println!(
            "  {}. {}  {digits}  {}",
            number + 1,
            record.word,
            output::response_emoji(record.response)
        );
    }
    match session.state() {
        SessionState::Contradictory => {
            println!("{}", "responses are contradictory".red().bold());
        }
        _ => println!("{} candidates remain", session.candidate_count()),
    }
}

fn print_help() {
    println!("commands:");
    println!("  guess <word> <response>   register a played guess, e.g. guess bager 02122");
    println!("  best [count] [possible]   rank next guesses, 'possible' limits to candidates");
    println!("  candidates [count]        list words that can still be the answer");
    println!("  status                    show guesses so far and the candidate count");
    println!("  reset                     start over with every word possible");
    println!("  quit                      leave");
}

/// Turn a typed response like "02122" into digit values
///
/// Length and digit range are checked by the session, not here.
fn parse_digits(text: &str) -> Option<Vec<u8>> {
    text.chars()
        .map(|c| c.to_digit(10).map(|digit| digit as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_in_position_order() {
        assert_eq!(parse_digits("02122"), Some(vec![0, 2, 1, 2, 2]));
    }

    #[test]
    fn non_digits_are_rejected() {
        assert_eq!(parse_digits("0212x"), None);
        assert_eq!(parse_digits("🟩🟩🟩🟩🟩"), None);
    }

    #[test]
    fn length_is_preserved_for_the_session_to_check() {
        assert_eq!(parse_digits("021"), Some(vec![0, 2, 1]));
        assert_eq!(parse_digits(""), Some(Vec::new()));
    }
}
