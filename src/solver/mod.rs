//! Entropy-driven guess selection
//!
//! This module ranks guesses by expected Shannon information, tracks an
//! interactive elimination session, and searches for the strongest opening
//! pair of guesses.

pub mod pairs;
pub mod ranking;
pub mod session;

pub use pairs::{PairFileError, PairRecord, PairScore, load_pairs, rank_pairs, save_pairs};
pub use ranking::{RankedGuess, information_bits, rank, top_n};
pub use session::{GuessRecord, Session, SessionError, SessionState};
