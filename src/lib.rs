//! Ordle Solver
//!
//! An information-theoretic solver for the Danish five-letter word game.
//! Every guess/answer response is precomputed into an n-by-n lookup table,
//! so ranking guesses by expected Shannon information costs one table row
//! scan per guess.
//!
//! # Quick Start
//!
//! ```rust
//! use ordle_solver::core::Codec;
//! use ordle_solver::solver::Session;
//! use ordle_solver::table::LookupTable;
//!
//! let codec = Codec::build(["bager", "gader", "kaffe", "lampe"])?;
//! let table = LookupTable::build(&codec);
//!
//! // Playing "bager" drew gray, green, yellow, green, green.
//! let mut session = Session::new(&codec, &table);
//! session.register_guess("bager", &[0, 2, 1, 2, 2])?;
//! assert_eq!(session.candidate_words(10), ["gader"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Word encoding and response scoring
pub mod core;

// Guess ranking, sessions, and opening-pair search
pub mod solver;

// The precomputed guess/answer response table
pub mod table;

// Word list files
pub mod wordlist;

// Terminal output formatting
pub mod output;

// Interactive prompt
pub mod interactive;
