//! Interactive solver session
//!
//! A session borrows the codec and the immutable lookup table and owns only
//! the mutable play state: which answer columns are still possible and which
//! guesses have been registered. Filtering never touches the table itself.

use std::fmt;

use crate::core::{Codec, GREEN, Response, WORD_LENGTH};
use crate::solver::ranking::{self, RankedGuess};
use crate::table::LookupTable;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No guesses registered yet.
    Fresh,
    /// Guesses registered, candidates remain.
    Active,
    /// Every candidate eliminated: one of the recorded responses must be
    /// wrong. A warning state, not an error; the session stays usable.
    Contradictory,
}

/// One registered guess with its observed response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: String,
    pub digits: [u8; WORD_LENGTH],
    pub response: Response,
}

/// Error type for rejected guess registrations
///
/// A rejected registration leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    UnknownWord(String),
    InvalidResponse(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word list"),
            Self::InvalidResponse(reason) => write!(f, "invalid response: {reason}"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Play state over a codec and its lookup table
pub struct Session<'a> {
    codec: &'a Codec,
    table: &'a LookupTable,
    candidates: Vec<usize>,
    history: Vec<GuessRecord>,
}

impl<'a> Session<'a> {
    /// Start a fresh session with every word still a candidate
    ///
    /// The table must have been built from (or validated against) the same
    /// codec; [`LookupTable::load`] enforces the size match.
    #[must_use]
    pub fn new(codec: &'a Codec, table: &'a LookupTable) -> Self {
        debug_assert_eq!(codec.len(), table.size());
        Self {
            codec,
            table,
            candidates: (0..table.size()).collect(),
            history: Vec::new(),
        }
    }

    /// Register a played guess and the response the game showed for it
    ///
    /// The word is lowercased before lookup. On success the candidate set is
    /// filtered down to the columns whose table entry matches the response,
    /// and the guess lands in the history. Filtering down to zero candidates
    /// is allowed; it flips the session into [`SessionState::Contradictory`].
    ///
    /// # Errors
    /// - [`SessionError::UnknownWord`] if the word is not in the word list
    /// - [`SessionError::InvalidResponse`] if `digits` is not five values
    ///   in {0, 1, 2}
    ///
    /// Both failures leave candidates and history untouched.
    pub fn register_guess(&mut self, word: &str, digits: &[u8]) -> Result<(), SessionError> {
        let word = word.to_lowercase();
        let Some(guess) = self.codec.index_of(&word) else {
            return Err(SessionError::UnknownWord(word));
        };

        if digits.len() != WORD_LENGTH {
            return Err(SessionError::InvalidResponse(format!(
                "expected {WORD_LENGTH} digits, got {}",
                digits.len()
            )));
        }
        if let Some(&digit) = digits.iter().find(|&&digit| digit > GREEN) {
            return Err(SessionError::InvalidResponse(format!(
                "digit {digit} is outside 0-2"
            )));
        }

        let digits: [u8; WORD_LENGTH] = digits.try_into().expect("length checked above");
        let response = Response::from_digits(digits);

        let row = self.table.row(guess);
        self.candidates
            .retain(|&column| row[column] == response.value());
        self.history.push(GuessRecord {
            word,
            digits,
            response,
        });
        Ok(())
    }

    /// Restore every candidate and clear the history
    pub fn reset(&mut self) {
        self.candidates = (0..self.table.size()).collect();
        self.history.clear();
    }

    /// Best next guesses against the current candidate set
    ///
    /// With `only_candidates` the guess pool shrinks to the words that can
    /// still be the answer; otherwise every word may be played for
    /// information.
    #[must_use]
    pub fn best_guesses(&self, count: usize, only_candidates: bool) -> Vec<RankedGuess> {
        let pool = if only_candidates {
            Some(self.candidates.as_slice())
        } else {
            None
        };
        ranking::top_n(ranking::rank(self.table, &self.candidates, pool), count)
    }

    /// Remaining candidate columns, in table order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// The first `count` candidate words, in table order
    #[must_use]
    pub fn candidate_words(&self, count: usize) -> Vec<&str> {
        self.candidates
            .iter()
            .take(count)
            .map(|&column| self.codec.word_at(column))
            .collect()
    }

    /// Registered guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of registered guesses
    #[inline]
    #[must_use]
    pub fn guess_number(&self) -> usize {
        self.history.len()
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.history.is_empty() {
            SessionState::Fresh
        } else if self.candidates.is_empty() {
            SessionState::Contradictory
        } else {
            SessionState::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Codec, LookupTable) {
        let codec = Codec::build(["solen", "stole", "store", "svane"]).unwrap();
        let table = LookupTable::build(&codec);
        (codec, table)
    }

    #[test]
    fn fresh_session_holds_every_candidate() {
        let (codec, table) = fixture();
        let session = Session::new(&codec, &table);

        assert_eq!(session.state(), SessionState::Fresh);
        assert_eq!(session.candidates(), [0, 1, 2, 3]);
        assert_eq!(session.candidate_count(), 4);
        assert_eq!(session.guess_number(), 0);
    }

    #[test]
    fn register_filters_to_matching_columns() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);

        // "svane" vs "stole" and "store" both score 2 0 0 0 2.
        session.register_guess("svane", &[2, 0, 0, 0, 2]).unwrap();

        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.candidates(), [1, 2]);
        assert_eq!(session.candidate_words(10), ["stole", "store"]);
        assert_eq!(session.guess_number(), 1);
        assert_eq!(session.history()[0].word, "svane");
        assert_eq!(session.history()[0].response.value(), 164);
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);

        session.register_guess("svane", &[2, 0, 0, 0, 2]).unwrap();
        let after_first = session.candidate_count();
        session.register_guess("store", &[2, 2, 2, 0, 2]).unwrap();

        assert!(session.candidate_count() <= after_first);
        assert_eq!(session.candidate_words(10), ["stole"]);
    }

    #[test]
    fn uppercase_guesses_are_accepted() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);

        session.register_guess("SVANE", &[2, 0, 0, 0, 2]).unwrap();
        assert_eq!(session.history()[0].word, "svane");
    }

    #[test]
    fn unknown_word_is_rejected_without_side_effects() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);

        let result = session.register_guess("bager", &[0, 0, 0, 0, 0]);
        assert_eq!(
            result,
            Err(SessionError::UnknownWord("bager".to_owned()))
        );
        assert_eq!(session.state(), SessionState::Fresh);
        assert_eq!(session.candidate_count(), 4);
        assert!(session.history().is_empty());
    }

    #[test]
    fn malformed_response_is_rejected_without_side_effects() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);
        session.register_guess("svane", &[2, 0, 0, 0, 2]).unwrap();
        let candidates_before = session.candidates().to_vec();

        assert!(matches!(
            session.register_guess("store", &[2, 0, 0, 0]),
            Err(SessionError::InvalidResponse(_))
        ));
        assert!(matches!(
            session.register_guess("store", &[2, 0, 3, 0, 0]),
            Err(SessionError::InvalidResponse(_))
        ));

        assert_eq!(session.candidates(), candidates_before);
        assert_eq!(session.guess_number(), 1);
    }

    #[test]
    fn impossible_responses_leave_a_contradiction() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);

        session.register_guess("svane", &[2, 0, 0, 0, 2]).unwrap();
        // All-green for "solen" contradicts the previous filter.
        session.register_guess("solen", &[2, 2, 2, 2, 2]).unwrap();

        assert_eq!(session.state(), SessionState::Contradictory);
        assert_eq!(session.candidate_count(), 0);

        // Still usable: ranking degrades to zero information, registering works.
        let ranked = session.best_guesses(10, false);
        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|guess| guess.information == 0.0));
        assert!(session.register_guess("stole", &[0, 0, 0, 0, 0]).is_ok());
    }

    #[test]
    fn reset_restores_the_full_candidate_set() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);

        session.register_guess("svane", &[2, 0, 0, 0, 2]).unwrap();
        session.reset();

        assert_eq!(session.state(), SessionState::Fresh);
        assert_eq!(session.candidates(), [0, 1, 2, 3]);
        assert!(session.history().is_empty());
    }

    #[test]
    fn best_guesses_can_be_restricted_to_candidates() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);
        session.register_guess("svane", &[2, 0, 0, 0, 2]).unwrap();

        let restricted = session.best_guesses(10, true);
        assert_eq!(restricted.len(), 2);
        assert!(restricted.iter().all(|guess| guess.is_candidate));

        let open = session.best_guesses(10, false);
        assert_eq!(open.len(), 4);
    }

    #[test]
    fn best_guesses_truncates_to_count() {
        let (codec, table) = fixture();
        let session = Session::new(&codec, &table);
        assert_eq!(session.best_guesses(2, false).len(), 2);
    }

    #[test]
    fn responses_scored_from_the_answer_converge_on_it() {
        let (codec, table) = fixture();
        let mut session = Session::new(&codec, &table);
        let answer = codec.encode("stole");

        for guess in ["svane", "store"] {
            let digits = Response::score(&codec.encode(guess), &answer).digits();
            session.register_guess(guess, &digits).unwrap();
            assert!(session.candidate_words(10).contains(&"stole"));
        }

        assert_eq!(session.candidate_words(10), ["stole"]);
    }
}
