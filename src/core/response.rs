//! Game responses
//!
//! A response is the per-position feedback for one guess: 2 = right letter in
//! the right spot (green), 1 = letter present elsewhere (yellow), 0 = letter
//! absent (black). The five digits pack into one integer in [0, 242] using
//! base 3 with position 0 as the most significant digit, so all-green is 242.

use std::fmt;

use super::codec::{ALPHABET_CAPACITY, WORD_LENGTH};

/// Digit for an absent letter
pub const BLACK: u8 = 0;
/// Digit for a letter present in another position
pub const YELLOW: u8 = 1;
/// Digit for an exact positional match
pub const GREEN: u8 = 2;

/// An encoded five-digit response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Response(u8);

impl Response {
    /// The all-green response (guess equals answer)
    pub const ALL_GREEN: Self = Self(242);

    /// Number of distinct responses (3^5)
    pub const COUNT: usize = 243;

    /// Create a response from its encoded value
    ///
    /// Values must be in [0, 242].
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value <= 242);
        Self(value)
    }

    /// The encoded value in [0, 242]
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether every position is green
    #[inline]
    #[must_use]
    pub const fn is_all_green(self) -> bool {
        self.0 == Self::ALL_GREEN.0
    }

    /// Encode five digits, position 0 most significant
    ///
    /// # Examples
    /// ```
    /// use ordle_solver::core::Response;
    ///
    /// assert_eq!(Response::from_digits([1, 0, 0, 0, 0]).value(), 81);
    /// assert_eq!(Response::from_digits([0, 0, 0, 0, 1]).value(), 1);
    /// assert_eq!(Response::from_digits([2, 2, 2, 2, 2]), Response::ALL_GREEN);
    /// ```
    #[must_use]
    pub fn from_digits(digits: [u8; WORD_LENGTH]) -> Self {
        debug_assert!(digits.iter().all(|&digit| digit <= GREEN));
        Self(digits.iter().fold(0, |value, &digit| value * 3 + digit))
    }

    /// Decode back into five digits, position 0 first
    #[must_use]
    pub fn digits(self) -> [u8; WORD_LENGTH] {
        let mut digits = [0u8; WORD_LENGTH];
        let mut value = self.0;
        for digit in digits.iter_mut().rev() {
            *digit = value % 3;
            value /= 3;
        }
        digits
    }

    /// Score a guess against an answer, both as letter codes
    ///
    /// Two passes handle duplicate letters: the first marks greens and counts
    /// every unmatched answer letter, the second turns a non-green guess
    /// letter yellow only while unmatched copies of it remain. For any letter
    /// the number of non-black marks is therefore min(count in guess, count
    /// in answer), with greens claimed first.
    ///
    /// # Examples
    /// ```
    /// use ordle_solver::core::{Codec, Response};
    ///
    /// let codec = Codec::build(["bager", "gader"]).unwrap();
    /// let response = Response::score(&codec.encode("bager"), &codec.encode("gader"));
    /// assert_eq!(response.digits(), [0, 2, 1, 2, 2]);
    /// assert_eq!(response.value(), 71);
    /// ```
    #[must_use]
    pub fn score(guess: &[u8; WORD_LENGTH], answer: &[u8; WORD_LENGTH]) -> Self {
        let mut digits = [BLACK; WORD_LENGTH];
        let mut unmatched = [0u8; ALPHABET_CAPACITY];

        for position in 0..WORD_LENGTH {
            if guess[position] == answer[position] {
                digits[position] = GREEN;
            } else {
                unmatched[answer[position] as usize] += 1;
            }
        }

        for position in 0..WORD_LENGTH {
            if digits[position] == GREEN {
                continue;
            }
            let remaining = &mut unmatched[guess[position] as usize];
            if *remaining > 0 {
                digits[position] = YELLOW;
                *remaining -= 1;
            }
        }

        Self::from_digits(digits)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Score one guess against a row of answers, writing encoded values
///
/// Each output cell equals `Response::score(guess, answer).value()` for the
/// answer in the same position; the table builder fills whole rows this way.
pub fn score_row(guess: &[u8; WORD_LENGTH], answers: &[[u8; WORD_LENGTH]], out: &mut [u8]) {
    debug_assert_eq!(answers.len(), out.len());
    for (cell, answer) in out.iter_mut().zip(answers) {
        *cell = Response::score(guess, answer).value();
    }
}
