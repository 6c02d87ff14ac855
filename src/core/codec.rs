//! Word list codec
//!
//! Validates the five-letter word list, derives the letter alphabet from it and
//! maps every word to a dense array of letter codes. All scoring and table
//! lookups run on these codes instead of characters.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// Number of letters in every word.
pub const WORD_LENGTH: usize = 5;

/// Letters a word may contain: the Danish orthography without `w`, plus æ, ø, å.
pub const ALLOWED_LETTERS: &str = "abcdefghijklmnopqrstuvxyzæøå";

/// Upper bound on the derived alphabet size, used to size per-letter count arrays.
pub(crate) const ALPHABET_CAPACITY: usize = 28;

/// Error type for word lists that fail validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    WrongLength { word: String, length: usize },
    NotLowercase { word: String },
    DisallowedLetter { word: String, letter: char },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { word, length } => {
                write!(f, "'{word}' has {length} letters, every word must have {WORD_LENGTH}")
            }
            Self::NotLowercase { word } => {
                write!(f, "'{word}' contains uppercase letters, the word list must be lowercase")
            }
            Self::DisallowedLetter { word, letter } => {
                write!(f, "'{word}' contains '{letter}', which is outside the allowed letters")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Codec over a validated word list
///
/// Owns the canonical (sorted, deduplicated) word list, the alphabet derived
/// from it, and the encoded form of every word. Word indices used throughout
/// the solver refer to the canonical order.
#[derive(Debug, Clone)]
pub struct Codec {
    alphabet: Vec<char>,
    letter_codes: FxHashMap<char, u8>,
    words: Vec<String>,
    word_indices: FxHashMap<String, usize>,
    encoded: Vec<[u8; WORD_LENGTH]>,
}

impl Codec {
    /// Build a codec from a word list
    ///
    /// The list is sorted and deduplicated; the alphabet is the sorted set of
    /// distinct letters that actually occur in it. Letter codes and word
    /// indices are a pure function of the list contents.
    ///
    /// # Errors
    /// Returns `ValidationError` if any word has a length other than 5,
    /// contains uppercase letters, or contains a letter outside
    /// [`ALLOWED_LETTERS`].
    ///
    /// # Examples
    /// ```
    /// use ordle_solver::core::Codec;
    ///
    /// let codec = Codec::build(["bager", "gader", "kaffe"]).unwrap();
    /// assert_eq!(codec.len(), 3);
    /// assert_eq!(codec.index_of("gader"), Some(1));
    ///
    /// assert!(Codec::build(["bag"]).is_err());
    /// assert!(Codec::build(["wagon"]).is_err());
    /// ```
    pub fn build<I, S>(word_list: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = word_list
            .into_iter()
            .map(|word| word.as_ref().to_owned())
            .collect();

        for word in &words {
            validate_word(word)?;
        }

        // Canonical order: String sort, which equals code-point order.
        words.sort_unstable();
        words.dedup();

        let letters: BTreeSet<char> = words.iter().flat_map(|word| word.chars()).collect();
        let alphabet: Vec<char> = letters.into_iter().collect();
        let letter_codes: FxHashMap<char, u8> = alphabet
            .iter()
            .enumerate()
            .map(|(code, &letter)| (letter, code as u8))
            .collect();

        let encoded = words
            .iter()
            .map(|word| {
                let codes: Vec<u8> = word.chars().map(|letter| letter_codes[&letter]).collect();
                codes.try_into().expect("length already validated")
            })
            .collect();

        let word_indices = words
            .iter()
            .enumerate()
            .map(|(index, word)| (word.clone(), index))
            .collect();

        Ok(Self {
            alphabet,
            letter_codes,
            words,
            word_indices,
            encoded,
        })
    }

    /// Encode a word into its letter codes
    ///
    /// # Panics
    /// Panics if the word was not validated by [`Codec::build`] (wrong length
    /// or a letter outside the alphabet). Unknown input is a programming
    /// error here, not a recoverable condition.
    #[must_use]
    pub fn encode(&self, word: &str) -> [u8; WORD_LENGTH] {
        let codes: Vec<u8> = word
            .chars()
            .map(|letter| self.letter_code(letter))
            .collect();
        codes.try_into().expect("words are five letters")
    }

    /// Decode letter codes back into a word
    ///
    /// # Panics
    /// Panics if any code is outside the alphabet.
    #[must_use]
    pub fn decode(&self, codes: [u8; WORD_LENGTH]) -> String {
        codes
            .iter()
            .map(|&code| self.alphabet[code as usize])
            .collect()
    }

    fn letter_code(&self, letter: char) -> u8 {
        match self.letter_codes.get(&letter) {
            Some(&code) => code,
            None => panic!("letter '{letter}' is not in the alphabet"),
        }
    }

    /// The canonical (sorted, deduplicated) word list
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The word at a canonical index
    ///
    /// # Panics
    /// Panics if the index is out of range.
    #[inline]
    #[must_use]
    pub fn word_at(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Canonical index of a word, if it is in the list
    #[inline]
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.word_indices.get(word).copied()
    }

    /// Encoded form of every word, in canonical order
    #[inline]
    #[must_use]
    pub fn encoded(&self) -> &[[u8; WORD_LENGTH]] {
        &self.encoded
    }

    /// Encoded form of the word at a canonical index
    ///
    /// # Panics
    /// Panics if the index is out of range.
    #[inline]
    #[must_use]
    pub fn encoded_at(&self, index: usize) -> &[u8; WORD_LENGTH] {
        &self.encoded[index]
    }

    /// The derived alphabet, sorted by code point
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Number of words in the canonical list
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn validate_word(word: &str) -> Result<(), ValidationError> {
    let length = word.chars().count();
    if length != WORD_LENGTH {
        return Err(ValidationError::WrongLength {
            word: word.to_owned(),
            length,
        });
    }

    for letter in word.chars() {
        if letter.is_uppercase() {
            return Err(ValidationError::NotLowercase {
                word: word.to_owned(),
            });
        }
        if !ALLOWED_LETTERS.contains(letter) {
            return Err(ValidationError::DisallowedLetter {
                word: word.to_owned(),
                letter,
            });
        }
    }

    Ok(())
}
