//! Core word and response types
//!
//! The codec turns the validated word list into dense letter codes; responses
//! are scored and packed on top of those codes.

mod codec;
mod response;

pub use codec::{ALLOWED_LETTERS, Codec, ValidationError, WORD_LENGTH};
pub use response::{BLACK, GREEN, Response, YELLOW, score_row};
