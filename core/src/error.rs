//! Error types for the messages client core.
//!
//! # Design
//! The two kinds of failure the core can detect are kept apart:
//! `InputError` is recoverable (the operation is abandoned and the menu comes
//! back), while `ApiError` covers a base or derived URI that does not parse,
//! which the dispatcher treats as fatal.

use thiserror::Error;

/// Failures while building a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The URI is not an absolute URI.
    #[error("invalid URI `{uri}`: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// The URI contains a character RFC 3986 does not allow anywhere, such
    /// as whitespace. Such text would be rewritten by a lenient parser but
    /// refused by the transport.
    #[error("invalid URI `{uri}`: illegal character {character:?} at byte {position}")]
    IllegalCharacter {
        uri: String,
        character: char,
        position: usize,
    },
}

/// Failures while interpreting a line typed by the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A row id was expected but the line was not an integer.
    #[error("`{0}` is not an integer row id")]
    NotAnInteger(String),

    /// The input stream ended before a required value was read.
    #[error("input ended while reading {0}")]
    Missing(&'static str),
}
