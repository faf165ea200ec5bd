//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Provides semantic variants for decoding failures, token classification, and
//! negative-integer encode attempts, plus the context wrapper that chains nested
//! decode failures from the outermost malformed fragment inward.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid Peano numeral format: '{numeral}'. Expected 'O' or 'S(...)'")]
    InvalidFormat { numeral: String },

    #[error("Invalid Peano numeral: Empty successor argument in '{numeral}'")]
    EmptySuccessor { numeral: String },

    #[error("Invalid Peano numeral: Malformed successor argument in '{numeral}' -> {source}")]
    MalformedSuccessor {
        numeral: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Negative integers are not representable as Peano numerals, got: {value}")]
    NegativeInteger { value: i64 },

    #[error("'{token}' is not a valid non-negative integer or Peano numeral")]
    InvalidIntegerToken { token: String },
}

impl Error {
    /// Wrap a nested decode failure with the enclosing successor argument
    /// it occurred in.
    pub fn in_successor(self, numeral: &str) -> Self {
        Error::MalformedSuccessor {
            numeral: numeral.to_string(),
            source: Box::new(self),
        }
    }
}
