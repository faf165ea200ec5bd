use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: <input_value>")]
    MissingArgument,

    #[error("Error: '{token}' is not a valid non-negative integer or Peano numeral.")]
    InvalidToken { token: String },

    #[error("Error converting from Peano: {0}")]
    Decode(#[source] peanoc::Error),

    #[error("Error converting to Peano: {0}")]
    Encode(#[source] peanoc::Error),
}

impl From<peanoc::Error> for AppError {
    fn from(e: peanoc::Error) -> Self {
        match e {
            peanoc::Error::InvalidIntegerToken { token } => AppError::InvalidToken { token },
            err @ peanoc::Error::NegativeInteger { .. } => AppError::Encode(err),
            err => AppError::Decode(err),
        }
    }
}
