//! High-level, ergonomic library API: classify a raw input token and run the
//! conversion its shape selects, returning a typed [`Conversion`]. Prefer
//! these entrypoints over the low-level `core` modules when embedding PEANOC.
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::decode::from_peano;
use crate::core::encode::to_peano;
use crate::error::{Error, Result};
use crate::types::TokenKind;

/// Result of a single token conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conversion {
    /// An integer token was encoded into a numeral.
    ToPeano { value: i64, numeral: String },
    /// A Peano-shaped token was decoded into the value it denotes.
    FromPeano { numeral: String, value: u64 },
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conversion::ToPeano { value, numeral } => {
                write!(f, "Integer: {} -> Peano: {}", value, numeral)
            }
            Conversion::FromPeano { numeral, value } => {
                write!(f, "Peano: '{}' -> Integer: {}", numeral, value)
            }
        }
    }
}

/// Convert a raw input token in whichever direction its shape selects.
///
/// Peano-shaped tokens (see [`TokenKind::classify`]) are decoded; everything
/// else is parsed as a base-10 integer and encoded. A token that is neither
/// fails with [`Error::InvalidIntegerToken`]; a negative integer surfaces the
/// encoder's [`Error::NegativeInteger`].
pub fn convert_token(token: &str) -> Result<Conversion> {
    match TokenKind::classify(token) {
        TokenKind::Numeral => {
            info!("decoding Peano-shaped token: {}", token);
            let value = from_peano(token)?;
            Ok(Conversion::FromPeano {
                numeral: token.to_string(),
                value,
            })
        }
        TokenKind::Integer => {
            let value: i64 = token.parse().map_err(|_| Error::InvalidIntegerToken {
                token: token.to_string(),
            })?;
            info!("encoding integer token: {}", value);
            let numeral = to_peano(value)?;
            Ok(Conversion::ToPeano { value, numeral })
        }
    }
}
