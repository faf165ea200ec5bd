//! Shared types used across PEANOC.
//! Includes `TokenKind`, the input-shape classification shared by the
//! decoder and the CLI dispatch.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum TokenKind {
    /// `"O"`, or anything that starts with `"S("` and ends with `")"`.
    Numeral,
    /// Everything else; treated as a base-10 integer candidate.
    Integer,
}

impl TokenKind {
    /// Classify a raw input token by shape.
    ///
    /// This is a heuristic, not a grammar check: a token such as `"S(O))"`
    /// classifies as `Numeral` and only fails once decoded.
    pub fn classify(token: &str) -> Self {
        if token == "O" || (token.starts_with("S(") && token.ends_with(')')) {
            TokenKind::Numeral
        } else {
            TokenKind::Integer
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Numeral => write!(f, "Numeral"),
            TokenKind::Integer => write!(f, "Integer"),
        }
    }
}
