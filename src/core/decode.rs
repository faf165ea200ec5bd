use tracing::debug;

use crate::error::{Error, Result};
use crate::types::TokenKind;

/// Convert a Peano numeral string to the non-negative integer it denotes.
///
/// Leading and trailing whitespace is ignored at every nesting level, so
/// `"S( S(O) )"` decodes to 2. Each step strips exactly one `"S("`/`")"`
/// layer; no balanced-parenthesis scan is performed beyond matching the
/// outermost prefix and suffix, so an internally malformed numeral surfaces
/// as a chain of nested failures naming each enclosing successor argument.
pub fn from_peano(numeral: &str) -> Result<u64> {
    let mut enclosing: Vec<&str> = Vec::new();
    let mut rest = numeral.trim();

    loop {
        if rest == "O" {
            debug!("decoded numeral at nesting depth {}", enclosing.len());
            return Ok(enclosing.len() as u64);
        }

        if TokenKind::classify(rest) == TokenKind::Numeral {
            // Prefix and suffix are ASCII, so byte slicing is safe here.
            let inner = &rest[2..rest.len() - 1];
            if inner.is_empty() {
                let err = Error::EmptySuccessor {
                    numeral: rest.to_string(),
                };
                return Err(chain(err, &enclosing));
            }
            enclosing.push(rest);
            rest = inner.trim();
        } else {
            let err = Error::InvalidFormat {
                numeral: rest.to_string(),
            };
            return Err(chain(err, &enclosing));
        }
    }
}

/// Rewrap an inner failure once per enclosing successor layer, innermost
/// layer first, so the rendered message reads outermost to innermost.
fn chain(innermost: Error, enclosing: &[&str]) -> Error {
    enclosing
        .iter()
        .rev()
        .fold(innermost, |err, layer| err.in_successor(layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_base_case() {
        assert_eq!(from_peano("O").unwrap(), 0);
    }

    #[test]
    fn decodes_nested_successors() {
        assert_eq!(from_peano("S(O)").unwrap(), 1);
        assert_eq!(from_peano("S(S(S(O)))").unwrap(), 3);
    }

    #[test]
    fn trims_whitespace_at_each_level() {
        assert_eq!(from_peano("  S(O) ").unwrap(), 1);
        assert_eq!(from_peano("S( S(O) )").unwrap(), 2);
    }

    #[test]
    fn rejects_missing_closing_paren() {
        assert!(matches!(
            from_peano("S(O").unwrap_err(),
            Error::InvalidFormat { .. }
        ));
    }

    #[test]
    fn wraps_inner_failures_outermost_first() {
        let err = from_peano("S(S())").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Peano numeral: Malformed successor argument in 'S(S())' \
             -> Invalid Peano numeral: Empty successor argument in 'S()'"
        );
    }
}
