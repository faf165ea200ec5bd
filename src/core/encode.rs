use tracing::debug;

use crate::error::{Error, Result};

/// Convert a non-negative integer to its Peano numeral string.
///
/// `0` encodes as `"O"`; every other value wraps the encoding of its
/// predecessor in one `"S(" .. ")"` layer, so the output is exactly
/// `3n + 1` bytes long. The structural recursion is expressed as a loop,
/// keeping the nesting depth bounded by the heap rather than the call
/// stack for large inputs.
pub fn to_peano(n: i64) -> Result<String> {
    if n < 0 {
        return Err(Error::NegativeInteger { value: n });
    }

    let depth = n as usize;
    debug!("encoding {} at nesting depth {}", n, depth);

    let mut numeral = String::with_capacity(3 * depth + 1);
    for _ in 0..depth {
        numeral.push_str("S(");
    }
    numeral.push('O');
    for _ in 0..depth {
        numeral.push(')');
    }
    Ok(numeral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_encodes_as_the_base_case() {
        assert_eq!(to_peano(0).unwrap(), "O");
    }

    #[test]
    fn successors_nest_one_layer_per_unit() {
        assert_eq!(to_peano(1).unwrap(), "S(O)");
        assert_eq!(to_peano(3).unwrap(), "S(S(S(O)))");
    }

    #[test]
    fn negative_input_is_rejected() {
        assert!(matches!(
            to_peano(-7).unwrap_err(),
            Error::NegativeInteger { value: -7 }
        ));
    }
}
