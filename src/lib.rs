#![doc = r#"
PEANOC — a bidirectional converter between integers and Peano numerals.

This crate provides a typed, ergonomic API for turning non-negative integers
into Peano numeral strings (`"O"` for zero, `"S(...)"` wrapping the
predecessor for successors) and back. It powers the PEANOC CLI and can be
embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
peanoc = "0.1"
```

Quick start: encode and decode
------------------------------
```rust
use peanoc::{from_peano, to_peano};

fn main() -> peanoc::Result<()> {
    let numeral = to_peano(3)?;
    assert_eq!(numeral, "S(S(S(O)))");

    let value = from_peano(&numeral)?;
    assert_eq!(value, 3);
    Ok(())
}
```

Convert a raw token in either direction
---------------------------------------
```rust
use peanoc::{Conversion, convert_token};

fn main() -> peanoc::Result<()> {
    // Peano-shaped tokens are decoded, everything else is parsed
    // as a base-10 integer and encoded.
    match convert_token("S(S(O))")? {
        Conversion::FromPeano { value, .. } => assert_eq!(value, 2),
        Conversion::ToPeano { .. } => unreachable!(),
    }
    Ok(())
}
```

Error handling
--------------
All public functions return `peanoc::Result<T>`; match on `peanoc::Error` to
handle specific cases. Decoding failures inside a nested successor argument
are wrapped once per enclosing layer, so the rendered message chains from the
outermost malformed fragment down to the innermost one.

```rust
use peanoc::{Error, from_peano};

fn main() {
    match from_peano("S(S(X))") {
        Ok(n) => println!("decoded {n}"),
        Err(e @ Error::MalformedSuccessor { .. }) => {
            // "... in 'S(S(X))' -> ... in 'S(X)' -> ... format: 'X' ..."
            println!("{e}");
        }
        Err(other) => println!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — the token-shape classification shared by decoder and CLI.
- [`core`] — low-level encoder and decoder primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use core::decode::from_peano;
pub use core::encode::to_peano;
pub use error::{Error, Result};
pub use types::TokenKind;

// High-level API re-exports
pub use api::{Conversion, convert_token};
