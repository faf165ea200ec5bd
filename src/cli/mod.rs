//! Command Line Interface (CLI) layer for PEANOC.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the dispatch logic (`runner`) that selects between encoding and
//! decoding based on the shape of the input token. It wires user input to
//! the underlying library functionality exposed via `peanoc::api`.
//!
//! If you are embedding PEANOC into another application, prefer using
//! the high-level `peanoc::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
