//! Core conversion building blocks: the unary encoder and decoder.
//! These are the primitives consumed by the high-level `api` module.
pub mod decode;
pub mod encode;
