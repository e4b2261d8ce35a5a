//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// Character reference parsing per § 13.2.5.72-80.
pub mod character_reference;
/// HTML tokenizer state machine implementation.
pub mod core;
/// Parse error kinds reported alongside the token stream.
pub mod error;
/// Helper methods for tokenizer state transitions and emission.
pub mod helpers;
/// Decoded code-point input stream consumed by the tokenizer.
pub mod input;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Token types produced by the tokenizer.
pub mod token;

pub use core::HTMLTokenizer;
pub use error::ParseError;
pub use input::InputStream;
pub use token::{Attribute, Token};
