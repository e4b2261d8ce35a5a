//! HTML tokenizer for the Wallaby engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, RCDATA, RAWTEXT, script data, and tag states
//!   - DOCTYPE handling including public and system identifiers
//!   - Comment states including the `<!--` interior tracking family
//!   - Attribute parsing
//!   - Character references (named and numeric)
//!
//! Tokens are produced in pull mode: the consumer calls
//! [`HTMLTokenizer::next_token`] and receives one owned token at a time
//! until the end-of-file token has been yielded. Consecutive character code
//! points are coalesced into a single [`Token::Character`] token.
//!
//! Input is a decoded sequence of Unicode code points. Byte-level encoding
//! detection, `\r\n` normalization, and BOM stripping are the caller's
//! responsibility ([§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)).
//!
//! # Not Yet Implemented
//!
//! - Tree construction (tokens are the output of this crate)
//! - Script data escape states (`<!--` tracking inside `<script>`)
//! - PLAINTEXT state
//! - CDATA sections (always a `cdata-in-html-content` bogus comment, since
//!   there is no foreign-content context without a tree builder)
//! - The full 2,231-entry named character reference table (a curated table
//!   of the common entities is provided)

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{Attribute, HTMLTokenizer, ParseError, Token};
