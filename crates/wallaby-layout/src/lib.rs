//! Text layout for the Wallaby engine.
//!
//! # Scope
//!
//! This crate implements the inline text line-breaker: given a text node's
//! raw data, a container width, font metrics, and a `white-space` mode, it
//! produces line boxes of fragments referencing the laid-out text.
//!
//! - Whitespace collapsing per [CSS 2 § 16.6 'white-space'](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
//! - Word chunking and greedy line filling
//! - Forced breaks at preserved newlines
//!
//! # Not Yet Implemented
//!
//! - Hyphenation and CJK break opportunities
//! - Bidi reordering
//! - `vertical-align` (every fragment sits on the line top)

/// Line breaking and line box construction.
pub mod line_breaker;

pub use line_breaker::{
    split_into_lines, ApproximateFont, FontOracle, LineBox, LineBoxFragment, TextLayout,
    WhiteSpace,
};
