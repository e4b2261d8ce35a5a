//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Token emission ("Emit the current token") and character coalescing
//! - RCDATA/RAWTEXT/script data helpers for raw text elements
//! - Attribute helpers for duplicate detection
//! - Parse error recording

use wallaby_common::warning::warn_once;

use super::core::{HTMLTokenizer, TokenizerState};
use super::error::{ParseError, ParseErrorRecord};
use super::token::Token;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Switch to the X state"
    ///
    /// Transitions to a new state. The next code point will be consumed on the
    /// next iteration of the main loop.
    pub(super) fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Reconsume in the X state"
    ///
    /// Transitions to a new state without consuming the current code point.
    /// The same code point will be processed again in the new state.
    pub(super) fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }

    /// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// "ASCII whitespace is U+0009 TAB, U+000A LF, U+000C FF, U+000D CR,
    /// or U+0020 SPACE."
    ///
    /// NOTE: The tokenizer uses a subset excluding CR (which is normalized
    /// away during input stream preprocessing).
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        // "U+0009 CHARACTER TABULATION (tab)"
        // "U+000A LINE FEED (LF)"
        // "U+000C FORM FEED (FF)"
        // "U+0020 SPACE"
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// Append one code point of character data to the pending character run.
    ///
    /// Where the standard says "emit the current input character as a
    /// character token", the code point lands here instead; the run is
    /// flushed as a single `Character` token at the next token boundary.
    /// This is what guarantees that no two Character tokens are adjacent
    /// in the output stream.
    pub(super) fn append_character(&mut self, c: char) {
        self.character_buffer.push(c);
    }

    /// Flush the pending character run, if any, as one `Character` token.
    pub(super) fn flush_character_buffer(&mut self) {
        if !self.character_buffer.is_empty() {
            let data = std::mem::take(&mut self.character_buffer);
            self.output.push_back(Token::Character { data });
        }
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Emit the current token" - adds the token to the output stream.
    ///
    /// Any pending character run is flushed first so emission order matches
    /// input order.
    pub(super) fn emit_token(&mut self) {
        self.flush_character_buffer();
        if let Some(token) = self.current_token.take() {
            // Track the last start tag name for RCDATA/RAWTEXT/script data
            // end tag detection
            if let Token::StartTag { ref name, .. } = token {
                self.last_start_tag_name = Some(name.clone());

                // [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
                // [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
                //
                // NOTE: Per spec, the tree builder switches the tokenizer
                // state when these elements are opened. There is no tree
                // builder here, so the tokenizer detects the special elements
                // itself and switches states on emission.
                //
                // RCDATA elements: "title", "textarea"
                // RAWTEXT elements: "style", "xmp", "iframe", "noembed", "noframes"
                // Script data: "script"
                match name.as_str() {
                    // "A start tag whose tag name is "title""
                    // "Follow the generic RCDATA element parsing algorithm."
                    // [§ 13.2.6.2](https://html.spec.whatwg.org/multipage/parsing.html#generic-rcdata-element-parsing-algorithm)
                    // "Switch the tokenizer to the RCDATA state."
                    "title" | "textarea" => {
                        self.output.push_back(token);
                        self.switch_to(TokenizerState::RCDATA);
                        return;
                    }
                    // "A start tag whose tag name is one of: "style", "xmp", "iframe", "noembed", "noframes""
                    // "Follow the generic raw text element parsing algorithm."
                    // [§ 13.2.6.3](https://html.spec.whatwg.org/multipage/parsing.html#generic-raw-text-element-parsing-algorithm)
                    // "Switch the tokenizer to the RAWTEXT state."
                    "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                        self.output.push_back(token);
                        self.switch_to(TokenizerState::RAWTEXT);
                        return;
                    }
                    // "A start tag whose tag name is "script""
                    // "Switch the tokenizer to the script data state."
                    "script" => {
                        self.output.push_back(token);
                        self.switch_to(TokenizerState::ScriptData);
                        return;
                    }
                    _ => {}
                }
            }
            self.output.push_back(token);
        }
    }

    /// "Emit an end-of-file token."
    ///
    /// After this the tokenizer yields nothing further.
    pub(super) fn emit_eof_token(&mut self) {
        self.flush_character_buffer();
        self.output.push_back(Token::new_eof());
        self.at_eof = true;
    }
}

// =============================================================================
// RCDATA/RAWTEXT/Script Data Helpers
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    ///
    /// Used to determine if `</title>` should close the current `<title>` element.
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        if let (Some(last_start_tag), Some(Token::EndTag { name, .. })) =
            (&self.last_start_tag_name, &self.current_token)
        {
            return name == last_start_tag;
        }
        false
    }

    /// The shared "anything else" recovery of the raw-text end tag name
    /// states:
    ///
    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS
    /// character token, and a character token for each of the characters in
    /// the temporary buffer (in the order they were added to the buffer).
    /// Reconsume in the \[RCDATA / RAWTEXT / script data\] state."
    ///
    /// The speculative end tag token is discarded and its text re-enters the
    /// pending character run, so the surrounding raw text stays one
    /// coalesced token.
    pub(super) fn abandon_end_tag_speculation(&mut self, return_to: TokenizerState) {
        self.append_character('<');
        self.append_character('/');
        let buffer = std::mem::take(&mut self.temporary_buffer);
        for c in buffer.chars() {
            self.append_character(c);
        }
        self.current_token = None;
        self.reconsume_in(return_to);
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state... if there is
    /// already an attribute on the token with the exact same name, then this
    /// is a duplicate-attribute parse error."
    ///
    /// The duplicate is reported but kept on the token; deduplication
    /// belongs to tree construction, which is out of scope here.
    pub(super) fn check_duplicate_attribute(&mut self) {
        let is_duplicate = self
            .current_token
            .as_ref()
            .is_some_and(Token::current_attribute_name_is_duplicate);

        if is_duplicate {
            self.log_parse_error(ParseError::DuplicateAttribute);
        }
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Records the error with its input position and reports it through the
    /// warning system. Parse errors in HTML are not fatal - the tokenizer
    /// recovers and continues.
    pub(super) fn log_parse_error(&mut self, error: ParseError) {
        let position = self.input.position();
        self.errors.push(ParseErrorRecord { error, position });
        warn_once(
            "HTML Tokenizer",
            &format!("parse error at position {position}: {error}"),
        );
    }
}
