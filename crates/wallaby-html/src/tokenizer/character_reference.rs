//! Character reference handling for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//! through
//! [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
//!
//! The return state saved before entering this family decides where decoded
//! code points land: the current attribute's value when the reference occurs
//! inside an attribute, otherwise the pending character run.

use super::core::{HTMLTokenizer, TokenizerState};
use super::error::ParseError;
use super::named_character_references::{any_entity_has_prefix, lookup_entity};

impl HTMLTokenizer {
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    /// Returns true if the return state is an attribute value state.
    /// Per spec: "consumed as part of an attribute"
    pub(super) const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// "Flush code points consumed as a character reference"
    ///
    /// Per spec: "If the character reference was consumed as part of an
    /// attribute, then append each character to the current attribute's
    /// value. Otherwise, emit each character as a character token."
    ///
    /// The non-attribute arm appends to the pending character run rather
    /// than emitting directly, so a reference in the middle of text does not
    /// split the surrounding run into separate Character tokens.
    pub(super) fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = std::mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            for c in buffer.chars() {
                if let Some(ref mut token) = self.current_token {
                    token.append_to_current_attribute_value(c);
                }
            }
        } else {
            for c in buffer.chars() {
                self.append_character(c);
            }
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) {
        // "Set the temporary buffer to the empty string."
        self.temporary_buffer.clear();
        // "Append a U+0026 AMPERSAND character (&) to the temporary buffer."
        self.temporary_buffer.push('&');

        match self.current_input_character {
            // "ASCII alphanumeric"
            // "Reconsume in the named character reference state."
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            // "U+0023 NUMBER SIGN (#)"
            // "Append the current input character to the temporary buffer.
            // Switch to the numeric character reference state."
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            // "Anything else"
            // "Flush code points consumed as a character reference.
            // Reconsume in the return state."
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                let return_state = self.return_state.take().unwrap();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    pub(super) fn handle_named_character_reference_state(&mut self) {
        // "Consume the maximum number of characters possible, where the consumed
        // characters are one of the identifiers in the first column of the named
        // character references table. Append each character to the temporary buffer
        // when it's consumed."
        //
        // We enter this state via reconsume, so current_input_character is the first
        // alphanumeric. The temporary buffer already contains "&" from the
        // character reference state.

        let mut longest_match: Option<(usize, &'static str)> = None;

        if let Some(c) = self.current_input_character {
            self.temporary_buffer.push(c);

            let entity_name = &self.temporary_buffer[1..]; // Skip leading '&'
            if let Some(replacement) = lookup_entity(entity_name) {
                longest_match = Some((self.temporary_buffer.len(), replacement));
            }
        }

        // Keep consuming characters while they could still extend an entity name
        loop {
            let entity_name = &self.temporary_buffer[1..];

            // A semicolon always terminates an entity name
            if entity_name.ends_with(';') {
                break;
            }

            // Stop once no entity starts with this prefix
            if !any_entity_has_prefix(entity_name) {
                break;
            }

            let next = self.input.next();
            match next {
                Some(c) if c.is_ascii_alphanumeric() || c == ';' => {
                    // "Append each character to the temporary buffer when it's consumed."
                    self.temporary_buffer.push(c);

                    let entity_name = &self.temporary_buffer[1..];
                    if let Some(replacement) = lookup_entity(entity_name) {
                        longest_match = Some((self.temporary_buffer.len(), replacement));
                    }
                }
                _ => {
                    // Hit a non-entity character or EOF - reprocess it in
                    // whatever state we leave for.
                    self.current_input_character = next;
                    self.reconsume = true;
                    break;
                }
            }
        }

        // "If there is a match:"
        if let Some((match_len, replacement)) = longest_match {
            let matched_entity = &self.temporary_buffer[1..match_len];
            let last_char_is_semicolon = matched_entity.ends_with(';');

            // "If the character reference was consumed as part of an attribute, and
            // the last character matched is not a U+003B SEMICOLON character (;), and
            // the next input character is either a U+003D EQUALS SIGN character (=) or
            // an ASCII alphanumeric, then, for historical reasons, flush code points
            // consumed as a character reference. Switch to the return state."
            if self.is_consumed_as_part_of_attribute() && !last_char_is_semicolon {
                // The "next input character" is either a character we consumed
                // past the match (still in the buffer), the stashed reconsume
                // character, or the next unconsumed code point.
                let next_char = if match_len < self.temporary_buffer.len() {
                    self.temporary_buffer[match_len..].chars().next()
                } else if self.reconsume {
                    self.current_input_character
                } else {
                    self.input.peek(0)
                };

                if matches!(next_char, Some('='))
                    || matches!(next_char, Some(c) if c.is_ascii_alphanumeric())
                {
                    // Historical exception: don't decode, flush as-is
                    self.flush_code_points_consumed_as_character_reference();
                    let return_state = self.return_state.take().unwrap();
                    self.switch_to(return_state);
                    return;
                }
            }

            // "If the last character matched is not a U+003B SEMICOLON character (;),
            // then this is a missing-semicolon-after-character-reference parse error."
            if !last_char_is_semicolon {
                self.log_parse_error(ParseError::MissingSemicolonAfterCharacterReference);
            }

            // Characters consumed past the end of the match are replayed after
            // the replacement.
            let chars_after_match: String = self.temporary_buffer[match_len..].to_string();

            // "Set the temporary buffer to the empty string. Append one or two characters
            // corresponding to the character reference name to the temporary buffer."
            self.temporary_buffer.clear();
            self.temporary_buffer.push_str(replacement);

            // "Flush code points consumed as a character reference."
            self.flush_code_points_consumed_as_character_reference();

            // Replay the characters that came after the match
            for c in chars_after_match.chars() {
                if self.is_consumed_as_part_of_attribute() {
                    if let Some(ref mut token) = self.current_token {
                        token.append_to_current_attribute_value(c);
                    }
                } else {
                    self.append_character(c);
                }
            }

            // "Switch to the return state."
            let return_state = self.return_state.take().unwrap();
            self.switch_to(return_state);
        } else {
            // "Otherwise:" (no match found)
            // "Flush code points consumed as a character reference."
            // The buffer contains "&" plus all characters we consumed.
            self.flush_code_points_consumed_as_character_reference();

            // "Switch to the ambiguous ampersand state."
            self.switch_to(TokenizerState::AmbiguousAmpersand);
        }
    }

    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    pub(super) fn handle_ambiguous_ampersand_state(&mut self) {
        match self.current_input_character {
            // "ASCII alphanumeric"
            // "If the character reference was consumed as part of an attribute, then
            // append the current input character to the current attribute's value.
            // Otherwise, emit the current input character as a character token."
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.is_consumed_as_part_of_attribute() {
                    if let Some(ref mut token) = self.current_token {
                        token.append_to_current_attribute_value(c);
                    }
                } else {
                    self.append_character(c);
                }
            }
            // "U+003B SEMICOLON (;)"
            // "This is an unknown-named-character-reference parse error.
            // Reconsume in the return state."
            Some(';') => {
                self.log_parse_error(ParseError::UnknownNamedCharacterReference);
                let return_state = self.return_state.take().unwrap();
                self.reconsume_in(return_state);
            }
            // "Anything else"
            // "Reconsume in the return state."
            _ => {
                let return_state = self.return_state.take().unwrap();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;

        match self.current_input_character {
            // "U+0078 LATIN SMALL LETTER X, U+0058 LATIN CAPITAL LETTER X"
            // "Append the current input character to the temporary buffer.
            // Switch to the hexadecimal character reference start state."
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.switch_to(TokenizerState::HexadecimalCharacterReferenceStart);
            }
            // "Anything else"
            // "Reconsume in the decimal character reference start state."
            _ => {
                self.reconsume_in(TokenizerState::DecimalCharacterReferenceStart);
            }
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    pub(super) fn handle_hexadecimal_character_reference_start_state(&mut self) {
        match self.current_input_character {
            // "ASCII hex digit"
            // "Reconsume in the hexadecimal character reference state."
            Some(c) if c.is_ascii_hexdigit() => {
                self.reconsume_in(TokenizerState::HexadecimalCharacterReference);
            }
            // "Anything else"
            // "This is an absence-of-digits-in-numeric-character-reference parse error.
            // Flush code points consumed as a character reference. Reconsume in the
            // return state."
            _ => {
                self.log_parse_error(ParseError::AbsenceOfDigitsInNumericCharacterReference);
                self.flush_code_points_consumed_as_character_reference();
                let return_state = self.return_state.take().unwrap();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    pub(super) fn handle_decimal_character_reference_start_state(&mut self) {
        match self.current_input_character {
            // "ASCII digit"
            // "Reconsume in the decimal character reference state."
            Some(c) if c.is_ascii_digit() => {
                self.reconsume_in(TokenizerState::DecimalCharacterReference);
            }
            // "Anything else"
            // "This is an absence-of-digits-in-numeric-character-reference parse error.
            // Flush code points consumed as a character reference. Reconsume in the
            // return state."
            _ => {
                self.log_parse_error(ParseError::AbsenceOfDigitsInNumericCharacterReference);
                self.flush_code_points_consumed_as_character_reference();
                let return_state = self.return_state.take().unwrap();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    pub(super) fn handle_hexadecimal_character_reference_state(&mut self) {
        match self.current_input_character {
            // "ASCII hex digit"
            // "Multiply the character reference code by 16. Add a numeric version of
            // the current input character to the character reference code."
            Some(c) if c.is_ascii_hexdigit() => {
                // Saturating arithmetic keeps absurd inputs in the
                // out-of-range bucket instead of wrapping.
                let digit = c.to_digit(16).unwrap();
                self.character_reference_code =
                    self.character_reference_code.saturating_mul(16).saturating_add(digit);
            }
            // "U+003B SEMICOLON"
            // "Switch to the numeric character reference end state."
            Some(';') => {
                self.finish_numeric_character_reference();
                let return_state = self.return_state.take().unwrap();
                self.switch_to(return_state);
            }
            // "Anything else"
            // "This is a missing-semicolon-after-character-reference parse error.
            // Reconsume in the numeric character reference end state."
            _ => {
                self.log_parse_error(ParseError::MissingSemicolonAfterCharacterReference);
                self.finish_numeric_character_reference();
                let return_state = self.return_state.take().unwrap();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    pub(super) fn handle_decimal_character_reference_state(&mut self) {
        match self.current_input_character {
            // "ASCII digit"
            // "Multiply the character reference code by 10. Add a numeric version of
            // the current input character to the character reference code."
            Some(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap();
                self.character_reference_code =
                    self.character_reference_code.saturating_mul(10).saturating_add(digit);
            }
            // "U+003B SEMICOLON"
            // "Switch to the numeric character reference end state."
            Some(';') => {
                self.finish_numeric_character_reference();
                let return_state = self.return_state.take().unwrap();
                self.switch_to(return_state);
            }
            // "Anything else"
            // "This is a missing-semicolon-after-character-reference parse error.
            // Reconsume in the numeric character reference end state."
            _ => {
                self.log_parse_error(ParseError::MissingSemicolonAfterCharacterReference);
                self.finish_numeric_character_reference();
                let return_state = self.return_state.take().unwrap();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// "Check the character reference code:"
    ///
    /// This step consumes no input, so it is a plain helper invoked from the
    /// digit states rather than a dispatched state.
    fn finish_numeric_character_reference(&mut self) {
        let mut code = self.character_reference_code;

        // "If the number is 0x00, then this is a null-character-reference parse
        // error. Set the character reference code to 0xFFFD."
        if code == 0x00 {
            self.log_parse_error(ParseError::NullCharacterReference);
            code = 0xFFFD;
        }
        // "If the number is greater than 0x10FFFF, then this is a
        // character-reference-outside-unicode-range parse error. Set the
        // character reference code to 0xFFFD."
        else if code > 0x0010_FFFF {
            self.log_parse_error(ParseError::CharacterReferenceOutsideUnicodeRange);
            code = 0xFFFD;
        }
        // "If the number is a surrogate, then this is a
        // surrogate-character-reference parse error. Set the character
        // reference code to 0xFFFD."
        else if (0xD800..=0xDFFF).contains(&code) {
            self.log_parse_error(ParseError::SurrogateCharacterReference);
            code = 0xFFFD;
        }
        // "If the number is a noncharacter, then this is a
        // noncharacter-character-reference parse error." (The code is kept.)
        else if (0xFDD0..=0xFDEF).contains(&code) || (code & 0xFFFE) == 0xFFFE {
            self.log_parse_error(ParseError::NoncharacterCharacterReference);
        }
        // "If the number is 0x0D, or a control that's not ASCII whitespace,
        // then this is a control-character-reference parse error. If the
        // number is one of the numbers in the first column of the following
        // table, then ... set the character reference code to the number in
        // the second column."
        else if code == 0x0D
            || (is_control(code) && !matches!(code, 0x09 | 0x0A | 0x0C | 0x20))
        {
            self.log_parse_error(ParseError::ControlCharacterReference);
            if let Some(replacement) = windows_1252_replacement(code) {
                code = replacement;
            }
        }

        // "Set the temporary buffer to the empty string. Append a code point
        // equal to the character reference code to the temporary buffer.
        // Flush code points consumed as a character reference."
        self.temporary_buffer.clear();
        self.temporary_buffer
            .push(char::from_u32(code).unwrap_or('\u{FFFD}'));
        self.flush_code_points_consumed_as_character_reference();
    }
}

/// [Infra § 4.5](https://infra.spec.whatwg.org/#control): a C0 control or a
/// code point in the range U+007F DELETE to U+009F APPLICATION PROGRAM
/// COMMAND.
const fn is_control(code: u32) -> bool {
    code <= 0x1F || (code >= 0x7F && code <= 0x9F)
}

/// The numeric character reference replacement table of § 13.2.5.80:
/// Windows-1252 interpretations of the C1 control range.
const fn windows_1252_replacement(code: u32) -> Option<u32> {
    Some(match code {
        0x80 => 0x20AC, // EURO SIGN
        0x82 => 0x201A, // SINGLE LOW-9 QUOTATION MARK
        0x83 => 0x0192, // LATIN SMALL LETTER F WITH HOOK
        0x84 => 0x201E, // DOUBLE LOW-9 QUOTATION MARK
        0x85 => 0x2026, // HORIZONTAL ELLIPSIS
        0x86 => 0x2020, // DAGGER
        0x87 => 0x2021, // DOUBLE DAGGER
        0x88 => 0x02C6, // MODIFIER LETTER CIRCUMFLEX ACCENT
        0x89 => 0x2030, // PER MILLE SIGN
        0x8A => 0x0160, // LATIN CAPITAL LETTER S WITH CARON
        0x8B => 0x2039, // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
        0x8C => 0x0152, // LATIN CAPITAL LIGATURE OE
        0x8E => 0x017D, // LATIN CAPITAL LETTER Z WITH CARON
        0x91 => 0x2018, // LEFT SINGLE QUOTATION MARK
        0x92 => 0x2019, // RIGHT SINGLE QUOTATION MARK
        0x93 => 0x201C, // LEFT DOUBLE QUOTATION MARK
        0x94 => 0x201D, // RIGHT DOUBLE QUOTATION MARK
        0x95 => 0x2022, // BULLET
        0x96 => 0x2013, // EN DASH
        0x97 => 0x2014, // EM DASH
        0x98 => 0x02DC, // SMALL TILDE
        0x99 => 0x2122, // TRADE MARK SIGN
        0x9A => 0x0161, // LATIN SMALL LETTER S WITH CARON
        0x9B => 0x203A, // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
        0x9C => 0x0153, // LATIN SMALL LIGATURE OE
        0x9E => 0x017E, // LATIN SMALL LETTER Z WITH CARON
        0x9F => 0x0178, // LATIN CAPITAL LETTER Y WITH DIAERESIS
        _ => return None,
    })
}
