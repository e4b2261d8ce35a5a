//! Parse errors for tokenization.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "This specification defines the parse errors in this section as part of
//! the parsing algorithm. ... Parse errors are only errors with the syntax
//! of HTML documents."
//!
//! None of these abort tokenization. Every occurrence is recorded on the
//! tokenizer together with its input position and the state machine
//! continues with the standard's fallback transition.

use strum_macros::Display;

/// A recoverable syntax condition, named per the HTML Standard.
///
/// `Display` renders the standard's kebab-case error code, e.g.
/// `ParseError::UnexpectedNullCharacter` → `"unexpected-null-character"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ParseError {
    UnexpectedNullCharacter,
    EofBeforeTagName,
    EofInTag,
    EofInComment,
    EofInDoctype,
    InvalidFirstCharacterOfTagName,
    MissingEndTagName,
    UnexpectedQuestionMarkInsteadOfTagName,
    UnexpectedEqualsSignBeforeAttributeName,
    UnexpectedCharacterInAttributeName,
    DuplicateAttribute,
    MissingAttributeValue,
    UnexpectedCharacterInUnquotedAttributeValue,
    MissingWhitespaceBetweenAttributes,
    UnexpectedSolidusInTag,
    AbruptClosingOfEmptyComment,
    NestedComment,
    IncorrectlyClosedComment,
    IncorrectlyOpenedComment,
    CdataInHtmlContent,
    MissingWhitespaceBeforeDoctypeName,
    MissingDoctypeName,
    InvalidCharacterSequenceAfterDoctypeName,
    MissingWhitespaceAfterDoctypePublicKeyword,
    MissingDoctypePublicIdentifier,
    MissingQuoteBeforeDoctypePublicIdentifier,
    AbruptDoctypePublicIdentifier,
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    MissingWhitespaceAfterDoctypeSystemKeyword,
    MissingDoctypeSystemIdentifier,
    MissingQuoteBeforeDoctypeSystemIdentifier,
    AbruptDoctypeSystemIdentifier,
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    MissingSemicolonAfterCharacterReference,
    UnknownNamedCharacterReference,
    AbsenceOfDigitsInNumericCharacterReference,
    NullCharacterReference,
    CharacterReferenceOutsideUnicodeRange,
    SurrogateCharacterReference,
    NoncharacterCharacterReference,
    ControlCharacterReference,
}

/// A parse error together with the input position (in code points) at which
/// it was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseErrorRecord {
    pub error: ParseError,
    pub position: usize,
}
