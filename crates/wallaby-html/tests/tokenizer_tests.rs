//! Integration tests for the HTML tokenizer.

use wallaby_html::{HTMLTokenizer, ParseError, Token};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    HTMLTokenizer::new(input).into_tokens()
}

/// Helper to tokenize a string and return the recorded parse error kinds
fn parse_errors(input: &str) -> Vec<ParseError> {
    let mut tokenizer = HTMLTokenizer::new(input);
    while tokenizer.next_token().is_some() {}
    tokenizer
        .parse_errors()
        .iter()
        .map(|record| record.error)
        .collect()
}

/// Helper to collect all character data from a token stream
fn character_data(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|t| {
            if let Token::Character { data } = t {
                Some(data.as_str())
            } else {
                None
            }
        })
        .collect()
}

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    // Consecutive characters coalesce into a single token
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "Hello"));
    assert!(matches!(tokens[1], Token::EndOfFile));
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

#[test]
fn test_eof_token_emitted_exactly_once() {
    let mut tokenizer = HTMLTokenizer::new("<p>x</p>");
    let mut eof_count = 0;
    while let Some(token) = tokenizer.next_token() {
        if token.is_eof() {
            eof_count += 1;
        }
    }
    assert_eq!(eof_count, 1);
    // Nothing follows the end-of-file token
    assert_eq!(tokenizer.next_token(), None);
    assert_eq!(tokenizer.next_token(), None);
}

#[test]
fn test_no_adjacent_character_tokens() {
    // Recovery paths route stray characters through the same pending run,
    // so even messy input yields at most one Character token per boundary.
    for input in [
        "x<1y",
        "a & b & c",
        "a&amp;b",
        "plain text",
        "<p>one</p>two<p>three</p>",
    ] {
        let tokens = tokenize(input);
        for pair in tokens.windows(2) {
            assert!(
                !(matches!(pair[0], Token::Character { .. })
                    && matches!(pair[1], Token::Character { .. })),
                "adjacent Character tokens for input {input:?}: {tokens:?}"
            );
        }
    }
}

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2); // DOCTYPE + EOF
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_name_is_lowercased() {
    let tokens = tokenize("<!doctype HTML>");
    assert!(matches!(&tokens[0], Token::Doctype { name: Some(n), .. } if n == "html"));
}

#[test]
fn test_doctype_public_and_system_identifiers() {
    let tokens = tokenize(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#,
    );
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(public_identifier.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
            assert_eq!(
                system_identifier.as_deref(),
                Some("http://www.w3.org/TR/html4/strict.dtd")
            );
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_system_identifier_only() {
    let tokens = tokenize(r#"<!DOCTYPE html SYSTEM "about:legacy-compat">"#);
    match &tokens[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            ..
        } => {
            assert_eq!(public_identifier.as_deref(), None);
            assert_eq!(system_identifier.as_deref(), Some("about:legacy-compat"));
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_bogus_keyword_forces_quirks() {
    let tokens = tokenize("<!DOCTYPE html BOGUS>");
    assert!(matches!(&tokens[0], Token::Doctype { force_quirks: true, .. }));
    assert!(parse_errors("<!DOCTYPE html BOGUS>")
        .contains(&ParseError::InvalidCharacterSequenceAfterDoctypeName));
}

#[test]
fn test_missing_doctype_name() {
    let tokens = tokenize("<!DOCTYPE>");
    assert!(matches!(
        &tokens[0],
        Token::Doctype {
            name: None,
            force_quirks: true,
            ..
        }
    ));
    assert!(parse_errors("<!DOCTYPE>").contains(&ParseError::MissingDoctypeName));
}

#[test]
fn test_unterminated_doctype() {
    let tokens = tokenize("<!DOCTYPE html");
    assert!(matches!(
        &tokens[0],
        Token::Doctype {
            name: Some(n),
            force_quirks: true,
            ..
        } if n == "html"
    ));
    assert!(matches!(tokens.last(), Some(Token::EndOfFile)));
    assert!(parse_errors("<!DOCTYPE html").contains(&ParseError::EofInDoctype));
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "div");
            assert!(!self_closing);
            assert!(attributes.is_empty());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::EndTag { name, .. } => {
            assert_eq!(name, "div");
        }
        _ => panic!("Expected EndTag token"),
    }
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected self-closing StartTag token"),
    }
}

#[test]
fn test_tag_name_is_lowercased() {
    // <IMG SRC=foo> - tag and attribute names fold to lowercase,
    // attribute values are preserved as-is
    let tokens = tokenize("<IMG SRC=foo>");
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "img");
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "src");
            assert_eq!(attributes[0].value, "foo");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_mixed_case_end_tag() {
    let tokens = tokenize("</DiV>");
    assert!(matches!(&tokens[0], Token::EndTag { name, .. } if name == "div"));
}

#[test]
fn test_attribute_double_quoted() {
    let tokens = tokenize(r#"<div class="foo">"#);
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "div");
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "class");
            assert_eq!(attributes[0].value, "foo");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_attribute_single_quoted() {
    let tokens = tokenize("<div class='bar'>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].name, "class");
            assert_eq!(attributes[0].value, "bar");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_attribute_unquoted() {
    let tokens = tokenize("<div class=baz>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].name, "class");
            assert_eq!(attributes[0].value, "baz");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_boolean_attribute() {
    let tokens = tokenize("<input disabled>");
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "input");
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "disabled");
            assert_eq!(attributes[0].value, "");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_multiple_attributes() {
    let tokens = tokenize(r#"<input type="text" id="name" disabled>"#);
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "input");
            assert_eq!(attributes.len(), 3);
            assert_eq!(attributes[0].name, "type");
            assert_eq!(attributes[0].value, "text");
            assert_eq!(attributes[1].name, "id");
            assert_eq!(attributes[1].value, "name");
            assert_eq!(attributes[2].name, "disabled");
            assert_eq!(attributes[2].value, "");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_duplicate_attribute_is_reported_and_retained() {
    // The parse error is reported, but both entries survive in insertion
    // order - dropping duplicates is tree construction's job.
    let input = r#"<div id="a" id="b">"#;
    match &tokenize(input)[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 2);
            assert_eq!(attributes[0].value, "a");
            assert_eq!(attributes[1].value, "b");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert!(parse_errors(input).contains(&ParseError::DuplicateAttribute));
}

#[test]
fn test_missing_attribute_value() {
    let input = "<div class=>";
    let tokens = tokenize(input);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "class");
            assert_eq!(attributes[0].value, "");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert!(parse_errors(input).contains(&ParseError::MissingAttributeValue));
}

#[test]
fn test_equals_sign_before_attribute_name() {
    let input = "<div =foo>";
    let tokens = tokenize(input);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "=foo");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert!(parse_errors(input).contains(&ParseError::UnexpectedEqualsSignBeforeAttributeName));
}

#[test]
fn test_solidus_inside_tag_recovers() {
    // The stray solidus is an unexpected-solidus-in-tag parse error; the
    // attribute that follows is parsed normally.
    let input = "<div / id=x>";
    let tokens = tokenize(input);
    match &tokens[0] {
        Token::StartTag {
            self_closing,
            attributes,
            ..
        } => {
            assert!(!self_closing);
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "id");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert!(parse_errors(input).contains(&ParseError::UnexpectedSolidusInTag));
}

#[test]
fn test_tag_with_text_content() {
    let tokens = tokenize("<p>Hi</p>");
    assert_eq!(tokens.len(), 4); // <p>, "Hi", </p>, EOF
    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "p"));
    assert!(matches!(&tokens[1], Token::Character { data } if data == "Hi"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "p"));
    assert!(matches!(tokens[3], Token::EndOfFile));
}

#[test]
fn test_doctype_then_elements() {
    let tokens = tokenize("<!DOCTYPE html><html></html>");
    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[0], Token::Doctype { name: Some(n), .. } if n == "html"));
    assert!(matches!(&tokens[1], Token::StartTag { name, .. } if name == "html"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "html"));
    assert!(matches!(tokens[3], Token::EndOfFile));
}

#[test]
fn test_paragraph_with_two_attribute_styles() {
    let tokens = tokenize(r#"<p class="x" id='y'>hi</p>"#);
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "p");
            assert_eq!(attributes.len(), 2);
            assert_eq!(attributes[0].name, "class");
            assert_eq!(attributes[0].value, "x");
            assert_eq!(attributes[1].name, "id");
            assert_eq!(attributes[1].value, "y");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert!(matches!(&tokens[1], Token::Character { data } if data == "hi"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "p"));
    assert!(matches!(tokens[3], Token::EndOfFile));
}

#[test]
fn test_simple_html_document() {
    let html = r#"<!DOCTYPE html>
<html>
<head><title>Test</title></head>
<body>Hello</body>
</html>"#;
    let tokens = tokenize(html);

    // Should have DOCTYPE as first token
    assert!(matches!(&tokens[0], Token::Doctype { name: Some(n), .. } if n == "html"));

    // Should end with EOF
    assert!(matches!(tokens.last(), Some(Token::EndOfFile)));

    // Count tag tokens
    let start_tags = tokens
        .iter()
        .filter(|t| matches!(t, Token::StartTag { .. }))
        .count();
    let end_tags = tokens
        .iter()
        .filter(|t| matches!(t, Token::EndTag { .. }))
        .count();

    assert_eq!(start_tags, 4); // html, head, title, body
    assert_eq!(end_tags, 4); // /title, /head, /body, /html
}

#[test]
fn test_nesting_order_round_trip() {
    // Balanced tags with no character references reflect the input's
    // nesting order exactly.
    let tokens = tokenize("<a><b><c></c></b></a>");
    let names: Vec<String> = tokens
        .iter()
        .filter_map(|t| match t {
            Token::StartTag { name, .. } => Some(format!("<{name}>")),
            Token::EndTag { name, .. } => Some(format!("</{name}>")),
            _ => None,
        })
        .collect();
    assert_eq!(names, ["<a>", "<b>", "<c>", "</c>", "</b>", "</a>"]);
}

// ========== Boundary behaviors ==========

#[test]
fn test_lone_less_than_sign() {
    let tokens = tokenize("<");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "<"));
    assert!(matches!(tokens[1], Token::EndOfFile));
    assert!(parse_errors("<").contains(&ParseError::EofBeforeTagName));
}

#[test]
fn test_lone_end_tag_opener() {
    let tokens = tokenize("</");
    assert!(matches!(&tokens[0], Token::Character { data } if data == "</"));
    assert!(matches!(tokens[1], Token::EndOfFile));
}

#[test]
fn test_less_than_sign_before_digit() {
    // "<1" is not a tag opener; the "<" is emitted as text
    let tokens = tokenize("x<1y");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "x<1y"));
    assert!(parse_errors("x<1y").contains(&ParseError::InvalidFirstCharacterOfTagName));
}

#[test]
fn test_unterminated_tag() {
    let tokens = tokenize("<div class=");
    // The partial tag is dropped; only EOF comes out
    assert_eq!(tokens, vec![Token::EndOfFile]);
    assert!(parse_errors("<div class=").contains(&ParseError::EofInTag));
}

#[test]
fn test_empty_end_tag() {
    let tokens = tokenize("</>");
    assert_eq!(tokens, vec![Token::EndOfFile]);
    assert!(parse_errors("</>").contains(&ParseError::MissingEndTagName));
}

// ========== Comment tests ==========

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hello -->");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Comment { data } => {
            assert_eq!(data, " hello ");
        }
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_comment_with_interior_double_dash() {
    // "--" only closes a comment when followed by ">"
    let tokens = tokenize("<!-- a -- b -->");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == " a -- b "));
    assert!(matches!(tokens[1], Token::EndOfFile));
}

#[test]
fn test_comment_with_interior_less_than() {
    let tokens = tokenize("<!--a<b-->");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "a<b"));
}

#[test]
fn test_comment_with_interior_comment_opener() {
    // An interior "<!--" is a nested-comment parse error but does not nest
    let input = "<!-- a <!-- b -->";
    let tokens = tokenize(input);
    assert!(matches!(&tokens[0], Token::Comment { data } if data == " a <!-- b "));
    assert!(matches!(tokens[1], Token::EndOfFile));
    assert!(parse_errors(input).contains(&ParseError::NestedComment));
}

#[test]
fn test_abrupt_empty_comment() {
    let input = "<!-->";
    let tokens = tokenize(input);
    assert!(matches!(&tokens[0], Token::Comment { data } if data.is_empty()));
    assert!(parse_errors(input).contains(&ParseError::AbruptClosingOfEmptyComment));
}

#[test]
fn test_incorrectly_closed_comment() {
    let input = "<!--x--!>";
    let tokens = tokenize(input);
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "x"));
    assert!(parse_errors(input).contains(&ParseError::IncorrectlyClosedComment));
}

#[test]
fn test_unterminated_comment() {
    let input = "<!-- x";
    let tokens = tokenize(input);
    assert!(matches!(&tokens[0], Token::Comment { data } if data == " x"));
    assert!(matches!(tokens[1], Token::EndOfFile));
    assert!(parse_errors(input).contains(&ParseError::EofInComment));
}

#[test]
fn test_bogus_comment_from_unknown_declaration() {
    let input = "<!x>";
    let tokens = tokenize(input);
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "x"));
    assert!(parse_errors(input).contains(&ParseError::IncorrectlyOpenedComment));
}

#[test]
fn test_processing_instruction_becomes_bogus_comment() {
    let input = "<?php echo ?>";
    let tokens = tokenize(input);
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "?php echo ?"));
    assert!(parse_errors(input).contains(&ParseError::UnexpectedQuestionMarkInsteadOfTagName));
}

#[test]
fn test_cdata_becomes_bogus_comment() {
    // No foreign content without a tree builder, so CDATA is always bogus
    let input = "<![CDATA[x]]>";
    let tokens = tokenize(input);
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "[CDATA[x]]"));
    assert!(parse_errors(input).contains(&ParseError::CdataInHtmlContent));
}

// ========== Raw text element (RCDATA/RAWTEXT/script data) tests ==========

#[test]
fn test_style_element_rawtext() {
    // Style content should be treated as raw text, not parsed as tags
    let tokens = tokenize("<style>body { color: red; }</style>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "style"));
    assert!(matches!(&tokens[1], Token::Character { data } if data == "body { color: red; }"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "style"));
    assert!(matches!(tokens.last(), Some(Token::EndOfFile)));
}

#[test]
fn test_title_element_rcdata() {
    let tokens = tokenize("<title>My Page</title>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "title"));
    assert!(matches!(&tokens[1], Token::Character { data } if data == "My Page"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "title"));
}

#[test]
fn test_title_rcdata_decodes_character_references() {
    // RCDATA keeps markup inert but still expands character references
    let tokens = tokenize("<title>a &amp; b</title>");
    assert!(matches!(&tokens[1], Token::Character { data } if data == "a & b"));
}

#[test]
fn test_style_with_fake_tags() {
    // Tags inside style should NOT be parsed as tags
    let tokens = tokenize("<style><div>not a tag</div></style>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "style"));
    assert!(matches!(&tokens[1], Token::Character { data } if data == "<div>not a tag</div>"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "style"));
}

#[test]
fn test_title_with_less_than() {
    // Less-than signs in title should be emitted as characters
    let tokens = tokenize("<title>a < b</title>");
    assert_eq!(character_data(&tokens), "a < b");
}

#[test]
fn test_style_with_wrong_end_tag() {
    // </notastyle> inside style should NOT close the style element
    let tokens = tokenize("<style>a</notastyle>b</style>");
    assert_eq!(character_data(&tokens), "a</notastyle>b");
}

#[test]
fn test_textarea_element_rcdata() {
    let tokens = tokenize("<textarea><b>bold?</b></textarea>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "textarea"));
    assert!(matches!(&tokens[1], Token::Character { data } if data == "<b>bold?</b>"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "textarea"));
}

#[test]
fn test_xmp_element_rawtext() {
    let tokens = tokenize("<xmp><html>is text</html></xmp>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "xmp"));
    assert!(matches!(&tokens[1], Token::Character { data } if data == "<html>is text</html>"));
}

#[test]
fn test_iframe_element_rawtext() {
    let tokens = tokenize("<iframe>some content</iframe>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "iframe"));
    assert!(matches!(&tokens[1], Token::Character { data } if data == "some content"));
}

#[test]
fn test_script_element_raw_content() {
    let tokens = tokenize("<script>if (a < b) { f(); }</script>");

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "script"));
    assert!(matches!(&tokens[1], Token::Character { data } if data == "if (a < b) { f(); }"));
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "script"));
}

#[test]
fn test_script_end_tag_with_uppercase_name() {
    let tokens = tokenize("<script>x</SCRIPT>");
    assert!(matches!(&tokens[2], Token::EndTag { name, .. } if name == "script"));
}

// ========== Character reference tests ==========

#[test]
fn test_character_reference_bare_ampersand() {
    // [§ 13.2.5.72 Character reference state]
    // Bare ampersand followed by non-alphanumeric should flush as literal '&'
    let tokens = tokenize("a & b");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "a & b"));
    assert!(matches!(tokens[1], Token::EndOfFile));
}

#[test]
fn test_named_character_reference_amp() {
    // [§ 13.2.5.73 Named character reference state]
    // &amp; should be replaced with & - and the surrounding text stays one token
    let tokens = tokenize("a&amp;b");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "a&b"));
}

#[test]
fn test_named_character_reference_lt_gt() {
    // &lt; and &gt; should be replaced with < and >
    let tokens = tokenize("&lt;div&gt;");
    assert_eq!(character_data(&tokens), "<div>");
}

#[test]
fn test_named_character_reference_without_semicolon() {
    // Legacy entities without semicolon should still work
    let input = "&amp is ok";
    let tokens = tokenize(input);
    assert_eq!(character_data(&tokens), "& is ok");
    assert!(parse_errors(input).contains(&ParseError::MissingSemicolonAfterCharacterReference));
}

#[test]
fn test_named_character_reference_unknown() {
    // Unknown entities should be passed through as-is
    let input = "&notreal;";
    let tokens = tokenize(input);
    assert_eq!(character_data(&tokens), "&notreal;");
    assert!(parse_errors(input).contains(&ParseError::UnknownNamedCharacterReference));
}

#[test]
fn test_named_character_reference_in_attribute() {
    // Entities in attribute values should be replaced
    let tokens = tokenize(r#"<a href="?a=1&amp;b=2">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].value, "?a=1&b=2");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_named_character_reference_historical_attribute_exception() {
    // "&amp=" in an attribute value: no semicolon and followed by '=',
    // so for historical reasons the reference is NOT decoded
    let tokens = tokenize(r#"<a href="?a=1&amp=2">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].value, "?a=1&amp=2");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_character_reference_in_unquoted_attribute_value() {
    let tokens = tokenize("<a b=x&amp;y>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].value, "x&y");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_multi_character_entity_expansion() {
    let tokens = tokenize("&fjlig;");
    assert_eq!(character_data(&tokens), "fj");
}

#[test]
fn test_numeric_character_reference_decimal() {
    let tokens = tokenize("&#60;tag&#62;");
    assert_eq!(character_data(&tokens), "<tag>");
}

#[test]
fn test_numeric_character_reference_hexadecimal() {
    let tokens = tokenize("&#x3C;&#X3e;");
    assert_eq!(character_data(&tokens), "<>");
}

#[test]
fn test_numeric_character_reference_missing_semicolon() {
    let input = "&#65 ok";
    let tokens = tokenize(input);
    assert_eq!(character_data(&tokens), "A ok");
    assert!(parse_errors(input).contains(&ParseError::MissingSemicolonAfterCharacterReference));
}

#[test]
fn test_numeric_character_reference_without_digits() {
    let input = "&#;";
    let tokens = tokenize(input);
    assert_eq!(character_data(&tokens), "&#;");
    assert!(
        parse_errors(input).contains(&ParseError::AbsenceOfDigitsInNumericCharacterReference)
    );
}

#[test]
fn test_null_character_reference() {
    let input = "&#0;";
    let tokens = tokenize(input);
    assert_eq!(character_data(&tokens), "\u{FFFD}");
    assert!(parse_errors(input).contains(&ParseError::NullCharacterReference));
}

#[test]
fn test_out_of_range_character_reference() {
    let input = "&#x110000;";
    let tokens = tokenize(input);
    assert_eq!(character_data(&tokens), "\u{FFFD}");
    assert!(parse_errors(input).contains(&ParseError::CharacterReferenceOutsideUnicodeRange));
}

#[test]
fn test_surrogate_character_reference() {
    let input = "&#xD800;";
    let tokens = tokenize(input);
    assert_eq!(character_data(&tokens), "\u{FFFD}");
    assert!(parse_errors(input).contains(&ParseError::SurrogateCharacterReference));
}

#[test]
fn test_control_character_reference_windows_1252_mapping() {
    // 0x80 maps to the euro sign per the replacement table
    let input = "&#x80;";
    let tokens = tokenize(input);
    assert_eq!(character_data(&tokens), "\u{20AC}");
    assert!(parse_errors(input).contains(&ParseError::ControlCharacterReference));
}

#[test]
fn test_character_reference_in_rcdata() {
    let tokens = tokenize("<textarea>&lt;b&gt;</textarea>");
    assert!(matches!(&tokens[1], Token::Character { data } if data == "<b>"));
}

// ========== Pull interface ==========

#[test]
fn test_pull_one_token_at_a_time() {
    let mut tokenizer = HTMLTokenizer::new("<em>x</em>");
    assert!(matches!(
        tokenizer.next_token(),
        Some(Token::StartTag { name, .. }) if name == "em"
    ));
    assert!(matches!(
        tokenizer.next_token(),
        Some(Token::Character { data }) if data == "x"
    ));
    assert!(matches!(
        tokenizer.next_token(),
        Some(Token::EndTag { name, .. }) if name == "em"
    ));
    assert!(matches!(tokenizer.next_token(), Some(Token::EndOfFile)));
    assert_eq!(tokenizer.next_token(), None);
}

#[test]
fn test_iterator_interface() {
    let doctypes = HTMLTokenizer::new("<!DOCTYPE html><p>x</p>")
        .filter(|t| matches!(t, Token::Doctype { .. }))
        .count();
    assert_eq!(doctypes, 1);
}

#[test]
fn test_clean_input_has_no_parse_errors() {
    let input = r#"<!DOCTYPE html><html><body><p class="x">hi</p></body></html>"#;
    assert!(parse_errors(input).is_empty());
}
