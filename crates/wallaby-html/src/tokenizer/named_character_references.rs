//! Named character reference lookup table.
//!
//! [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
//!
//! "Consume the maximum number of characters possible, where the consumed
//! characters are one of the identifiers in the first column of the named
//! character references table."
//!
//! The full standard defines 2,231 entities; this table carries the common
//! ones. Some entities expand to more than one character (e.g. `fjlig;` →
//! `fj`), and a handful of legacy entities match without their trailing
//! semicolon (e.g. `&amp` for `&amp;`).

/// Entity names (without the leading `&`) and their replacement strings.
///
/// The table is small enough that lookups scan it directly.
static NAMED_ENTITIES: &[(&str, &str)] = &[
    // Markup-significant characters (required for basic HTML)
    ("amp;", "&"),
    ("amp", "&"), // Legacy (no semicolon)
    ("lt;", "<"),
    ("lt", "<"), // Legacy
    ("gt;", ">"),
    ("gt", ">"), // Legacy
    ("quot;", "\""),
    ("quot", "\""), // Legacy
    ("apos;", "'"),
    ("nbsp;", "\u{00A0}"),
    ("nbsp", "\u{00A0}"), // Legacy
    // Punctuation and symbols
    ("copy;", "\u{00A9}"),   // ©
    ("copy", "\u{00A9}"),    // Legacy
    ("reg;", "\u{00AE}"),    // ®
    ("reg", "\u{00AE}"),     // Legacy
    ("trade;", "\u{2122}"),  // ™
    ("sect;", "\u{00A7}"),   // §
    ("para;", "\u{00B6}"),   // ¶
    ("dagger;", "\u{2020}"), // †
    ("Dagger;", "\u{2021}"), // ‡
    ("mdash;", "\u{2014}"),  // —
    ("ndash;", "\u{2013}"),  // –
    ("hellip;", "\u{2026}"), // …
    ("bull;", "\u{2022}"),   // •
    ("middot;", "\u{00B7}"), // ·
    ("lsquo;", "\u{2018}"),  // '
    ("rsquo;", "\u{2019}"),  // '
    ("ldquo;", "\u{201C}"),  // "
    ("rdquo;", "\u{201D}"),  // "
    ("laquo;", "\u{00AB}"),  // «
    ("raquo;", "\u{00BB}"),  // »
    ("shy;", "\u{00AD}"),
    ("ensp;", "\u{2002}"),
    ("emsp;", "\u{2003}"),
    ("thinsp;", "\u{2009}"),
    ("zwnj;", "\u{200C}"),
    ("zwj;", "\u{200D}"),
    // Currency
    ("cent;", "\u{00A2}"),   // ¢
    ("pound;", "\u{00A3}"),  // £
    ("curren;", "\u{00A4}"), // ¤
    ("euro;", "\u{20AC}"),   // €
    ("yen;", "\u{00A5}"),    // ¥
    // Math symbols
    ("times;", "\u{00D7}"),  // ×
    ("divide;", "\u{00F7}"), // ÷
    ("plusmn;", "\u{00B1}"), // ±
    ("minus;", "\u{2212}"),  // −
    ("ne;", "\u{2260}"),     // ≠
    ("le;", "\u{2264}"),     // ≤
    ("ge;", "\u{2265}"),     // ≥
    ("equiv;", "\u{2261}"),  // ≡
    ("asymp;", "\u{2248}"),  // ≈
    ("deg;", "\u{00B0}"),    // °
    ("micro;", "\u{00B5}"),  // µ
    ("frac12;", "\u{00BD}"), // ½
    ("frac14;", "\u{00BC}"), // ¼
    ("frac34;", "\u{00BE}"), // ¾
    ("sup2;", "\u{00B2}"),   // ²
    ("sup3;", "\u{00B3}"),   // ³
    ("infin;", "\u{221E}"),  // ∞
    ("sum;", "\u{2211}"),    // ∑
    ("prod;", "\u{220F}"),   // ∏
    ("radic;", "\u{221A}"),  // √
    // Arrows
    ("larr;", "\u{2190}"), // ←
    ("rarr;", "\u{2192}"), // →
    ("uarr;", "\u{2191}"), // ↑
    ("darr;", "\u{2193}"), // ↓
    ("harr;", "\u{2194}"), // ↔
    // Greek letters (commonly used)
    ("alpha;", "\u{03B1}"),
    ("beta;", "\u{03B2}"),
    ("gamma;", "\u{03B3}"),
    ("delta;", "\u{03B4}"),
    ("epsilon;", "\u{03B5}"),
    ("lambda;", "\u{03BB}"),
    ("mu;", "\u{03BC}"),
    ("pi;", "\u{03C0}"),
    ("sigma;", "\u{03C3}"),
    ("tau;", "\u{03C4}"),
    ("phi;", "\u{03C6}"),
    ("omega;", "\u{03C9}"),
    ("Delta;", "\u{0394}"),
    ("Omega;", "\u{03A9}"),
    // Accented characters (common)
    ("Agrave;", "\u{00C0}"),
    ("Aacute;", "\u{00C1}"),
    ("Acirc;", "\u{00C2}"),
    ("Atilde;", "\u{00C3}"),
    ("Auml;", "\u{00C4}"),
    ("Aring;", "\u{00C5}"),
    ("AElig;", "\u{00C6}"),
    ("agrave;", "\u{00E0}"),
    ("aacute;", "\u{00E1}"),
    ("acirc;", "\u{00E2}"),
    ("atilde;", "\u{00E3}"),
    ("auml;", "\u{00E4}"),
    ("aring;", "\u{00E5}"),
    ("aelig;", "\u{00E6}"),
    ("Egrave;", "\u{00C8}"),
    ("Eacute;", "\u{00C9}"),
    ("egrave;", "\u{00E8}"),
    ("eacute;", "\u{00E9}"),
    ("Igrave;", "\u{00CC}"),
    ("Iacute;", "\u{00CD}"),
    ("igrave;", "\u{00EC}"),
    ("iacute;", "\u{00ED}"),
    ("Ograve;", "\u{00D2}"),
    ("Oacute;", "\u{00D3}"),
    ("Ouml;", "\u{00D6}"),
    ("Oslash;", "\u{00D8}"),
    ("ograve;", "\u{00F2}"),
    ("oacute;", "\u{00F3}"),
    ("ouml;", "\u{00F6}"),
    ("oslash;", "\u{00F8}"),
    ("Ugrave;", "\u{00D9}"),
    ("Uacute;", "\u{00DA}"),
    ("Uuml;", "\u{00DC}"),
    ("ugrave;", "\u{00F9}"),
    ("uacute;", "\u{00FA}"),
    ("uuml;", "\u{00FC}"),
    ("ntilde;", "\u{00F1}"),
    ("Ntilde;", "\u{00D1}"),
    ("ccedil;", "\u{00E7}"),
    ("Ccedil;", "\u{00C7}"),
    ("szlig;", "\u{00DF}"),
    // Multi-character expansion
    ("fjlig;", "fj"),
];

/// Look up a named character reference.
///
/// Returns the replacement string if found.
/// The `name` should NOT include the leading '&'.
///
/// # Example
/// ```ignore
/// lookup_entity("amp;")  // Returns Some("&")
/// lookup_entity("amp")   // Returns Some("&") - legacy support
/// lookup_entity("xyz;")  // Returns None
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, replacement)| *replacement)
}

/// Check if any entity name starts with the given prefix.
///
/// This is used to determine whether we should keep consuming characters
/// while looking for the longest match.
///
/// # Example
/// ```ignore
/// any_entity_has_prefix("am")   // true (amp, amp;)
/// any_entity_has_prefix("xyz")  // false
/// ```
#[must_use]
pub fn any_entity_has_prefix(prefix: &str) -> bool {
    NAMED_ENTITIES
        .iter()
        .any(|(entity, _)| entity.starts_with(prefix))
}
